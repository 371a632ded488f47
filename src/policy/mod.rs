//! Priority policy: derives the comparable key that defines the queue order.
//!
//! The policy is a pure function from patient attributes to a
//! [`PriorityKey`]; it carries no state and performs no ordering itself.
//! The ordering law it encodes:
//!
//! 1. **Severity dominates.** A strictly lower severity rank precedes,
//!    regardless of legal flags.
//! 2. **Legal priority is boolean.** Among equal severity, any non-empty
//!    flag set precedes an empty one. The count and kind of flags never
//!    matter — an elderly pregnant patient ranks exactly like a pregnant
//!    one. This is an explicit policy choice, not an oversight; weighting
//!    among legal categories would be a rule change, not a refinement.
//! 3. **Arrival breaks ties.** Within equal severity and legal rank, the
//!    earlier arrival sequence precedes.

mod engine;
mod types;

pub use engine::{legal_rank, priority_key, severity_rank};
pub use types::PriorityKey;
