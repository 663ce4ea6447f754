//! Prioritization engine - applies AHP weights to complaint records.
//!
//! Complaints are scored as the dot product of the derived weight vector
//! and their per-criterion scores, ranked densely by descending score,
//! and partitioned into priority bands by score quartiles. The ranked
//! result set is an immutable value object carrying its own query
//! operations; [`ComplaintPrioritizer`] is a thin stateful facade over it
//! for callers that prefer the staged call protocol.

mod band;
mod complaint;
mod defaults;
mod engine;
mod errors;
mod ranked;

pub use band::PriorityBand;
pub use complaint::{Complaint, Complexity, Severity};
pub use defaults::{default_criteria, default_judgments, DEFAULT_CRITERIA};
pub use engine::{ComplaintPrioritizer, ConsistencyWarning};
pub use errors::PrioritizeError;
pub use ranked::{PrioritizedComplaint, RankedComplaints};
