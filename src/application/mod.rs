//! Application layer - use-case handlers wiring ports to the domain.

mod prioritize_complaints;

pub use prioritize_complaints::{
    PrioritizeComplaintsCommand, PrioritizeComplaintsError, PrioritizeComplaintsHandler,
    PrioritizeComplaintsResult, TopComplaint,
};
