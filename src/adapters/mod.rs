//! Adapters - implementations of the ports.

mod json_file;

pub use json_file::{JsonComplaintSource, JsonResultSink};
