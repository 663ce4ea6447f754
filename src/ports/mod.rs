//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the prioritization core and the outside world. Adapters implement
//! these ports.
//!
//! - `ComplaintSource` - loads complaint records for an analysis
//! - `ResultSink` - receives ranked results and the summary report

mod complaint_source;
mod result_sink;

pub use complaint_source::{ComplaintSource, SourceError};
pub use result_sink::{ExportError, ResultSink};
