//! Job orchestration.
//!
//! A [`ScanJob`] runs collection, normalization, the pairwise scan, and
//! aggregation as one unit on an [`Executor`], reporting to a
//! [`ScanObserver`].

mod executor;
mod observer;
mod scan_job;
mod status;

pub use executor::{Executor, InlineExecutor, Work, WorkerExecutor};
pub use observer::{ChannelObserver, LoggingObserver, ScanEvent, ScanObserver};
pub use scan_job::{ScanJob, SharedSource};
pub use status::{ScanReport, ScanResult, Status, StatusLevel};
