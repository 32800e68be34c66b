//! Receivers of job notifications.

use crossbeam_channel::{unbounded, Receiver, Sender};

use super::status::{ScanReport, Status, StatusLevel};

/// Receives status, progress, and the final answer of a running job.
///
/// Callbacks run on the job's worker thread and must return promptly.
/// [`on_done`](Self::on_done) is called exactly once per job, after every
/// other callback, whatever the outcome.
pub trait ScanObserver: Send + Sync {
    fn on_status(&self, status: Status);

    /// Whole-percent progress of the pairwise scan.
    fn on_progress(&self, percent: u8);

    /// Called once for runs that produced an answer, never for cancelled or
    /// failed runs.
    fn on_result(&self, report: ScanReport);

    fn on_done(&self);
}

/// One observer callback as a value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    Status(Status),
    Progress(u8),
    Result(ScanReport),
    Done,
}

/// Forwards every callback over an unbounded channel.
///
/// Sending never blocks. Events sent after the receiver is gone are dropped.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: Sender<ScanEvent>,
}

impl ChannelObserver {
    /// Creates an observer and the receiving end of its channel.
    pub fn new() -> (Self, Receiver<ScanEvent>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }

    pub fn from_sender(tx: Sender<ScanEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: ScanEvent) {
        let _ = self.tx.send(event);
    }
}

impl ScanObserver for ChannelObserver {
    fn on_status(&self, status: Status) {
        self.send(ScanEvent::Status(status));
    }

    fn on_progress(&self, percent: u8) {
        self.send(ScanEvent::Progress(percent));
    }

    fn on_result(&self, report: ScanReport) {
        self.send(ScanEvent::Result(report));
    }

    fn on_done(&self) {
        self.send(ScanEvent::Done);
    }
}

/// Writes notifications to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl ScanObserver for LoggingObserver {
    fn on_status(&self, status: Status) {
        match status.level {
            StatusLevel::Info | StatusLevel::Success => log::info!("{}", status.text),
            StatusLevel::Warning => log::warn!("{}", status.text),
            StatusLevel::Error => log::error!("{}", status.text),
        }
    }

    fn on_progress(&self, percent: u8) {
        log::trace!("scan progress {}%", percent);
    }

    fn on_result(&self, report: ScanReport) {
        match report {
            ScanReport::Found(min) => log::info!("minimum distance {}", min),
            ScanReport::NotAvailable => log::info!("minimum distance not available"),
        }
    }

    fn on_done(&self) {
        log::debug!("scan job done");
    }
}
