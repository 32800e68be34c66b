//! One cancellable minimum-distance run.

use std::sync::Arc;
use std::time::Instant;

use super::executor::Executor;
use super::observer::ScanObserver;
use super::status::{ScanReport, ScanResult, Status};
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::scan::{aggregate, normalize, scan, CancellationToken, ScanOutcome};
use crate::source::{GeometryCollector, HasApertureGeometry};

/// A source object shared with a background job.
pub type SharedSource = Arc<dyn HasApertureGeometry + Send + Sync>;

/// Collects, normalizes, scans, and aggregates one source object.
///
/// The job carries everything it needs, so it can be handed to any
/// [`Executor`]. The observer's `on_done` fires exactly once on every exit
/// path, including when the work is dropped unexecuted or panics.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use gapscan::config::ScanConfig;
/// use gapscan::job::{ChannelObserver, InlineExecutor, ScanEvent, ScanJob, SharedSource};
/// use gapscan::polygon::Region;
/// use gapscan::source::{Aperture, ApertureTable, GerberObject};
/// use gapscan::Point2;
///
/// let mut table = ApertureTable::new();
/// table.insert(
///     "D10",
///     Aperture::from_solids(vec![
///         Region::rectangle(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)),
///         Region::rectangle(Point2::new(1.25, 0.0), Point2::new(2.25, 1.0)),
///     ]),
/// );
/// let source: SharedSource = Arc::new(GerberObject::new("top.gbr", table));
///
/// let (observer, events) = ChannelObserver::new();
/// let job = ScanJob::new(Some(source), ScanConfig::default(), Arc::new(observer));
/// job.submit(&InlineExecutor);
///
/// let events: Vec<ScanEvent> = events.try_iter().collect();
/// assert_eq!(events.last(), Some(&ScanEvent::Done));
/// ```
pub struct ScanJob {
    source: Option<SharedSource>,
    config: ScanConfig,
    cancel: CancellationToken,
    observer: Arc<dyn ScanObserver>,
}

impl ScanJob {
    pub fn new(source: Option<SharedSource>, config: ScanConfig, observer: Arc<dyn ScanObserver>) -> Self {
        Self {
            source,
            config,
            cancel: CancellationToken::new(),
            observer,
        }
    }

    /// A handle that aborts this job when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Hands the job to `executor` and returns without waiting.
    pub fn submit(self, executor: &dyn Executor) {
        let done = DoneGuard::new(Arc::clone(&self.observer));
        executor.submit(Box::new(move || {
            self.run_guarded(done);
        }));
    }

    /// Runs the job on the calling thread.
    pub fn run(self) -> ScanResult {
        let done = DoneGuard::new(Arc::clone(&self.observer));
        self.run_guarded(done)
    }

    fn run_guarded(self, _done: DoneGuard) -> ScanResult {
        let started = Instant::now();
        let name = self
            .source
            .as_ref()
            .map(|s| s.name().to_string())
            .unwrap_or_default();
        log::info!("minimum distance scan of `{}` started", name);

        let result = match self.execute() {
            Ok(result) => result,
            Err(err) => self.report_error(err),
        };

        log::info!(
            "minimum distance scan of `{}` finished in {:.2?}: {:?}",
            name,
            started.elapsed(),
            result
        );
        result
    }

    fn execute(&self) -> Result<ScanResult, ScanError> {
        self.config.validate()?;
        let precision = self.config.precision()?;

        self.status(Status::info(
            "Started to search for the minimum distance between copper features.",
        ));

        let collector = GeometryCollector::new(self.config.validity_tolerance);
        let source = self.source.as_deref().map(|s| s as &dyn HasApertureGeometry);
        let features = collector.collect_observed(source, &self.cancel, |aperture| {
            self.status(Status::info(format!("Parsing geometry for aperture: {}", aperture)));
        })?;
        log::debug!("collected {} features", features.len());

        self.status(Status::info("Creating a buffer for the object geometry."));
        let set = normalize(&features)?;
        log::debug!("{} islands, {} pairs", set.len(), set.pair_count());

        self.status(Status::info(format!(
            "Finding the distances between each two elements. Iterations: {}",
            set.pair_count()
        )));

        let observer = &self.observer;
        let outcome = scan(&set, precision, &mut |percent| observer.on_progress(percent), &self.cancel)?;

        let histogram = match outcome {
            ScanOutcome::Completed(histogram) => histogram,
            ScanOutcome::NoPairs => return Ok(self.no_pairs()),
        };

        self.status(Status::info("Finding the minimum distance."));
        let minimum = match aggregate(&histogram, self.config.units) {
            Some(minimum) => minimum,
            None => return Ok(self.no_pairs()),
        };

        self.observer.on_result(ScanReport::Found(minimum));
        self.status(Status::success(format!(
            "Finished successfully. Minimum distance: {}",
            minimum
        )));
        Ok(ScanResult::Found(minimum))
    }

    fn no_pairs(&self) -> ScanResult {
        self.observer.on_result(ScanReport::NotAvailable);
        self.status(Status::warning(
            "Fewer than two separate copper features; there is no distance to measure.",
        ));
        ScanResult::NoPairs
    }

    fn report_error(&self, err: ScanError) -> ScanResult {
        match &err {
            ScanError::Cancelled => {
                log::info!("minimum distance scan cancelled");
                self.status(Status::info("Cancelled."));
                return ScanResult::Cancelled;
            }
            ScanError::NotFound => {
                self.status(Status::warning("There is no source object loaded."));
            }
            ScanError::InvalidInput(name) => {
                self.status(Status::error(format!(
                    "Only objects with aperture geometry can be evaluated; `{}` has none.",
                    name
                )));
            }
            _ => {
                log::error!("minimum distance scan failed: {}", err);
                self.status(Status::error(format!("Failed: {}", err)));
            }
        }
        ScanResult::Failed(err)
    }

    fn status(&self, status: Status) {
        self.observer.on_status(status);
    }
}

/// Issues `on_done` when dropped.
struct DoneGuard {
    observer: Arc<dyn ScanObserver>,
}

impl DoneGuard {
    fn new(observer: Arc<dyn ScanObserver>) -> Self {
        Self { observer }
    }
}

impl Drop for DoneGuard {
    fn drop(&mut self) {
        self.observer.on_done();
    }
}
