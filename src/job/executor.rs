//! Execution contexts for submitted jobs.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Sender};

/// A unit of work handed to an [`Executor`].
pub type Work = Box<dyn FnOnce() + Send + 'static>;

/// Runs submitted work, possibly on another thread.
///
/// `submit` never blocks on the work itself.
pub trait Executor {
    fn submit(&self, work: Work);
}

/// Runs work immediately on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineExecutor;

impl Executor for InlineExecutor {
    fn submit(&self, work: Work) {
        work();
    }
}

/// A single named background thread draining a FIFO queue.
///
/// Work runs one item at a time in submission order. A panicking item is
/// logged and does not stop the worker. Dropping the executor finishes the
/// queued work and joins the thread.
pub struct WorkerExecutor {
    tx: Option<Sender<Work>>,
    handle: Option<JoinHandle<()>>,
}

impl WorkerExecutor {
    /// Spawns the worker thread.
    pub fn new(name: &str) -> io::Result<Self> {
        let (tx, rx) = unbounded::<Work>();
        let thread_name = name.to_string();

        let handle = thread::Builder::new().name(name.into()).spawn(move || {
            log::debug!("worker `{}` started", thread_name);
            for work in rx.iter() {
                if panic::catch_unwind(AssertUnwindSafe(work)).is_err() {
                    log::error!("worker `{}`: submitted work panicked", thread_name);
                }
            }
            log::debug!("worker `{}` stopped", thread_name);
        })?;

        Ok(Self {
            tx: Some(tx),
            handle: Some(handle),
        })
    }
}

impl Executor for WorkerExecutor {
    fn submit(&self, work: Work) {
        let sent = match &self.tx {
            Some(tx) => tx.send(work).is_ok(),
            None => false,
        };
        if !sent {
            log::error!("worker queue closed; submitted work dropped");
        }
    }
}

impl Drop for WorkerExecutor {
    fn drop(&mut self) {
        // Closing the queue ends the worker loop once it drains.
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("worker thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_inline_runs_immediately() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        InlineExecutor.submit(Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_worker_runs_in_order_on_named_thread() {
        let (tx, rx) = unbounded();
        {
            let worker = WorkerExecutor::new("gapscan-test").unwrap();
            for i in 0..5 {
                let tx = tx.clone();
                worker.submit(Box::new(move || {
                    let name = thread::current().name().map(str::to_string);
                    tx.send((i, name)).unwrap();
                }));
            }
        }
        let seen: Vec<(i32, Option<String>)> = rx.try_iter().collect();
        assert_eq!(seen.len(), 5);
        for (expected, (i, name)) in seen.into_iter().enumerate() {
            assert_eq!(i, expected as i32);
            assert_eq!(name.as_deref(), Some("gapscan-test"));
        }
    }

    #[test]
    fn test_worker_survives_panicking_work() {
        let count = Arc::new(AtomicUsize::new(0));
        {
            let worker = WorkerExecutor::new("gapscan-panic").unwrap();
            worker.submit(Box::new(|| panic!("boom")));
            let c = Arc::clone(&count);
            worker.submit(Box::new(move || {
                c.fetch_add(1, Ordering::SeqCst);
            }));
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
