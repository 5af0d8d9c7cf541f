//! Single-flight background annotation fetch.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::data::AnnotationSet;
use crate::source::AnnotationSource;

/// One outstanding annotation fetch.
///
/// The fetch runs on a worker thread and delivers its result through a
/// bounded channel. Dropping the job is the cancellation primitive: the
/// worker keeps running, but its completion lands in a closed channel and
/// can never be observed. The worker is never joined, so a hung fetch can
/// never block whoever replaces the job.
pub struct AnnotationJob {
    receiver: Receiver<AnnotationSet>,
    handle: thread::JoinHandle<()>,
    started: Instant,
}

impl AnnotationJob {
    /// Start fetching annotations from `document` in the background.
    ///
    /// A fetch error degrades to an empty result; the failure is logged and
    /// the sidebar shows its empty-state placeholder.
    pub fn spawn(document: Arc<dyn AnnotationSource>) -> Self {
        let (sender, receiver) = mpsc::sync_channel(1);
        let handle = thread::spawn(move || {
            let set = match document.fetch_annotations() {
                Ok(pages) => AnnotationSet::new(pages),
                Err(error) => {
                    warn!(
                        source_id = %document.id(),
                        error = %error,
                        "annotation fetch failed, degrading to empty result"
                    );
                    AnnotationSet::new(Vec::new())
                }
            };
            // A send error means the job was superseded; the result is
            // discarded unobserved.
            let _ = sender.send(set);
        });
        Self {
            receiver,
            handle,
            started: Instant::now(),
        }
    }

    /// Consume the result if the fetch has completed.
    pub fn try_finish(&self) -> Option<AnnotationSet> {
        self.receiver.try_recv().ok()
    }

    /// Consume the result, waiting up to `timeout` for completion.
    pub fn wait_finish(&self, timeout: Duration) -> Option<AnnotationSet> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Whether the worker thread is still running.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Time since the fetch was started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
