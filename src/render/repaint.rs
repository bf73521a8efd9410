//! Deferred repaint requests.
//!
//! Widgets hold a [`Notifier`] and call [`Notifier::request`] after their state
//! changes. Requests go into a bounded tokio channel that only the UI loop
//! drains; one drain results in one full repaint no matter how many requests
//! piled up.

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError, error::TrySendError};
use tracing::{trace, warn};

/// Default bound of the repaint queue.
pub const DEFAULT_REPAINT_CAPACITY: usize = 100;

/// Sending half of the repaint queue, cloned into every widget.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::Sender<()>,
}

impl Notifier {
    /// Ask the UI loop for a repaint.
    ///
    /// When the queue is full a caller on a plain thread blocks until the UI
    /// loop catches up. Inside a tokio runtime blocking is not allowed, and a
    /// full queue already guarantees a pending repaint, so the request is
    /// dropped instead. Requests after the painter is gone are ignored.
    pub fn request(&self) {
        match self.tx.try_send(()) {
            Ok(()) => trace!("repaint requested"),
            Err(TrySendError::Full(())) => {
                if Handle::try_current().is_ok() {
                    trace!("repaint queue full, coalescing request");
                } else if self.tx.blocking_send(()).is_err() {
                    trace!("repaint queue closed");
                }
            }
            Err(TrySendError::Closed(())) => trace!("repaint queue closed"),
        }
    }
}

/// Receiving half, owned by the painter.
#[derive(Debug)]
pub struct RepaintQueue {
    tx: mpsc::Sender<()>,
    rx: mpsc::Receiver<()>,
}

impl RepaintQueue {
    /// A queue holding at most `capacity` pending requests (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            warn!("repaint queue capacity 0 is invalid, using 1");
            1
        } else {
            capacity
        };
        let (tx, rx) = mpsc::channel(capacity);
        Self { tx, rx }
    }

    /// A new sender for this queue.
    pub fn notifier(&self) -> Notifier {
        Notifier { tx: self.tx.clone() }
    }

    /// Wait for the next request and then swallow any others already queued.
    ///
    /// Returns how many requests were consumed. Never returns 0, since the
    /// queue keeps a sender of its own and so cannot close.
    pub async fn next_batch(&mut self) -> usize {
        match self.rx.recv().await {
            Some(()) => 1 + self.drain(),
            None => 0,
        }
    }

    /// Remove every queued request without waiting, returning the count.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        loop {
            match self.rx.try_recv() {
                Ok(()) => count += 1,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        count
    }

    /// Maximum number of pending requests.
    pub fn capacity(&self) -> usize {
        self.tx.max_capacity()
    }
}

impl Default for RepaintQueue {
    fn default() -> Self {
        Self::new(DEFAULT_REPAINT_CAPACITY)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn default_capacity() {
        let queue = RepaintQueue::default();
        assert_eq!(queue.capacity(), DEFAULT_REPAINT_CAPACITY);
        assert_eq!(RepaintQueue::new(0).capacity(), 1);
    }

    #[test]
    fn drain_counts_requests() {
        let mut queue = RepaintQueue::new(8);
        let notifier = queue.notifier();
        notifier.request();
        notifier.request();
        notifier.request();
        assert_eq!(queue.drain(), 3);
        assert_eq!(queue.drain(), 0);
    }

    #[test]
    fn next_batch_collapses_pending() {
        let mut queue = RepaintQueue::new(8);
        let notifier = queue.notifier();
        notifier.request();
        notifier.request();
        let consumed = tokio_test::block_on(queue.next_batch());
        assert_eq!(consumed, 2);
    }

    #[test]
    fn full_queue_coalesces_inside_runtime() {
        let mut queue = RepaintQueue::new(2);
        let notifier = queue.notifier();
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        rt.block_on(async {
            for _ in 0..5 {
                notifier.request();
            }
        });
        assert_eq!(queue.drain(), 2);
    }

    #[test]
    fn full_queue_blocks_foreign_thread_until_drained() {
        let mut queue = RepaintQueue::new(1);
        let notifier = queue.notifier();
        notifier.request();

        let producer = thread::spawn(move || {
            // Blocks: the single slot is taken.
            notifier.request();
        });

        thread::sleep(Duration::from_millis(20));
        assert!(!producer.is_finished());
        let first = queue.drain();
        producer.join().unwrap();
        let second = queue.drain();
        assert_eq!(first + second, 2);
    }
}
