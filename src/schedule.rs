//! The render scheduler: a saturating dirty signal.
//!
//! Any number of [`RerenderHandle`]s post unit signals into a bounded channel
//! without ever blocking; signals beyond capacity are dropped. At the top of a
//! loop iteration the UI thread calls [`RenderScheduler::drain`], collapsing
//! everything queued into one "rebuild now" decision.

use tokio::sync::mpsc;

/// Default capacity of the redraw signal queue.
pub const DEFAULT_REDRAW_CAPACITY: usize = 100;

/// Fire-and-forget rerender requests. Cheap to clone and `Send`.
#[derive(Clone, Debug)]
pub struct RerenderHandle {
    tx: mpsc::Sender<()>,
}

impl RerenderHandle {
    /// Ask for one more rebuild. Never blocks; a full queue already guarantees
    /// a rebuild, so the extra request is dropped.
    pub fn request(&self) {
        if self.tx.try_send(()).is_err() {
            tracing::trace!("rerender queue saturated, request coalesced");
        }
    }
}

/// Consumer side of the redraw signal, owned by the frame driver.
#[derive(Debug)]
pub struct RenderScheduler {
    tx: mpsc::Sender<()>,
    rx: mpsc::Receiver<()>,
}

impl RenderScheduler {
    /// A scheduler whose queue holds at most `capacity` pending requests.
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        Self { tx, rx }
    }

    /// A handle that posts into this scheduler.
    pub fn handle(&self) -> RerenderHandle {
        RerenderHandle { tx: self.tx.clone() }
    }

    /// Shorthand for `self.handle().request()`.
    pub fn request(&self) {
        self.handle().request();
    }

    /// Consume every pending request. Returns `true` if there was at least one.
    pub fn drain(&mut self) -> bool {
        let mut requested = false;
        while self.rx.try_recv().is_ok() {
            requested = true;
        }
        requested
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REDRAW_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_requested() {
        let mut s = RenderScheduler::default();
        assert!(!s.drain());
    }

    #[test]
    fn many_requests_collapse_to_one() {
        let mut s = RenderScheduler::default();
        let h = s.handle();
        for _ in 0..42 {
            h.request();
        }
        assert!(s.drain());
        assert!(!s.drain());
    }

    #[test]
    fn overflow_is_dropped_not_fatal() {
        let mut s = RenderScheduler::new(3);
        let h = s.handle();
        for _ in 0..10 {
            h.request();
        }
        assert!(s.drain());
        assert!(!s.drain());
    }

    #[test]
    fn handles_work_across_threads() {
        let mut s = RenderScheduler::default();
        let h = s.handle();
        std::thread::spawn(move || h.request()).join().unwrap();
        assert!(s.drain());
    }

    #[test]
    fn cloned_handles_share_the_queue() {
        let mut s = RenderScheduler::new(1);
        let a = s.handle();
        let b = a.clone();
        a.request();
        b.request();
        assert!(s.drain());
        b.request();
        assert!(s.drain());
    }
}
