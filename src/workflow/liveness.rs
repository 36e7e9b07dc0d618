use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;

/// One-way alive → ended flag with an awaitable end.
pub(crate) struct Liveness {
    alive: AtomicBool,
    notify: Notify,
}

impl Liveness {
    pub(crate) fn new() -> Self {
        Self {
            alive: AtomicBool::new(true),
            notify: Notify::new(),
        }
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Returns `true` only for the call that actually ended it.
    pub(crate) fn end(&self) -> bool {
        let was_alive = self.alive.swap(false, Ordering::SeqCst);
        if was_alive {
            self.notify.notify_waiters();
        }
        was_alive
    }

    pub(crate) async fn ended(&self) {
        // Register before checking the flag, or an end() in between is lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if !self.is_alive() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn end_is_reported_once() {
        let liveness = Liveness::new();
        assert!(liveness.is_alive());
        assert!(liveness.end());
        assert!(!liveness.end());
        assert!(!liveness.is_alive());
    }

    #[tokio::test]
    async fn ended_returns_immediately_when_already_ended() {
        let liveness = Liveness::new();
        liveness.end();
        tokio::time::timeout(Duration::from_secs(1), liveness.ended())
            .await
            .expect("ended() should not block");
    }

    #[tokio::test]
    async fn ended_wakes_waiters() {
        let liveness = Arc::new(Liveness::new());
        let waiter = {
            let liveness = Arc::clone(&liveness);
            tokio::spawn(async move { liveness.ended().await })
        };
        tokio::task::yield_now().await;
        liveness.end();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
    }
}
