use std::time::Duration;

use tokio::task::JoinHandle;

/// A delayed callback bound to its owner: dropping the handle before the
/// delay elapses cancels the callback.
#[derive(Debug)]
pub struct AutoAdvance {
    id: u64,
    handle: JoinHandle<()>,
}

impl AutoAdvance {
    pub fn schedule<F>(id: u64, delay: Duration, tick: F) -> Self
    where
        F: FnOnce(u64) + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tick(id);
        });

        Self { id, handle }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    };

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let fired = Arc::new(AtomicU64::new(0));
        let seen = fired.clone();
        let timer = AutoAdvance::schedule(7, Duration::from_millis(300), move |id| {
            seen.store(id, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 7);
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_cancels() {
        let fired = Arc::new(AtomicU64::new(0));
        let seen = fired.clone();
        let timer = AutoAdvance::schedule(1, Duration::from_millis(300), move |id| {
            seen.store(id, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        drop(timer);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
