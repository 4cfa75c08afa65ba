//! Delayed callbacks on a background thread.

use std::thread::JoinHandle;
use std::time::Duration;

use crate::error::GfxError;

/// Run `f` once on a named timer thread after `delay`.
///
/// The callback runs off the render thread: anything it shares with the
/// frame loop needs its own synchronization.
pub fn set_timeout<F>(delay: Duration, f: F) -> Result<JoinHandle<()>, GfxError>
where
    F: FnOnce() + Send + 'static,
{
    std::thread::Builder::new()
        .name("protogfx-timeout".to_owned())
        .spawn(move || {
            std::thread::sleep(delay);
            f();
        })
        .map_err(|e| {
            log::error!("Failed to spawn timeout thread: {e}");
            GfxError::ThreadSpawn(e)
        })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{mpsc, Arc};
    use std::time::Instant;

    use super::*;

    #[test]
    fn test_callback_runs_after_delay() {
        let start = Instant::now();
        let (tx, rx) = mpsc::channel();
        let handle = set_timeout(Duration::from_millis(20), move || {
            tx.send(start.elapsed()).unwrap();
        })
        .unwrap();
        let waited = rx.recv().unwrap();
        handle.join().unwrap();
        assert!(waited >= Duration::from_millis(20));
    }

    #[test]
    fn test_runs_on_named_thread() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        set_timeout(Duration::ZERO, move || {
            assert_eq!(std::thread::current().name(), Some("protogfx-timeout"));
            flag.store(true, Ordering::SeqCst);
        })
        .unwrap()
        .join()
        .unwrap();
        assert!(ran.load(Ordering::SeqCst));
    }
}
