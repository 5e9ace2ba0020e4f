use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::error::{Error, Result};

/// Stop request shared between the signal handler and the main loop.
///
/// Requesting only flips a flag and wakes a pending [`wait`](Self::wait);
/// all teardown stays with whoever polls [`requested`](Self::requested).
#[derive(Clone)]
pub struct Shutdown {
    flag: Arc<AtomicBool>,
    notify: Sender<()>,
    wake: Receiver<()>,
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown {
    pub fn new() -> Self {
        let (notify, wake) = bounded(1);
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            notify,
            wake,
        }
    }

    /// Route SIGINT, SIGTERM and SIGHUP to [`request`](Self::request).
    ///
    /// SIGQUIT only raises the flag: it is seen at the next checkpoint but
    /// does not cut a pending [`wait`](Self::wait) short.
    pub fn install(&self) -> Result<()> {
        let shutdown = self.clone();
        ctrlc::set_handler(move || shutdown.request())?;
        quit::route(&self.flag).map_err(Error::QuitSignal)
    }

    pub fn request(&self) {
        self.flag.store(true, Ordering::SeqCst);
        let _ = self.notify.try_send(());
    }

    pub fn requested(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Sleep for `timeout` unless a stop is requested first.
    ///
    /// Returns whether a stop was requested.
    pub fn wait(&self, timeout: Duration) -> bool {
        if self.requested() {
            return true;
        }
        let _ = self.wake.recv_timeout(timeout);
        self.requested()
    }
}

#[cfg(unix)]
mod quit {
    use std::io;
    use std::ptr;
    use std::sync::atomic::{AtomicBool, AtomicPtr, Ordering};
    use std::sync::Arc;

    static TARGET: AtomicPtr<AtomicBool> = AtomicPtr::new(ptr::null_mut());

    extern "C" fn on_quit(_signal: libc::c_int) {
        let flag = TARGET.load(Ordering::SeqCst);
        // SAFETY: the pointer comes from a leaked Arc and is never freed.
        if let Some(flag) = unsafe { flag.as_ref() } {
            flag.store(true, Ordering::SeqCst);
        }
    }

    /// Make SIGQUIT raise `flag`.
    ///
    /// The flag is leaked so the handler can always dereference it.
    pub(super) fn route(flag: &Arc<AtomicBool>) -> io::Result<()> {
        let leaked = Arc::into_raw(Arc::clone(flag)).cast_mut();
        TARGET.store(leaked, Ordering::SeqCst);

        // SAFETY: `action` is fully initialized before use and `on_quit` only
        // touches an atomic.
        unsafe {
            let mut action: libc::sigaction = std::mem::zeroed();
            action.sa_sigaction = on_quit as extern "C" fn(libc::c_int) as libc::sighandler_t;
            libc::sigemptyset(&mut action.sa_mask);
            if libc::sigaction(libc::SIGQUIT, &action, ptr::null_mut()) != 0 {
                return Err(io::Error::last_os_error());
            }
        }
        Ok(())
    }
}

#[cfg(not(unix))]
mod quit {
    use std::io;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    pub(super) fn route(_flag: &Arc<AtomicBool>) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Instant;

    use super::*;

    #[test]
    fn request_is_visible_to_clones() {
        let shutdown = Shutdown::new();
        let handle = shutdown.clone();
        assert!(!shutdown.requested());
        handle.request();
        assert!(shutdown.requested());
    }

    #[test]
    fn wait_times_out_without_request() {
        let shutdown = Shutdown::new();
        assert!(!shutdown.wait(Duration::from_millis(5)));
    }

    #[test]
    fn wait_returns_early_on_request() {
        let shutdown = Shutdown::new();
        let handle = shutdown.clone();
        let started = Instant::now();
        let requester = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            handle.request();
        });
        assert!(shutdown.wait(Duration::from_secs(30)));
        assert!(started.elapsed() < Duration::from_secs(10));
        requester.join().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn sigquit_raises_the_flag() {
        let shutdown = Shutdown::new();
        quit::route(&shutdown.flag).unwrap();
        assert!(!shutdown.requested());
        // SAFETY: SIGQUIT is handled by `quit::on_quit` now.
        assert_eq!(unsafe { libc::raise(libc::SIGQUIT) }, 0);
        assert!(shutdown.requested());
        assert!(shutdown.wait(Duration::from_secs(30)));
    }

    #[test]
    fn repeated_requests_do_not_block() {
        let shutdown = Shutdown::new();
        shutdown.request();
        shutdown.request();
        assert!(shutdown.wait(Duration::from_secs(30)));
        assert!(shutdown.wait(Duration::from_secs(30)));
    }
}
