//! Interrupt handling for foreground children.
//!
//! While a [`ForwardGuard`] is alive, launchpad survives SIGINT and SIGTERM
//! and records that one arrived. A terminal Ctrl+C already reaches the
//! child through the foreground process group, so SIGINT is only recorded.
//! SIGTERM is addressed to launchpad alone and is re-sent to the child.
//! Dropping the guard restores the previous handlers. Only one guard can
//! be alive at a time.

use std::sync::{Mutex, MutexGuard};

static ACTIVE: Mutex<()> = Mutex::new(());

#[cfg(unix)]
mod imp {
    use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

    pub(super) static CHILD_PID: AtomicI32 = AtomicI32::new(0);
    pub(super) static INTERRUPTED: AtomicBool = AtomicBool::new(false);

    extern "C" fn record(_signal: libc::c_int) {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }

    extern "C" fn forward(signal: libc::c_int) {
        let pid = CHILD_PID.load(Ordering::SeqCst);
        if pid > 0 {
            // SAFETY: kill(2) is async-signal-safe and takes no pointers
            unsafe {
                libc::kill(pid, signal);
            }
        }
        INTERRUPTED.store(true, Ordering::SeqCst);
    }

    pub(super) fn install(pid: u32) -> Vec<(libc::c_int, libc::sighandler_t)> {
        CHILD_PID.store(pid as i32, Ordering::SeqCst);
        INTERRUPTED.store(false, Ordering::SeqCst);

        let record = record as extern "C" fn(libc::c_int) as libc::sighandler_t;
        let forward = forward as extern "C" fn(libc::c_int) as libc::sighandler_t;
        [(libc::SIGINT, record), (libc::SIGTERM, forward)]
            .iter()
            // SAFETY: both handlers only touch atomics and call kill(2)
            .map(|&(sig, handler)| (sig, unsafe { libc::signal(sig, handler) }))
            .collect()
    }

    pub(super) fn restore(previous: &[(libc::c_int, libc::sighandler_t)]) {
        for &(sig, handler) in previous {
            // SAFETY: restores the handler that was installed before
            unsafe {
                libc::signal(sig, handler);
            }
        }
        CHILD_PID.store(0, Ordering::SeqCst);
    }

    pub(super) fn interrupted() -> bool {
        INTERRUPTED.load(Ordering::SeqCst)
    }
}

/// Keeps launchpad alive through interrupts while a child runs.
pub struct ForwardGuard {
    #[cfg(unix)]
    previous: Vec<(libc::c_int, libc::sighandler_t)>,
    _active: MutexGuard<'static, ()>,
}

impl ForwardGuard {
    /// Start handling interrupts on behalf of `pid`.
    ///
    /// On non-Unix platforms the console already delivers Ctrl+C to every
    /// process attached to it, so nothing is installed.
    pub fn install(pid: u32) -> Self {
        let active = ACTIVE.lock().unwrap_or_else(|e| e.into_inner());

        #[cfg(unix)]
        {
            let previous = imp::install(pid);
            tracing::debug!("Handling interrupts for pid {}", pid);
            Self {
                previous,
                _active: active,
            }
        }

        #[cfg(not(unix))]
        {
            let _ = pid;
            Self { _active: active }
        }
    }

    /// Whether SIGINT or SIGTERM arrived since the guard was installed.
    pub fn interrupted(&self) -> bool {
        #[cfg(unix)]
        {
            imp::interrupted()
        }

        #[cfg(not(unix))]
        {
            false
        }
    }
}

impl Drop for ForwardGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        imp::restore(&self.previous);
    }
}
