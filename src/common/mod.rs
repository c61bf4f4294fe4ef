//! Helpers that are needed in multiple places

use std::sync::mpsc;
use std::time::Duration;

pub mod interface;

/// Print a labeled debug value to stderr, with the labels aligned.
pub fn veprintln(key: &str, format_args: std::fmt::Arguments) {
    eprintln!("? {key:<12}: {format_args}");
}

/// Run `f` on its own thread and give up waiting for it after `timeout`.
///
/// Returns [None] if `f` did not finish in time or panicked. The thread is not killed, it is
/// detached.
pub fn run_with_timeout<T, F>(timeout: Duration, f: F) -> Option<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        // the receiver may be gone already
        let _ = tx.send(f());
    });
    rx.recv_timeout(timeout).ok()
}
