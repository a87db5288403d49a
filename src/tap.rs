//! Passthrough taps: observe a value on its way through a pipeline.
//!
//! Every tap returns its argument unchanged; the side effect is a `tracing`
//! event at the level matching the tap's name. Without a subscriber
//! installed the taps cost nothing; installing one is the caller's (or the
//! test harness's) job.

use std::fmt;
use std::time::Instant;

/// Emit `value` at INFO level and return it unchanged.
pub fn log<T: fmt::Debug>(value: T) -> T {
    tracing::info!("{:?}", value);
    value
}

/// Emit `label` and `value` at TRACE level and return the value.
pub fn trace<T: fmt::Debug>(label: &str, value: T) -> T {
    tracing::trace!("{}: {:?}", label, value);
    value
}

/// DEBUG-level tap marking a spot for interactive inspection.
///
/// There is no portable trap-if-debugger-attached instruction, so the
/// suspension is not performed; the call site survives as a DEBUG event to
/// break on when a debugger is attached.
pub fn debug<T: fmt::Debug>(value: T) -> T {
    tracing::debug!("{:?}", value);
    value
}

pub use self::debug as breakpoint;

/// Write a single blank line to stdout.
pub fn print_newline() {
    println!();
}

/// Run `f` once, logging wall-clock elapsed time under `label`.
///
/// Returns `f`'s result. The measurement wraps the synchronous call only;
/// the elapsed duration is emitted at DEBUG level.
pub fn timer<R>(label: &str, f: impl FnOnce() -> R) -> R {
    let start = Instant::now();
    let result = f();
    tracing::debug!("{}: {:?}", label, start.elapsed());
    result
}

/// Pipeline form of [`trace`]: `iter.map(traced("step"))`.
pub fn traced<T: fmt::Debug>(label: impl Into<String>) -> impl Fn(T) -> T {
    let label = label.into();
    move |value| trace(&label, value)
}
