//! Logging for the snap and layout paths.
//!
//! With the `tracing` feature, `debug!` and `trace!` are the `tracing`
//! macros and [`init`] installs a stderr subscriber filtered by
//! `RUST_LOG` (`RUST_LOG=labelkit=debug` shows every snap decision and
//! grid fit, `trace` adds each reference in range). Without the feature
//! the macros expand to nothing and [`init`] does nothing, so a pointer
//! move costs no formatting.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

/// Install the stderr subscriber. Safe to call when one is already set.
#[cfg(feature = "tracing")]
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(feature = "tracing"))]
pub fn init() {}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};

#[cfg(test)]
mod tests {
    #[test]
    fn init_twice_is_harmless() {
        super::init();
        super::init();
    }
}
