//! Logging macros that only fire the first time a call site is reached.
//!
//! Rendering visits every triangle of every frame; a warning about a bad
//! input would otherwise flood the log.

#[macro_export]
macro_rules! log_once {
    (target: $target:expr, $lvl:expr, $($arg:tt)+) => {{
        static ONCE: std::sync::Once = std::sync::Once::new();
        ONCE.call_once(|| log::log!(target: $target, $lvl, $($arg)+));
    }};
    ($lvl:expr, $($arg:tt)+) => {
        $crate::log_once!(target: module_path!(), $lvl, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn_once {
    ($($arg:tt)+) => {
        $crate::log_once!(log::Level::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug_once {
    ($($arg:tt)+) => {
        $crate::log_once!(log::Level::Debug, $($arg)+)
    };
}

pub use crate::{debug_once, log_once, warn_once};
