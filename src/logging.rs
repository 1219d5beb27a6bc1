//! Internal logging shims.
//!
//! Forward to the `log` facade when the `log` feature is enabled. Otherwise the
//! arguments are type checked inside a dead branch and no formatting code is
//! emitted.

#[cfg(feature = "log")]
macro_rules! smooth_debug {
    ($($arg:tt)*) => {
        ::log::debug!(target: "sensor_smooth", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! smooth_debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

#[cfg(feature = "log")]
macro_rules! smooth_trace {
    ($($arg:tt)*) => {
        ::log::trace!(target: "sensor_smooth", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! smooth_trace {
    ($($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

pub(crate) use smooth_debug;
pub(crate) use smooth_trace;
