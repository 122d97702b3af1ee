//! Logging macros that forward to `log` when the `logging` feature is on and
//! expand to nothing otherwise.

macro_rules! debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        ::log::debug!($($arg)+);
    }};
}

macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        ::log::trace!($($arg)+);
    }};
}

pub(crate) use debug;
pub(crate) use trace;
