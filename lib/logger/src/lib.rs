//! Hierarchical console logger.
//!
//! Every logger carries a dotted path (`AutoSearch.KeyDown`) which prefixes each message. On
//! `wasm32` messages go to the browser console, elsewhere to the standard output, so code using
//! the logger can be unit-tested natively.

#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

pub mod disabled;
pub mod enabled;



// ===========
// === Str ===
// ===========

/// Anything that can be used as a logger path or a log message.
pub trait Str : Into<String> + AsRef<str> {}
impl<T:Into<String>+AsRef<str>> Str for T {}



// ==============
// === LogMsg ===
// ==============

/// A log message. Closures are accepted so that the message is formatted only when the logger
/// actually emits it.
pub trait LogMsg {
    /// Run `f` with the message text.
    fn with_log_msg<F:FnOnce(&str) -> T, T>(&self, f:F) -> T;
}

impl LogMsg for &str {
    fn with_log_msg<F:FnOnce(&str) -> T, T>(&self, f:F) -> T {
        f(self)
    }
}

impl<F:Fn() -> S, S:Str> LogMsg for F {
    fn with_log_msg<G:FnOnce(&str) -> T, T>(&self, f:G) -> T {
        f(self().as_ref())
    }
}



// ==============
// === Logger ===
// ==============

/// Interface shared by all logger implementations.
pub trait LoggerApi {
    /// Creates a new logger. Path should be a unique identifier of this logger.
    fn new<T:Str>(path:T) -> Self;
    /// Creates a new logger with this logger as a parent.
    fn sub<T:Str>(&self, path:T) -> Self;
    /// Evaluates function `f` and visually groups all logs will occur during its execution.
    fn group<M:LogMsg,T,F:FnOnce() -> T>(&self, msg:M, f:F) -> T;
    /// Log with level:debug
    fn debug<M:LogMsg>(&self, msg:M);
    /// Log with level:info.
    fn info<M:LogMsg>(&self, msg:M);
    /// Log with level:warning.
    fn warning<M:LogMsg>(&self, msg:M);
}

/// Logger used by default across the workspace. The `silent` feature swaps it for the one
/// discarding all messages.
#[cfg(not(feature = "silent"))]
pub type DefaultLogger = enabled::Logger;

/// Logger used by default across the workspace. The `silent` feature swaps it for the one
/// discarding all messages.
#[cfg(feature = "silent")]
pub type DefaultLogger = disabled::Logger;



// ==============
// === Macros ===
// ==============

#[doc(hidden)]
#[macro_export]
macro_rules! log_template {
    ($method:ident $logger:expr, $($arg:tt)*) => {{
        $logger.$method(|| format!($($arg)*));
    }};
}

/// Log with level:debug.
#[macro_export]
macro_rules! debug {
    ($($toks:tt)*) => {
        $crate::log_template! {debug $($toks)*}
    };
}

/// Log with level:info.
#[macro_export]
macro_rules! info {
    ($($toks:tt)*) => {
        $crate::log_template! {info $($toks)*}
    };
}

/// Log with level:warning.
#[macro_export]
macro_rules! warning {
    ($($toks:tt)*) => {
        $crate::log_template! {warning $($toks)*}
    };
}
