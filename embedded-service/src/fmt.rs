//! Logging macros
//!
//! Each level forwards to `__log!`, whose backend is picked by the `defmt` and `log` features of this crate.
//! Callers need the matching `defmt`/`log` dependency in scope, the same way they would calling those crates
//! directly.

// In no_std (embedded) targets, defmt and log are mutually exclusive to avoid double logging
#[cfg(all(feature = "log", feature = "defmt", target_os = "none", not(doc)))]
compile_error!("features `log` and `defmt` are mutually exclusive on no_std targets");

/// Host build with both features: emit to defmt and log
#[cfg(all(not(doc), feature = "defmt", feature = "log", not(target_os = "none")))]
#[doc(hidden)]
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! __log {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {{
        let _ = ($s $(, &$x )*);
        ::defmt::$level!($s $(, $x)*);
        ::log::$level!($s $(, $x)*);
    }};
}

#[cfg(all(not(doc), feature = "defmt", not(all(feature = "log", not(target_os = "none")))))]
#[doc(hidden)]
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! __log {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {{
        let _ = ($s $(, &$x )*);
        ::defmt::$level!($s $(, $x)*);
    }};
}

#[cfg(all(not(doc), feature = "log", not(feature = "defmt")))]
#[doc(hidden)]
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! __log {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {{
        ::log::$level!($s $(, $x)*);
    }};
}

// No backend, also used for `cargo doc`
#[cfg(any(doc, not(any(feature = "defmt", feature = "log"))))]
#[doc(hidden)]
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! __log {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {{
        let _ = ($s $(, &$x )*);
    }};
}

/// Logs a debug message using the underlying logger
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(debug, $s $(, $x)*)
    };
}

/// Logs an info message using the underlying logger
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(info, $s $(, $x)*)
    };
}

/// Logs a warning using the underlying logger
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(warn, $s $(, $x)*)
    };
}

/// Logs an error using the underlying logger
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! error {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(error, $s $(, $x)*)
    };
}
