/// Prints internal diagnostics for a client.
///
/// With the `debug-logs` feature this goes to the `log` crate under the
/// `measurely` target regardless of options.  Otherwise it is written to
/// stderr, and only when `ClientOptions::debug` is set.
macro_rules! measurely_debug {
    ($options:expr, $($arg:tt)*) => {{
        #[cfg(feature = "debug-logs")]
        {
            let _ = &$options;
            ::log::debug!(target: "measurely", $($arg)*);
        }
        #[cfg(not(feature = "debug-logs"))]
        {
            if $options.debug {
                eprint!("[measurely] ");
                eprintln!($($arg)*);
            }
        }
    }};
}
