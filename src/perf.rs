//! Performance instrumentation utilities

/// Timing macro for report sections
/// Usage: let (value, elapsed) = timed!("operation name", { code });
///
/// Opens a `profiling` scope (a no-op unless a backend feature is enabled)
/// and logs the elapsed time at debug level.
#[macro_export]
macro_rules! timed {
    ($name:expr, $block:expr) => {{
        profiling::scope!($name);
        let _t = std::time::Instant::now();
        let r = $block;
        let elapsed = _t.elapsed();
        log::debug!("{}: {:?}", $name, elapsed);
        (r, elapsed)
    }};
}
