//! Wall-clock access, injectable for tests.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Returns milliseconds since the Unix epoch.
pub type Clock = fn() -> f64;

/// Current time from `Date.now()` in the browser, the system clock elsewhere.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}
