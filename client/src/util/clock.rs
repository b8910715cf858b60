//! Wall-clock helpers.

/// Used when the browser reports a year outside `i32`.
#[cfg(feature = "hydrate")]
const FALLBACK_YEAR: i32 = 2025;

/// The current calendar year, from the browser clock when hydrated and the
/// system clock (UTC) otherwise.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(FALLBACK_YEAR)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
