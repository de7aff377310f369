//! Current year for the copyright line.
//!
//! Read fresh on every render, never cached.

use time::OffsetDateTime;

/// Calendar year from the system clock.
///
/// Uses the local offset when the platform can report it (in the browser this
/// goes through `js_sys::Date`), UTC otherwise.
pub fn current_year() -> i32 {
    match OffsetDateTime::now_local() {
        Ok(now) => now.year(),
        Err(e) => {
            tracing::debug!("local offset unavailable ({}), using UTC", e);
            OffsetDateTime::now_utc().year()
        }
    }
}
