//! Wall-clock access for intake timestamps and due-today metrics.
//!
//! TRADE-OFFS
//! ==========
//! The browser reports local time through `js_sys::Date`; the server uses
//! UTC. Around midnight the two can disagree on "today" for the first
//! render, which only affects the due-today tile until hydration.

use time::PrimitiveDateTime;

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current local time, truncated to whole seconds.
pub fn now() -> PrimitiveDateTime {
    #[cfg(feature = "hydrate")]
    {
        let d = js_sys::Date::new_0();
        from_parts(d.get_full_year(), d.get_month() + 1, d.get_date(), d.get_hours(), d.get_minutes(), d.get_seconds())
            .unwrap_or(time::macros::datetime!(1970-01-01 0:00))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let now = time::OffsetDateTime::now_utc();
        PrimitiveDateTime::new(now.date(), now.time())
    }
}

/// Current local date.
pub fn today() -> time::Date {
    now().date()
}

/// Build a timestamp from calendar parts; `month` is 1-based.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn from_parts(year: u32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<PrimitiveDateTime> {
    let month = time::Month::try_from(u8::try_from(month).ok()?).ok()?;
    let date = time::Date::from_calendar_date(i32::try_from(year).ok()?, month, u8::try_from(day).ok()?).ok()?;
    let time = time::Time::from_hms(u8::try_from(hour).ok()?, u8::try_from(minute).ok()?, u8::try_from(second).ok()?).ok()?;
    Some(PrimitiveDateTime::new(date, time))
}
