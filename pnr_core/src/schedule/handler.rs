use chrono::{Local, NaiveTime};

const QUIET_START: (u32, u32) = (23, 0);
const QUIET_END: (u32, u32) = (6, 0);

/// Whether checks are suppressed at the given local wall-clock time.
///
/// The window is fixed at 23:00 through 06:00, both boundaries inclusive.
pub fn is_quiet_hours(now: NaiveTime) -> bool {
    let start = NaiveTime::from_hms_opt(QUIET_START.0, QUIET_START.1, 0).unwrap();
    let end = NaiveTime::from_hms_opt(QUIET_END.0, QUIET_END.1, 0).unwrap();
    now >= start || now <= end
}

/// Gate against the execution host's local clock.
pub fn quiet_hours_now() -> bool {
    is_quiet_hours(Local::now().time())
}
