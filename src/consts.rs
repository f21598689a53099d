/// Lowest value of the seconds field
pub const MIN_SECOND: u32 = 0;
/// Highest value of the seconds field
pub const MAX_SECOND: u32 = 59;

/// Lowest value of the minutes field
pub const MIN_MINUTE: u32 = 0;
/// Highest value of the minutes field
pub const MAX_MINUTE: u32 = 59;

/// Lowest value of the hours field
pub const MIN_HOUR: u32 = 0;
/// Highest value of the hours field
pub const MAX_HOUR: u32 = 23;

/// Lowest value of the day-of-month field
pub const MIN_DAY_OF_MONTH: u32 = 1;
/// Highest value of the day-of-month field
pub const MAX_DAY_OF_MONTH: u32 = 31;

/// Lowest value of the month field (January)
pub const MIN_MONTH: u32 = 1;
/// Highest value of the month field (December)
pub const MAX_MONTH: u32 = 12;

/// Lowest value of the day-of-week field (Sunday)
pub const MIN_WEEKDAY: u32 = 0;
/// Highest value of the day-of-week field (Saturday)
pub const MAX_WEEKDAY: u32 = 6;
/// Highest day-of-week value when `allow_seven_as_sunday` is enabled
/// (7 is a second spelling of Sunday)
pub const MAX_WEEKDAY_WITH_SEVEN: u32 = 7;

/// Lowest occurrence index in a `weekday#n` term (first such weekday)
pub const MIN_NTH_OCCURRENCE: u32 = 1;
/// Highest occurrence index in a `weekday#n` term (a month holds at most
/// five of any weekday)
pub const MAX_NTH_OCCURRENCE: u32 = 5;

/// Number of fields in a standard cron expression
pub const FIELD_COUNT: usize = 5;
/// Number of fields when the leading seconds field is present
pub const FIELD_COUNT_WITH_SECONDS: usize = 6;
