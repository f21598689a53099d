mod alias;
mod consts;
mod field;
mod grammar;
mod options;
mod prelude;
#[cfg(test)]
mod test_utils;
mod token;

pub use consts::*;
pub use field::Field;
pub use options::Options;

use token::is_blank_day;

/// Validates a cron expression against the given options.
///
/// The verdict is a plain boolean: an expression either passes or
/// fails, nothing panics and nothing reports why. Fields are separated
/// by any amount of whitespace, and leading or trailing whitespace is
/// ignored. With [`Options::seconds`] enabled both five- and six-field
/// expressions are accepted, otherwise exactly five fields.
///
/// # Examples
///
/// ```
/// use cron_check::{is_valid_cron, Options};
///
/// let options = Options::default();
///
/// assert!(is_valid_cron("* * * * *", &options));
/// assert!(is_valid_cron("59 23 * * 6", &options));
/// assert!(!is_valid_cron("60 * * * *", &options));
///
/// let with_seconds = Options {
///     seconds: true,
///     ..Options::default()
/// };
///
/// assert!(is_valid_cron("0 59 23 * * 6", &with_seconds));
/// ```
pub fn is_valid_cron(expression: &str, options: &Options) -> bool {
    let fields: Vec<&str> = expression.split_whitespace().collect();

    let max_fields = if options.seconds {
        FIELD_COUNT_WITH_SECONDS
    } else {
        FIELD_COUNT
    };
    if fields.len() < FIELD_COUNT || fields.len() > max_fields {
        return false;
    }

    let (seconds, rest) = match fields.as_slice() {
        [seconds, rest @ ..] if fields.len() == FIELD_COUNT_WITH_SECONDS => (Some(*seconds), rest),
        rest => (None, rest),
    };

    let [minutes, hours, days, months, weekdays] = rest else {
        return false;
    };

    let checks = [
        seconds.is_none_or(|field| Field::Seconds.validate(field, options)),
        Field::Minutes.validate(minutes, options),
        Field::Hours.validate(hours, options),
        Field::DayOfMonth.validate(days, options),
        Field::Month.validate(months, options),
        Field::DayOfWeek.validate(weekdays, options),
        has_compatible_day_fields(days, weekdays, options),
    ];

    checks.into_iter().all(|check| check)
}

/// At most one of the two day fields may be blank.
fn has_compatible_day_fields(days: &str, weekdays: &str, options: &Options) -> bool {
    !(options.allow_blank_day && is_blank_day(days) && is_blank_day(weekdays))
}
