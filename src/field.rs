use crate::alias::{self, MONTH_ALIASES, WEEKDAY_ALIASES};
use crate::consts::{
    MAX_DAY_OF_MONTH, MAX_HOUR, MAX_MINUTE, MAX_MONTH, MAX_NTH_OCCURRENCE, MAX_SECOND,
    MAX_WEEKDAY, MAX_WEEKDAY_WITH_SEVEN, MIN_DAY_OF_MONTH, MIN_HOUR, MIN_MINUTE, MIN_MONTH,
    MIN_NTH_OCCURRENCE, MIN_SECOND, MIN_WEEKDAY,
};
use crate::grammar;
use crate::options::Options;
use crate::prelude::*;
use crate::token::{is_blank_day, is_in_range};

/// One position in a cron expression.
/// Each field knows its bounds and which pieces of extra syntax it
/// accepts beyond the shared grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Field {
    /// Optional leading field, enabled by [`Options::seconds`]
    #[display(fmt = "seconds")]
    Seconds,
    #[display(fmt = "minutes")]
    Minutes,
    #[display(fmt = "hours")]
    Hours,
    #[display(fmt = "day-of-month")]
    DayOfMonth,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day-of-week")]
    DayOfWeek,
}

impl Field {
    /// Lowest value the field accepts
    #[inline]
    pub const fn min(self) -> u32 {
        match self {
            Self::Seconds => MIN_SECOND,
            Self::Minutes => MIN_MINUTE,
            Self::Hours => MIN_HOUR,
            Self::DayOfMonth => MIN_DAY_OF_MONTH,
            Self::Month => MIN_MONTH,
            Self::DayOfWeek => MIN_WEEKDAY,
        }
    }

    /// Highest value the field accepts under the given options
    #[inline]
    pub const fn max(self, options: &Options) -> u32 {
        match self {
            Self::Seconds => MAX_SECOND,
            Self::Minutes => MAX_MINUTE,
            Self::Hours => MAX_HOUR,
            Self::DayOfMonth => MAX_DAY_OF_MONTH,
            Self::Month => MAX_MONTH,
            Self::DayOfWeek => {
                if options.allow_seven_as_sunday {
                    MAX_WEEKDAY_WITH_SEVEN
                } else {
                    MAX_WEEKDAY
                }
            }
        }
    }

    /// Validates the raw text of this field under the given options.
    pub fn validate(self, field: &str, options: &Options) -> bool {
        match self {
            Self::DayOfMonth | Self::DayOfWeek if is_blank_day(field) => options.allow_blank_day,
            Self::Seconds | Self::Minutes | Self::Hours | Self::DayOfMonth => {
                grammar::is_valid_field(field, self.min(), self.max(options))
            }
            Self::Month => self.validate_months(field, options),
            Self::DayOfWeek => self.validate_weekdays(field, options),
        }
    }

    fn validate_months(self, field: &str, options: &Options) -> bool {
        if has_alias_step(field) {
            return false;
        }

        if options.alias {
            let resolved = alias::resolve(field, &MONTH_ALIASES);
            return grammar::is_valid_field(&resolved, self.min(), self.max(options));
        }

        grammar::is_valid_field(field, self.min(), self.max(options))
    }

    fn validate_weekdays(self, field: &str, options: &Options) -> bool {
        if has_alias_step(field) {
            return false;
        }

        if options.alias {
            let resolved = alias::resolve(field, &WEEKDAY_ALIASES);
            return self.validate_weekday_terms(&resolved, options);
        }

        self.validate_weekday_terms(field, options)
    }

    /// Validates a day-of-week field after any alias resolution.
    ///
    /// A `weekday#occurrence` pair bypasses the shared grammar: the
    /// left side must be a bare weekday number and the right side an
    /// occurrence index, so ranges and steps cannot carry `#`.
    fn validate_weekday_terms(self, field: &str, options: &Options) -> bool {
        if options.allow_nth_weekday_of_month && field.contains('#') {
            let parts: Vec<&str> = field.split('#').collect();

            return match parts.as_slice() {
                [weekday, occurrence] => {
                    is_in_range(weekday, self.min(), self.max(options))
                        && is_in_range(occurrence, MIN_NTH_OCCURRENCE, MAX_NTH_OCCURRENCE)
                }
                _ => false,
            };
        }

        grammar::is_valid_field(field, self.min(), self.max(options))
    }
}

/// Whether a field puts a letter right after a slash, as in `*/jan`.
/// Step values must stay numeric even when aliases are enabled, so
/// this runs on the raw field before any resolution.
fn has_alias_step(field: &str) -> bool {
    field
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0] == b'/' && pair[1].is_ascii_alphabetic())
}
