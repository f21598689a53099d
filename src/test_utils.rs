//! Shared constructors for the option sets tests reach for most.

use crate::Options;

pub(crate) fn with_seconds() -> Options {
    Options {
        seconds: true,
        ..Options::default()
    }
}

pub(crate) fn with_alias() -> Options {
    Options {
        alias: true,
        ..Options::default()
    }
}

pub(crate) fn with_blank_day() -> Options {
    Options {
        allow_blank_day: true,
        ..Options::default()
    }
}

pub(crate) fn with_seven_as_sunday() -> Options {
    Options {
        allow_seven_as_sunday: true,
        ..Options::default()
    }
}

pub(crate) fn with_nth_weekday_of_month() -> Options {
    Options {
        allow_nth_weekday_of_month: true,
        ..Options::default()
    }
}
