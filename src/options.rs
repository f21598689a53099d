use serde::{Deserialize, Serialize};

/// Dialect switches for cron validation.
///
/// Every switch defaults to `false`, which matches the strict
/// five-field dialect. The serde representation uses camelCase keys
/// and fills missing keys with their defaults, so a partial document
/// such as `{"seconds": true}` deserializes cleanly.
///
/// # Examples
///
/// ```
/// use cron_check::Options;
///
/// let options: Options = serde_json::from_str(r#"{"seconds": true}"#)?;
///
/// assert!(options.seconds);
/// assert!(!options.alias);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Accept an optional leading seconds field
    pub seconds: bool,
    /// Accept three-letter names in the month and day-of-week fields
    pub alias: bool,
    /// Accept `?` in either day field as "any value"
    pub allow_blank_day: bool,
    /// Accept `7` as a second spelling of Sunday in the day-of-week field
    pub allow_seven_as_sunday: bool,
    /// Accept `weekday#n` terms in the day-of-week field
    pub allow_nth_weekday_of_month: bool,
}
