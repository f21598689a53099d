/// Month names and the field values they stand for
pub(crate) const MONTH_ALIASES: [(&str, &str); 12] = [
    ("jan", "1"),
    ("feb", "2"),
    ("mar", "3"),
    ("apr", "4"),
    ("may", "5"),
    ("jun", "6"),
    ("jul", "7"),
    ("aug", "8"),
    ("sep", "9"),
    ("oct", "10"),
    ("nov", "11"),
    ("dec", "12"),
];

/// Weekday names and the field values they stand for
pub(crate) const WEEKDAY_ALIASES: [(&str, &str); 7] = [
    ("sun", "0"),
    ("mon", "1"),
    ("tue", "2"),
    ("wed", "3"),
    ("thu", "4"),
    ("fri", "5"),
    ("sat", "6"),
];

/// Aliases are exactly three letters long
const ALIAS_LEN: usize = 3;

/// Replaces every known three-letter alias in a field with its value.
///
/// Matching is case-insensitive and scans left to right without
/// backtracking: each window of three letters is consumed whether or
/// not it names an alias, so `sunday` becomes `0day` while `nosun`
/// stays `nosun`. Unknown letters and all other characters pass
/// through untouched, left for the grammar to reject.
pub(crate) fn resolve(field: &str, table: &[(&str, &str)]) -> String {
    let lowered = field.to_ascii_lowercase();
    let mut resolved = String::with_capacity(lowered.len());
    let mut rest = lowered.as_str();

    while !rest.is_empty() {
        if rest.len() >= ALIAS_LEN
            && rest.as_bytes()[..ALIAS_LEN]
                .iter()
                .all(u8::is_ascii_alphabetic)
        {
            let (window, tail) = rest.split_at(ALIAS_LEN);

            match table.iter().find(|&&(name, _)| name == window) {
                Some(&(_, value)) => resolved.push_str(value),
                None => resolved.push_str(window),
            }

            rest = tail;
        } else {
            let mut characters = rest.chars();

            if let Some(character) = characters.next() {
                resolved.push(character);
            }

            rest = characters.as_str();
        }
    }

    resolved
}
