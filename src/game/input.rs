/// Reads a 1-based hand selection from raw user input.
///
/// Leading whitespace is skipped and the leading run of digits is parsed, so
/// `" 2"`, `"+3"` and `"4th"` all work. Anything else, including negative
/// numbers and values too large for `usize`, yields `0`, which is never a
/// valid selection.
///
/// # Example
///
/// ```
/// use basra::parse_selection;
///
/// assert_eq!(parse_selection("3\n"), 3);
/// assert_eq!(parse_selection("two"), 0);
/// assert_eq!(parse_selection("-1"), 0);
/// ```
#[must_use]
pub fn parse_selection(input: &str) -> usize {
    let text = input.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());

    text[..end].parse().unwrap_or(0)
}
