//! Fixed-width table helpers shared by both documents

use std::borrow::Cow;

/// Width of the `=` rules framing report sections.
pub const RULE_WIDTH: usize = 100;

/// Marker appended to truncated cells.
pub const ELLIPSIS: &str = "...";

/// Id cells longer than this are truncated.
pub const ID_LIMIT: usize = 50;
/// Characters of the id kept before the ellipsis.
pub const ID_KEEP: usize = 47;
/// Name cells longer than this are truncated.
pub const NAME_LIMIT: usize = 35;
/// Characters of the name kept before the ellipsis.
pub const NAME_KEEP: usize = 32;

/// A full-width `=` rule.
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Shorten `text` to `keep` characters plus [`ELLIPSIS`] when it is longer
/// than `limit` characters.
///
/// Lengths count `char`s, not bytes.
pub fn truncate_cell(text: &str, limit: usize, keep: usize) -> Cow<'_, str> {
    if text.chars().count() <= limit {
        return Cow::Borrowed(text);
    }

    let mut short: String = text.chars().take(keep).collect();
    short.push_str(ELLIPSIS);
    Cow::Owned(short)
}

/// One table line: sequence, id, name, publisher, version, status.
pub(crate) fn table_line(
    seq: &str,
    id: &str,
    name: &str,
    publisher: &str,
    version: &str,
    status: &str,
) -> String {
    format!("{seq:<6} {id:<50} {name:<35} {publisher:<20} {version:<15} {status:<10}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_borrowed() {
        let cell = truncate_cell("short", ID_LIMIT, ID_KEEP);
        assert!(matches!(cell, Cow::Borrowed("short")));
    }

    #[test]
    fn test_exact_limit_is_untouched() {
        let id = "a".repeat(ID_LIMIT);
        assert_eq!(truncate_cell(&id, ID_LIMIT, ID_KEEP), id);
    }

    #[test]
    fn test_one_over_limit_is_cut() {
        let id = "a".repeat(ID_LIMIT + 1);
        let cell = truncate_cell(&id, ID_LIMIT, ID_KEEP);
        assert_eq!(cell, format!("{}...", "a".repeat(ID_KEEP)));
        assert_eq!(cell.chars().count(), ID_LIMIT);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let name = "확".repeat(NAME_LIMIT);
        assert_eq!(truncate_cell(&name, NAME_LIMIT, NAME_KEEP), name);

        let longer = "확".repeat(NAME_LIMIT + 3);
        let cell = truncate_cell(&longer, NAME_LIMIT, NAME_KEEP);
        assert_eq!(cell.chars().count(), NAME_KEEP + ELLIPSIS.len());
    }

    #[test]
    fn test_table_line_pads_columns() {
        let line = table_line("1", "id", "name", "pub", "1.0", "Enabled");
        assert_eq!(line.len(), 6 + 1 + 50 + 1 + 35 + 1 + 20 + 1 + 15 + 1 + 10 + 1);
        assert!(line.starts_with("1      id "));
        assert!(line.ends_with("Enabled   \n"));
    }
}
