use std::{borrow::Borrow, fmt};

use once_cell::sync::Lazy;
use regex::Regex;

static BARE_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier pattern")
});

/// Words of the query language that can't be used as bare column names.
pub const RESERVED_WORDS: [&str; 6] = ["SELECT", "FROM", "AS", "TRUE", "FALSE", "NULL"];

/// Name of a column inside a [`Row`](crate::database::Row).
///
/// Any string is a legal column name, the empty string included. The stored
/// value never carries quote characters: quoting only happens when the name is
/// rendered through [`ColumnName::render`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ColumnName(String);

impl ColumnName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the name can't be written bare in query text.
    pub fn needs_quoting(&self) -> bool {
        if !BARE_IDENTIFIER.is_match(&self.0) {
            return true;
        }

        RESERVED_WORDS.iter().any(|word| word.eq_ignore_ascii_case(&self.0))
    }

    /// Display form used for header labels and SQL text.
    ///
    /// Ordinary identifiers come back unchanged. Ambiguous ones (empty,
    /// reserved, or containing characters outside `[A-Za-z0-9_]`) are wrapped
    /// in double quotes with embedded quotes doubled, so the empty name renders
    /// as `""`.
    pub fn render(&self) -> String {
        if !self.needs_quoting() {
            return self.0.clone();
        }

        format!("\"{}\"", self.0.replace('"', "\"\""))
    }
}

impl From<&str> for ColumnName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ColumnName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ColumnName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ColumnName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColumnName({:?})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ColumnName;

    #[test]
    fn test_render_plain_identifier() {
        assert_eq!(ColumnName::from("pwet").render(), "pwet");
        assert_eq!(ColumnName::from("column_01").render(), "column_01");
        assert_eq!(ColumnName::from("_hidden").render(), "_hidden");
    }

    #[test]
    fn test_render_empty_name() {
        let name = ColumnName::from("");

        assert!(name.needs_quoting());
        assert_eq!(name.render(), "\"\"");
    }

    #[test]
    fn test_render_names_needing_quotes() {
        assert_eq!(ColumnName::from("my col").render(), "\"my col\"");
        assert_eq!(ColumnName::from("a.b").render(), "\"a.b\"");
        assert_eq!(ColumnName::from("9lives").render(), "\"9lives\"");
        assert_eq!(ColumnName::from("x*y").render(), "\"x*y\"");
    }

    #[test]
    fn test_render_reserved_words() {
        assert_eq!(ColumnName::from("from").render(), "\"from\"");
        assert_eq!(ColumnName::from("Select").render(), "\"Select\"");
        assert_eq!(ColumnName::from("null").render(), "\"null\"");
        assert_eq!(ColumnName::from("fromage").render(), "fromage");
    }

    #[test]
    fn test_render_doubles_embedded_quotes() {
        assert_eq!(ColumnName::from("say \"hi\"").render(), "\"say \"\"hi\"\"\"");
        assert_eq!(ColumnName::from("\"").render(), "\"\"\"\"");
    }

    #[test]
    fn test_storage_never_carries_quotes() {
        let name = ColumnName::from("");
        assert_eq!(name.as_str(), "");
        assert!(name.is_empty());
    }
}
