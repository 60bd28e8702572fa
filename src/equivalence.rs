use std::collections::BTreeMap;

/// Category spellings accepted in place of the golden spelling.
///
/// Maps an expected (long form) category to the single actual (short form)
/// category that also counts as correct. The mapping is one-way: a lexer that
/// emits the long form where the golden file says the short form is wrong.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquivalenceTable {
    synonyms: BTreeMap<String, String>,
}

impl EquivalenceTable {
    /// `IDENTIFIER` accepts `ID`, `INTEGER` accepts `INT`, `HEXADECIMAL` accepts `HEX`.
    ///
    /// `DELIMITER` does not accept `SEPARATOR`.
    pub fn standard() -> Self {
        [
            ("IDENTIFIER", "ID"),
            ("INTEGER", "INT"),
            ("HEXADECIMAL", "HEX"),
        ]
        .into_iter()
        .collect()
    }

    /// Exact, case-sensitive comparisons only.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn synonym(&self, expected: &str) -> Option<&str> {
        self.synonyms.get(expected).map(String::as_str)
    }

    pub fn matches(&self, actual: Option<&str>, expected: Option<&str>) -> bool {
        match (actual, expected) {
            (Some(actual), Some(expected)) => {
                actual == expected || self.synonym(expected) == Some(actual)
            }
            _ => false,
        }
    }
}

impl<E: Into<String>, A: Into<String>> FromIterator<(E, A)> for EquivalenceTable {
    fn from_iter<I: IntoIterator<Item = (E, A)>>(iter: I) -> Self {
        EquivalenceTable {
            synonyms: iter
                .into_iter()
                .map(|(expected, actual)| (expected.into(), actual.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ID", "IDENTIFIER", true)]
    #[case("INT", "INTEGER", true)]
    #[case("HEX", "HEXADECIMAL", true)]
    #[case("IDENTIFIER", "IDENTIFIER", true)]
    #[case("KEYWORD", "KEYWORD", true)]
    #[case("IDENTIFIER", "ID", false)]
    #[case("INTEGER", "INT", false)]
    #[case("HEXADECIMAL", "HEX", false)]
    #[case("SEPARATOR", "DELIMITER", false)]
    #[case("DELIMITER", "SEPARATOR", false)]
    #[case("id", "IDENTIFIER", false)]
    #[case("integer", "INTEGER", false)]
    #[case("INT", "HEXADECIMAL", false)]
    #[case("ID", "INTEGER", false)]
    fn standard_table(#[case] actual: &str, #[case] expected: &str, #[case] matches: bool) {
        let table = EquivalenceTable::standard();
        assert_eq!(table.matches(Some(actual), Some(expected)), matches);
    }

    #[test]
    fn absent_categories_never_match() {
        let table = EquivalenceTable::standard();
        assert!(!table.matches(None, Some("IDENTIFIER")));
        assert!(!table.matches(Some("ID"), None));
        assert!(!table.matches(None, None));
    }

    #[test]
    fn empty_table_is_exact() {
        let table = EquivalenceTable::empty();
        assert!(table.matches(Some("INTEGER"), Some("INTEGER")));
        assert!(!table.matches(Some("INT"), Some("INTEGER")));
    }

    #[test]
    fn custom_table() {
        let table = [("DELIMITER", "SEPARATOR")].into_iter().collect::<EquivalenceTable>();
        assert!(table.matches(Some("SEPARATOR"), Some("DELIMITER")));
        assert!(!table.matches(Some("ID"), Some("IDENTIFIER")));
        assert_eq!(table.synonym("DELIMITER"), Some("SEPARATOR"));
    }
}
