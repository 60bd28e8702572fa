//! Golden reference files.
//!
//! A golden file is a two-column CSV: the expected token category, then the
//! expected literal. An optional `TOKEN,ITEM` header may open the file.

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;
use crate::error::Result;

/// One expected token, in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoldenRow {
    category: String,
    literal: String,
}

impl GoldenRow {
    pub fn new<C: Into<String>, L: Into<String>>(category: C, literal: L) -> Self {
        GoldenRow {
            category: category.into(),
            literal: literal.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }
}

/// Load the golden rows stored at `path`.
///
/// The file is closed before this returns, whether or not reading succeeded.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<GoldenRow>> {
    let path = path.as_ref();
    let error = |source| Error::Golden {
        path: path.to_path_buf(),
        source,
    };

    let rows = File::open(path)
        .map(BufReader::new)
        .and_then(parse)
        .map_err(error)?;

    tracing::info!(path = %path.display(), rows = rows.len(), "loaded golden file");
    Ok(rows)
}

/// Parse golden rows from any line-oriented reader.
pub fn parse<R: BufRead>(reader: R) -> io::Result<Vec<GoldenRow>> {
    let mut rows = Vec::new();
    let mut header_checked = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if !header_checked {
            header_checked = true;
            if is_header(line) {
                tracing::debug!(line, "skipping header");
                continue;
            }
        }

        match split_row(line) {
            ("", literal) => tracing::debug!(literal, "dropping row without a category"),
            (category, literal) => rows.push(GoldenRow::new(category, literal)),
        }
    }

    Ok(rows)
}

fn is_header(line: &str) -> bool {
    let line = line.to_ascii_uppercase();
    line == "TOKEN,ITEM" || line.starts_with("TOKEN,")
}

/// Split a `CATEGORY,LITERAL` line on its first comma, trimming both halves.
///
/// Commas after the first belong to the literal.
pub(crate) fn split_row(line: &str) -> (&str, &str) {
    match line.split_once(',') {
        Some((category, literal)) => (category.trim(), literal.trim()),
        None => (line.trim(), ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str) -> Vec<GoldenRow> {
        parse(text.as_bytes()).unwrap()
    }

    #[test]
    fn header_is_skipped() {
        assert_eq!(
            rows("TOKEN,ITEM\nINTEGER,42\nIDENTIFIER,x\n"),
            vec![GoldenRow::new("INTEGER", "42"), GoldenRow::new("IDENTIFIER", "x")],
        );
    }

    #[test]
    fn header_is_case_insensitive() {
        assert_eq!(rows("token,item\nINT,1"), vec![GoldenRow::new("INT", "1")]);
        assert_eq!(rows("Token,Lexeme\nINT,1"), vec![GoldenRow::new("INT", "1")]);
    }

    #[test]
    fn headerless_file() {
        assert_eq!(rows("INTEGER,42"), vec![GoldenRow::new("INTEGER", "42")]);
    }

    #[test]
    fn header_only_checked_on_first_non_empty_line() {
        assert_eq!(
            rows("\n\n   \nINTEGER,1\nTOKEN,x\n"),
            vec![GoldenRow::new("INTEGER", "1"), GoldenRow::new("TOKEN", "x")],
        );
    }

    #[test]
    fn header_after_blank_lines_is_still_a_header() {
        assert_eq!(rows("\n  \nTOKEN,ITEM\nINT,1"), vec![GoldenRow::new("INT", "1")]);
    }

    #[test]
    fn literal_keeps_embedded_commas() {
        assert_eq!(
            rows("STRING,\"a,b\""),
            vec![GoldenRow::new("STRING", "\"a,b\"")],
        );
    }

    #[test]
    fn missing_literal_is_empty() {
        assert_eq!(rows("EOF"), vec![GoldenRow::new("EOF", "")]);
        assert_eq!(rows("EOF,"), vec![GoldenRow::new("EOF", "")]);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(
            rows("  OPERATOR  ,  +  \r\n"),
            vec![GoldenRow::new("OPERATOR", "+")],
        );
    }

    #[test]
    fn empty_category_is_dropped() {
        assert_eq!(
            rows("TOKEN,ITEM\n,orphan\n  ,x\nINT,1"),
            vec![GoldenRow::new("INT", "1")],
        );
    }

    #[test]
    fn empty_category_on_first_line_consumes_header_check() {
        assert_eq!(rows(",x\nTOKEN,ITEM"), vec![GoldenRow::new("TOKEN", "ITEM")]);
    }

    #[test]
    fn split_only_on_first_comma() {
        assert_eq!(split_row("A,b,c"), ("A", "b,c"));
        assert_eq!(split_row("A"), ("A", ""));
        assert_eq!(split_row(",b"), ("", "b"));
    }
}
