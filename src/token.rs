//! Tokens produced by the lexer under test.

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;
use crate::error::Result;
use crate::golden::split_row;

/// Anything the grader can compare against a golden row.
///
/// A lexer that runs in-process only has to expose a category label and the
/// literal text it matched.
pub trait Lexeme {
    /// The category label, or `None` if the lexer did not assign one.
    fn category(&self) -> Option<&str>;

    fn literal(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActualToken {
    category: Option<String>,
    literal: String,
}

impl ActualToken {
    pub fn new<C: Into<String>, L: Into<String>>(category: C, literal: L) -> Self {
        ActualToken {
            category: Some(category.into()),
            literal: literal.into(),
        }
    }

    pub fn uncategorized<L: Into<String>>(literal: L) -> Self {
        ActualToken {
            category: None,
            literal: literal.into(),
        }
    }
}

impl Lexeme for ActualToken {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn literal(&self) -> &str {
        &self.literal
    }
}

impl<T: Lexeme + ?Sized> Lexeme for &T {
    fn category(&self) -> Option<&str> {
        (**self).category()
    }

    fn literal(&self) -> &str {
        (**self).literal()
    }
}

/// Parse a token dump: one `CATEGORY,LITERAL` per line.
///
/// Unlike golden files there is no header. A line with an empty category is
/// kept as an uncategorized token so it still occupies its position.
pub fn parse<R: BufRead>(reader: R) -> io::Result<Vec<ActualToken>> {
    let mut tokens = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        tokens.push(match split_row(line) {
            ("", literal) => ActualToken::uncategorized(literal),
            (category, literal) => ActualToken::new(category, literal),
        });
    }

    Ok(tokens)
}

/// Load a recorded token dump from `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<ActualToken>> {
    let path = path.as_ref();
    let tokens = File::open(path)
        .map(BufReader::new)
        .and_then(parse)
        .map_err(|source| Error::Tokens {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(path = %path.display(), tokens = tokens.len(), "loaded token dump");
    Ok(tokens)
}
