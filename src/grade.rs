//! Positional grading of a token stream against golden rows.
//!
//! Position `i` of the actual stream is compared with position `i` of the
//! golden rows, and nothing else. There is no resynchronization: one token
//! inserted or dropped by the lexer shifts every later position, and each of
//! those is scored as an error. Tokens past the shorter stream are never
//! compared; the length difference is only reported.
//!
//! Only categories decide a match. Literals are carried for the report.

use crate::equivalence::EquivalenceTable;
use crate::golden::GoldenRow;
use crate::token::Lexeme;

#[derive(Clone, Debug)]
pub struct Grader {
    table: EquivalenceTable,
}

impl Default for Grader {
    fn default() -> Self {
        Grader::new()
    }
}

impl Grader {
    /// A grader using [`EquivalenceTable::standard`].
    pub fn new() -> Self {
        Grader::with_table(EquivalenceTable::standard())
    }

    pub fn with_table(table: EquivalenceTable) -> Self {
        Grader { table }
    }

    pub fn grade<T: Lexeme>(&self, actual: &[T], expected: &[GoldenRow]) -> Grade {
        let results = actual
            .iter()
            .zip(expected)
            .enumerate()
            .map(|(index, (token, row))| ComparisonResult {
                position: index + 1,
                actual_category: token.category().map(String::from),
                actual_literal: token.literal().to_string(),
                expected_category: row.category().to_string(),
                expected_literal: row.literal().to_string(),
                is_match: self.table.matches(token.category(), Some(row.category())),
            })
            .collect::<Vec<_>>();

        let correct = results.iter().filter(|result| result.is_match).count();

        let summary = GradeSummary {
            compared: results.len(),
            correct,
            errors: results.len() - correct,
            actual_total: actual.len(),
            expected_total: expected.len(),
        };

        tracing::debug!(
            compared = summary.compared,
            correct = summary.correct,
            errors = summary.errors,
            "graded token stream"
        );

        Grade { results, summary }
    }
}

/// Outcome at one compared position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonResult {
    /// 1-based.
    pub position: usize,
    pub actual_category: Option<String>,
    pub actual_literal: String,
    pub expected_category: String,
    pub expected_literal: String,
    pub is_match: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GradeSummary {
    pub compared: usize,
    pub correct: usize,
    pub errors: usize,
    pub actual_total: usize,
    pub expected_total: usize,
}

impl GradeSummary {
    pub fn length_mismatch(&self) -> bool {
        self.actual_total != self.expected_total
    }

    /// Every compared position correct and both streams the same length.
    pub fn is_perfect(&self) -> bool {
        self.errors == 0 && !self.length_mismatch()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grade {
    pub results: Vec<ComparisonResult>,
    pub summary: GradeSummary,
}
