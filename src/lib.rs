//! Scores a lexer's token stream against a golden CSV reference.
//!
//! [`golden::load`] reads the expected `(category, literal)` rows,
//! [`Grader::grade`] compares them position by position with the tokens a
//! lexer produced, and [`report::write`] prints the outcome.

pub mod equivalence;
pub mod error;
pub mod golden;
pub mod grade;
pub mod lexer;
pub mod logging;
pub mod report;
pub mod token;

pub use equivalence::EquivalenceTable;
pub use error::Error;
pub use error::Result;
pub use golden::GoldenRow;
pub use grade::ComparisonResult;
pub use grade::Grade;
pub use grade::GradeSummary;
pub use grade::Grader;
pub use token::ActualToken;
pub use token::Lexeme;
