//! Human-readable grading report.

use std::io;
use std::io::Write;

use ansi_term::Color;
use difference::Changeset;
use difference::Difference;

use crate::grade::ComparisonResult;
use crate::grade::Grade;
use crate::grade::GradeSummary;

const UNCATEGORIZED: &str = "(none)";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
    /// Leave out CORRECT lines.
    pub quiet: bool,
}

impl Style {
    fn paint<S: AsRef<str>>(&self, color: Color, text: S) -> String {
        match self.color {
            true => color.paint(text.as_ref()).to_string(),
            false => text.as_ref().to_string(),
        }
    }
}

pub fn write<W: Write>(out: &mut W, grade: &Grade, style: Style) -> io::Result<()> {
    for result in &grade.results {
        match result.is_match {
            true if style.quiet => (),
            true => writeln!(
                out,
                "{}. {} {} is {}",
                result.position,
                style.paint(Color::Green, "CORRECT:"),
                result.actual_literal,
                result.expected_category,
            )?,
            false => write_error(out, result, style)?,
        }
    }

    if grade.summary.length_mismatch() {
        write_mismatch(out, &grade.summary, style)?;
    }

    write_summary(out, &grade.summary, style)
}

/// Render the whole report into a string.
pub fn render(grade: &Grade, style: Style) -> String {
    let mut buffer = Vec::new();
    write(&mut buffer, grade, style).expect("[INTERNAL ERROR]: writing to a Vec cannot fail");
    String::from_utf8_lossy(&buffer).into_owned()
}

fn write_error<W: Write>(out: &mut W, result: &ComparisonResult, style: Style) -> io::Result<()> {
    let actual = format!(
        "{},{}",
        result.actual_category.as_deref().unwrap_or(UNCATEGORIZED),
        result.actual_literal,
    );
    let expected = format!("{},{}", result.expected_category, result.expected_literal);

    let (actual, expected) = match style.color {
        true => highlight(&actual, &expected),
        false => (actual, expected),
    };

    writeln!(out, "{}. {}", result.position, style.paint(Color::Red, "ERROR:"))?;
    writeln!(out, "   Actual   : {}", actual)?;
    writeln!(out, "   Expected : {}", expected)
}

/// Paint the comma-separated fields that differ between the two rows.
fn highlight(actual: &str, expected: &str) -> (String, String) {
    let mut actuals = Vec::new();
    let mut expecteds = Vec::new();

    for difference in Changeset::new(expected, actual, ",").diffs {
        match difference {
            Difference::Same(same) => {
                actuals.push(same.clone());
                expecteds.push(same);
            }
            Difference::Add(added) => actuals.push(Color::Green.paint(added).to_string()),
            Difference::Rem(removed) => expecteds.push(Color::Red.paint(removed).to_string()),
        }
    }

    (actuals.join(","), expecteds.join(","))
}

fn write_mismatch<W: Write>(out: &mut W, summary: &GradeSummary, style: Style) -> io::Result<()> {
    writeln!(out, "{}", style.paint(Color::Yellow, "WARNING: token count mismatch"))?;
    writeln!(out, "   Lexer tokens : {}", summary.actual_total)?;
    writeln!(out, "   Expected     : {}", summary.expected_total)
}

fn write_summary<W: Write>(out: &mut W, summary: &GradeSummary, style: Style) -> io::Result<()> {
    writeln!(out, "{}", style.paint(Color::Blue, "SUMMARY:"))?;
    writeln!(out, "   Compared : {}", summary.compared)?;
    writeln!(out, "   Correct  : {}", summary.correct)?;
    writeln!(out, "   Errors   : {}", summary.errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::golden::GoldenRow;
    use crate::grade::Grader;
    use crate::token::ActualToken;

    fn grade() -> Grade {
        Grader::new().grade(
            &[
                ActualToken::new("INT", "42"),
                ActualToken::new("SEPARATOR", ";"),
                ActualToken::uncategorized("?"),
            ],
            &[
                GoldenRow::new("INTEGER", "42"),
                GoldenRow::new("DELIMITER", ";"),
                GoldenRow::new("OPERATOR", "?"),
                GoldenRow::new("IDENTIFIER", "x"),
            ],
        )
    }

    #[test]
    fn plain_report() {
        assert_eq!(
            render(&grade(), Style::default()),
            "\
1. CORRECT: 42 is INTEGER
2. ERROR:
   Actual   : SEPARATOR,;
   Expected : DELIMITER,;
3. ERROR:
   Actual   : (none),?
   Expected : OPERATOR,?
WARNING: token count mismatch
   Lexer tokens : 3
   Expected     : 4
SUMMARY:
   Compared : 3
   Correct  : 1
   Errors   : 2
"
        );
    }

    #[test]
    fn quiet_report_omits_correct_lines() {
        let report = render(
            &grade(),
            Style {
                color: false,
                quiet: true,
            },
        );

        assert!(!report.contains("CORRECT"));
        assert!(report.starts_with("2. ERROR:\n"));
        assert!(report.ends_with("   Errors   : 2\n"));
    }

    #[test]
    fn no_warning_when_lengths_agree() {
        let grade = Grader::new().grade(
            &[ActualToken::new("ID", "x")],
            &[GoldenRow::new("IDENTIFIER", "x")],
        );

        assert_eq!(
            render(&grade, Style::default()),
            "\
1. CORRECT: x is IDENTIFIER
SUMMARY:
   Compared : 1
   Correct  : 1
   Errors   : 0
"
        );
    }

    #[test]
    fn colored_error_highlights_category() {
        let (actual, expected) = highlight("SEPARATOR,;", "DELIMITER,;");

        assert_eq!(actual, format!("{},;", Color::Green.paint("SEPARATOR")));
        assert_eq!(expected, format!("{},;", Color::Red.paint("DELIMITER")));
    }

    #[test]
    fn colored_report_keeps_text() {
        let report = render(
            &grade(),
            Style {
                color: true,
                quiet: false,
            },
        );

        assert!(report.contains(&Color::Red.paint("ERROR:").to_string()));
        assert!(report.contains(&Color::Blue.paint("SUMMARY:").to_string()));
        assert!(report.contains("   Compared : 3\n"));
    }
}
