use std::ffi::OsString;
use std::io;
use std::io::Write as _;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use anyhow::anyhow;
use anyhow::Context as _;
use clap::Parser;

use token_grader::golden;
use token_grader::lexer;
use token_grader::lexer::Lexer;
use token_grader::logging;
use token_grader::report;
use token_grader::token;
use token_grader::ActualToken;
use token_grader::Grader;

#[derive(Parser)]
#[clap(about)]
enum Command {
    /// Run a lexer over an input program and grade its tokens.
    Run {
        /// Golden CSV of expected `CATEGORY,LITERAL` rows.
        #[clap(long, default_value = "src/test/resources/output.csv")]
        golden: PathBuf,

        /// Program fed to the lexer on stdin.
        #[clap(long, default_value = "src/test/resources/input.txt")]
        input: PathBuf,

        /// Build the lexer with `make <TARGET>` before running it.
        #[clap(long, value_name = "TARGET")]
        make: Option<String>,

        #[clap(flatten)]
        options: Options,

        /// Lexer executable, which prints one `CATEGORY,LITERAL` token per line.
        lexer: PathBuf,

        /// Arguments passed through to the lexer.
        #[clap(last = true)]
        args: Vec<OsString>,
    },

    /// Grade a recorded token dump.
    Compare {
        /// Golden CSV of expected `CATEGORY,LITERAL` rows.
        #[clap(long, default_value = "src/test/resources/output.csv")]
        golden: PathBuf,

        #[clap(flatten)]
        options: Options,

        /// Lexer output, one `CATEGORY,LITERAL` token per line.
        tokens: PathBuf,
    },
}

#[derive(clap::Args)]
struct Options {
    /// Only print errors, warnings, and the summary.
    #[clap(short, long)]
    quiet: bool,

    /// Exit with status 1 unless every token is correct and the counts agree.
    #[clap(long)]
    strict: bool,

    /// When to colour the report.
    #[clap(long, default_value = "auto", possible_values = ["auto", "always", "never"])]
    color: ColorChoice,

    /// Log more to stderr (-v info, -vv debug).
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorChoice {
    type Err = anyhow::Error;
    fn from_str(choice: &str) -> Result<Self, Self::Err> {
        match choice {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(anyhow!("Invalid color choice `{}`", choice)),
        }
    }
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => atty::is(atty::Stream::Stdout),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Where the tokens under test come from.
enum Source {
    Lexer {
        program: PathBuf,
        args: Vec<OsString>,
        input: PathBuf,
        make: Option<String>,
    },
    Dump(PathBuf),
}

impl Source {
    fn tokens(self) -> anyhow::Result<Vec<ActualToken>> {
        match self {
            Source::Lexer {
                program,
                args,
                input,
                make,
            } => {
                if let Some(target) = make {
                    if let Err(error) = lexer::make(&target) {
                        tracing::warn!(rule = %target, "lexer build failed");
                        eprintln!("{:#}", error);
                    }
                }

                Lexer::new(program)
                    .args(args)
                    .run(&input)
                    .context("Could not run lexer")
            }
            Source::Dump(path) => Ok(token::load(path)?),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let (reference, source, options) = match Command::parse() {
        Command::Run {
            golden,
            input,
            make,
            options,
            lexer: program,
            args,
        } => (
            golden,
            Source::Lexer {
                program,
                args,
                input,
                make,
            },
            options,
        ),
        Command::Compare {
            golden,
            options,
            tokens,
        } => (golden, Source::Dump(tokens), options),
    };

    logging::init(options.verbose);

    let expected = golden::load(&reference)?;
    let actual = source.tokens()?;
    let grade = Grader::new().grade(&actual, &expected);

    let style = report::Style {
        color: options.color.enabled(),
        quiet: options.quiet,
    };

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    report::write(&mut stdout, &grade, style)?;
    stdout.flush()?;

    if options.strict && !grade.summary.is_perfect() {
        process::exit(1);
    }

    Ok(())
}
