//! Running an external lexer executable.
//!
//! The lexer reads its source program on stdin and prints one
//! `CATEGORY,LITERAL` token per line on stdout.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::io::Write as _;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::thread;

use anyhow::anyhow;
use anyhow::Context as _;

use crate::error::Error;
use crate::error::Result;
use crate::token;
use crate::token::ActualToken;

pub struct Lexer {
    program: PathBuf,
    args: Vec<OsString>,
}

impl Lexer {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Lexer {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Extra arguments passed to the program, e.g. `java Lexer`.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Feed `input` to the lexer and collect its tokens.
    ///
    /// A non-zero exit status is only logged: whatever the lexer printed
    /// before failing is still graded.
    pub fn run<P: AsRef<Path>>(&self, input: P) -> Result<Vec<ActualToken>> {
        let input = input.as_ref();
        let source = fs::read(input).map_err(|source| Error::Input {
            path: input.to_path_buf(),
            source,
        })?;

        let lost = |source: io::Error| Error::Lexer {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // The writer owns stdin and drops it when done, closing the pipe so
        // the lexer sees end of input. stdout is drained concurrently.
        let writer = child
            .stdin
            .take()
            .map(|mut stdin| thread::spawn(move || stdin.write_all(&source)));

        let output = child.wait_with_output().map_err(lost)?;

        if let Some(writer) = writer {
            match writer.join() {
                Ok(Ok(())) => (),
                Ok(Err(error)) if error.kind() == io::ErrorKind::BrokenPipe => {
                    tracing::debug!(program = %self.program.display(), "lexer closed stdin early");
                }
                Ok(Err(error)) => return Err(lost(error)),
                Err(_) => {
                    let error = io::Error::new(io::ErrorKind::Other, "stdin writer panicked");
                    return Err(lost(error));
                }
            }
        }

        if !output.status.success() {
            tracing::warn!(
                program = %self.program.display(),
                status = %output.status,
                "lexer exited unsuccessfully"
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let tokens = token::parse(stdout.as_bytes()).map_err(lost)?;

        tracing::info!(
            program = %self.program.display(),
            tokens = tokens.len(),
            "collected lexer tokens"
        );

        Ok(tokens)
    }
}

/// Run `make <target>` in the current directory.
pub fn make(target: &str) -> anyhow::Result<()> {
    Command::new("make")
        .arg(target)
        .spawn()
        .context("Could not execute `make`")?
        .wait()
        .map_err(anyhow::Error::new)
        .and_then(|status| match status.success() {
            true => Ok(()),
            false => Err(anyhow!(status)),
        })
        .with_context(|| anyhow!("Could not execute `make {}`", target))
}
