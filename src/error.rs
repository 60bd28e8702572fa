use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read golden file {}", path.display())]
    Golden {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not read token dump {}", path.display())]
    Tokens {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not read lexer input {}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not execute `{}`", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Lost contact with `{}`", program.display())]
    Lexer {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}
