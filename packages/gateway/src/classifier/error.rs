use std::io;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("failed to spawn classifier `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write submission to classifier stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to collect classifier output: {0}")]
    Output(#[source] io::Error),

    #[error("classifier exited with {status}: {stderr}")]
    Exit { status: ExitStatus, stderr: String },

    #[error("classifier did not finish within {0:?}")]
    Timeout(Duration),
}
