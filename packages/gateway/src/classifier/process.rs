use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::{Output, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use super::{Classifier, ClassifierError};
use crate::config::ClassifierConfig;

/// Runs the external classifier once per submission.
///
/// The submission is written to the child's stdin, which is then closed; the
/// child's stdout is the result. Without a configured slot count every call
/// spawns immediately, so concurrent calls run concurrent processes.
#[derive(Debug)]
pub struct ProcessClassifier {
    program: String,
    args: Vec<String>,
    pass_code_as_arg: bool,
    working_dir: Option<PathBuf>,
    timeout: Option<Duration>,
    slots: Option<Arc<Semaphore>>,
}

impl ProcessClassifier {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            pass_code_as_arg: false,
            working_dir: None,
            timeout: None,
            slots: None,
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        let mut classifier = Self::new(config.program.clone(), config.args.clone())
            .with_code_as_arg(config.pass_code_as_arg);
        if let Some(dir) = &config.working_dir {
            classifier = classifier.with_working_dir(dir.clone());
        }
        if let Some(secs) = config.timeout_secs {
            classifier = classifier.with_timeout(Duration::from_secs(secs));
        }
        if let Some(limit) = config.max_concurrent {
            classifier = classifier.with_max_concurrent(limit);
        }
        classifier
    }

    pub fn with_code_as_arg(mut self, enabled: bool) -> Self {
        self.pass_code_as_arg = enabled;
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// A limit of 0 is treated as 1.
    pub fn with_max_concurrent(mut self, limit: usize) -> Self {
        self.slots = Some(Arc::new(Semaphore::new(limit.max(1))));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn command(&self, code: &str) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if self.pass_code_as_arg {
            command.arg(code);
        }
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }

    async fn run(&self, code: &str) -> Result<Output, ClassifierError> {
        let mut child = self
            .command(code)
            .spawn()
            .map_err(|source| ClassifierError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ClassifierError::Stdin(io::Error::other("stdin was not piped")))?;

        // Feed stdin while draining stdout/stderr so neither side can fill a
        // pipe buffer and stall the other.
        let write = async move {
            let written = stdin.write_all(code.as_bytes()).await;
            drop(stdin);
            written
        };
        let (written, output) = tokio::join!(write, child.wait_with_output());
        let output = output.map_err(ClassifierError::Output)?;

        match written {
            Ok(()) => {}
            // The classifier may exit without consuming stdin; its exit status decides.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("Classifier closed stdin before reading the whole submission");
            }
            Err(e) => return Err(ClassifierError::Stdin(e)),
        }

        Ok(output)
    }
}

#[async_trait]
impl Classifier for ProcessClassifier {
    async fn classify(&self, code: &str) -> Result<String, ClassifierError> {
        // The semaphore is never closed, so acquire only fails if it is.
        let _slot = match &self.slots {
            Some(slots) => slots.acquire().await.ok(),
            None => None,
        };

        let started = Instant::now();
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.run(code))
                .await
                .map_err(|_| ClassifierError::Timeout(limit))??,
            None => self.run(code).await?,
        };
        let elapsed = started.elapsed();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(status = %output.status, ?elapsed, "Classifier exited unsuccessfully");
            return Err(ClassifierError::Exit {
                status: output.status,
                stderr,
            });
        }

        let result = String::from_utf8_lossy(&output.stdout).trim().to_string();
        info!(
            code_bytes = code.len(),
            ?elapsed,
            result = %result,
            "Classifier finished"
        );
        Ok(result)
    }
}
