use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Forward the contents of `path` to `edits` every time it changes on disk.
///
/// The parent directory is watched rather than the file itself so editors
/// that save by renaming a temporary file over the original keep working.
/// Consecutive identical contents are sent once. The returned watcher must be
/// kept alive for events to flow.
pub fn watch_file(path: &Path, edits: mpsc::Sender<String>) -> Result<RecommendedWatcher> {
    let target = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    let parent = target
        .parent()
        .context("Watched file has no parent directory")?
        .to_path_buf();

    let mut filter = ChangeFilter::new(target.clone());
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            if !filter.is_relevant(&event) {
                return;
            }
            match std::fs::read_to_string(&filter.target) {
                Ok(code) => {
                    if filter.is_new(&code) && edits.blocking_send(code).is_err() {
                        debug!("Session closed, dropping edit");
                    }
                }
                // Mid-save the file can briefly be missing.
                Err(e) => debug!(error = %e, "Failed to read watched file"),
            }
        }
        Err(e) => warn!(error = %e, "Watch error"),
    })
    .context("Failed to create file watcher")?;

    watcher
        .watch(&parent, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", parent.display()))?;

    Ok(watcher)
}

struct ChangeFilter {
    target: PathBuf,
    last: Option<String>,
}

impl ChangeFilter {
    fn new(target: PathBuf) -> Self {
        Self { target, last: None }
    }

    fn is_relevant(&self, event: &Event) -> bool {
        matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
            && event.paths.iter().any(|p| p == &self.target)
    }

    fn is_new(&mut self, code: &str) -> bool {
        if self.last.as_deref() == Some(code) {
            return false;
        }
        self.last = Some(code.to_string());
        true
    }
}
