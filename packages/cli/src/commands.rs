use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use console::Term;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::api::{ClassifyApi, GatewayClient};
use crate::render::render;
use crate::session;
use crate::state::{EditorState, Outcome, Settled};
use crate::watch::watch_file;

/// Re-classify `file` whenever it settles after a change. Runs until Ctrl+C.
pub async fn watch(client: GatewayClient, file: PathBuf, settle: Duration) -> Result<()> {
    let initial = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let (tx, rx) = mpsc::channel(64);
    tx.send(initial)
        .await
        .context("Failed to queue initial contents")?;
    let _watcher = watch_file(&file, tx)?;

    info!(file = %file.display(), endpoint = client.endpoint(), "Watching for changes");

    let term = Term::stdout();
    let session = session::run(Arc::new(client), settle, rx, move |state| {
        if let Err(e) = draw(&term, state) {
            warn!(error = %e, "Failed to draw results");
        }
    });

    tokio::select! {
        _ = session => {}
        _ = tokio::signal::ctrl_c() => info!("Stopping watch"),
    }

    Ok(())
}

/// Classify `file` (or stdin) once and print the results.
///
/// Returns false if classification failed.
pub async fn once<C: ClassifyApi>(client: &C, file: Option<&Path>) -> Result<bool> {
    let code = match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => read_source(tokio::io::stdin())
            .await
            .context("Failed to read stdin")?,
    };

    let state = classify_once(client, code).await;
    print!("{}", render(&state));
    Ok(state.outcome() != &Outcome::Failed)
}

async fn read_source<R: AsyncRead + Unpin>(mut reader: R) -> std::io::Result<String> {
    let mut code = String::new();
    reader.read_to_string(&mut code).await?;
    Ok(code)
}

async fn classify_once<C: ClassifyApi>(client: &C, code: String) -> EditorState {
    let mut state = EditorState::new();
    state.edit(code);
    if let Settled::Request { generation, code } = state.settle() {
        let result = client.classify(&code).await;
        state.resolve(generation, result);
    }
    state
}

fn draw(term: &Term, state: &EditorState) -> std::io::Result<()> {
    term.clear_screen()?;
    term.write_str(&render(state))
}
