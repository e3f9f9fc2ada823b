use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::api::{ClassifyApi, ClientError};
use crate::state::{EditorState, Settled};

/// Default quiet period between the last edit and the classification request.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(500);

/// Drive an editing session until `edits` closes and all work has drained.
///
/// Each received edit restarts the settle timer; when the timer elapses the
/// current code is classified on a background task. Requests already sent are
/// never cancelled, but their responses only apply if nothing newer has been
/// fired since. `on_change` sees the state after every visible transition.
pub async fn run<C, F>(
    client: Arc<C>,
    settle: Duration,
    mut edits: mpsc::Receiver<String>,
    mut on_change: F,
) -> EditorState
where
    C: ClassifyApi + 'static,
    F: FnMut(&EditorState),
{
    let mut state = EditorState::new();
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<(u64, Result<String, ClientError>)>();

    let timer = sleep(settle);
    tokio::pin!(timer);
    let mut armed = false;
    let mut edits_open = true;
    let mut in_flight = 0usize;

    loop {
        tokio::select! {
            edit = edits.recv(), if edits_open => match edit {
                Some(code) => {
                    state.edit(code);
                    timer.as_mut().reset(Instant::now() + settle);
                    armed = true;
                    on_change(&state);
                }
                None => edits_open = false,
            },
            _ = &mut timer, if armed => {
                armed = false;
                if let Settled::Request { generation, code } = state.settle() {
                    debug!(generation, code_bytes = code.len(), "Sending classification request");
                    in_flight += 1;
                    let client = Arc::clone(&client);
                    let done = done_tx.clone();
                    tokio::spawn(async move {
                        let result = client.classify(&code).await;
                        // The session may already be gone.
                        let _ = done.send((generation, result));
                    });
                }
                on_change(&state);
            }
            Some((generation, result)) = done_rx.recv(), if in_flight > 0 => {
                in_flight -= 1;
                if state.resolve(generation, result) {
                    on_change(&state);
                }
            }
        }

        if !edits_open && !armed && in_flight == 0 {
            break;
        }
    }

    state
}
