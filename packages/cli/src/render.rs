use console::style;

use crate::state::{EditorState, Outcome};

pub const HEADING: &str = "This code is attempting to solve...";
pub const LOADING: &str = "Classifying problem...";
pub const NO_PROBLEM: &str = "No problem provided.";
pub const ERROR_MESSAGE: &str = "Error classifying problem.";

/// Render the results region for `state`.
pub fn render(state: &EditorState) -> String {
    let mut lines = vec![style(HEADING).bold().to_string(), String::new()];

    if state.is_loading() {
        lines.push(format!("{} {}", style("…").cyan(), LOADING));
        return lines.join("\n") + "\n";
    }

    match state.outcome() {
        Outcome::Candidates(candidates) if !candidates.is_empty() => {
            if let Some(headline) = candidates.headline() {
                lines.push(style(headline).green().bold().to_string());
            }
            lines.extend(candidates.others().iter().map(|name| format!("  {name}")));
        }
        Outcome::Candidates(_) | Outcome::Empty => lines.push(NO_PROBLEM.to_string()),
        Outcome::Failed => lines.push(style(ERROR_MESSAGE).red().to_string()),
    }

    lines.join("\n") + "\n"
}
