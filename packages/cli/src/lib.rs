pub mod api;
pub mod commands;
pub mod render;
pub mod session;
pub mod state;
pub mod watch;

pub use api::{ClassifyApi, ClientError, GatewayClient};
pub use state::{EditorState, Outcome, Phase};
