pub mod error;
pub mod process;

use async_trait::async_trait;

pub use error::ClassifierError;
pub use process::ProcessClassifier;

/// Something that turns a code submission into a raw, delimiter-separated
/// classification result.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify `code`, returning the result with surrounding whitespace trimmed.
    async fn classify(&self, code: &str) -> Result<String, ClassifierError>;
}
