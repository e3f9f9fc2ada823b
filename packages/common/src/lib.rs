pub mod candidates;
pub mod classify;

pub use candidates::{DELIMITER, ProblemCandidates};
pub use classify::{ClassifyRequest, ClassifyResponse, ErrorBody};
