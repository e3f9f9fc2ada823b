use serde::{Deserialize, Serialize};

/// Request body for `POST /classify`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClassifyRequest {
    /// Source code to classify. Must be present and non-empty.
    #[serde(default)]
    #[schema(example = "class Solution { public int[] twoSum(int[] nums, int target) { ... } }")]
    pub code: Option<String>,
}

impl ClassifyRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
        }
    }
}

/// Successful classification. `problem_name` is the classifier's raw,
/// `$`-separated output with surrounding whitespace trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    #[schema(example = "Two Sum$Array$Hash Table")]
    pub problem_name: String,
}

/// Structured error response returned by the gateway on failure.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,
    /// Human-readable error description.
    #[schema(example = "No code provided")]
    pub error: String,
}
