use serde::{Deserialize, Serialize};

/// Query-string parameters of `GET /compl`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

/// Machine-readable error body: `{"error": "not_found"}` etc.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub records: usize,
    pub version: u64,
}
