use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_RECORDS_PATH: &str = "data/people.sample.json";
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Runtime settings shared with the request handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Record file the snapshot was loaded from; `/reload` re-reads it.
    pub records_path: PathBuf,
    /// Hard cap on search results per request. A `limit` query parameter may
    /// lower it but never raise it.
    pub result_limit: usize,
}
