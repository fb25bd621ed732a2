use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("AVP {code} in application {application_id} has an empty name")]
    EmptyName { application_id: u32, code: u32 },
}
