use thiserror::Error;

/// Errors returned while extracting transport payloads from a frame.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("packet slice error: {0}")]
    Slice(String),
    #[error("missing network layer in packet")]
    MissingNetworkLayer,
    #[error("missing IP payload in packet")]
    MissingIpPayload,
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("invalid TCP data offset: {offset} bytes")]
    InvalidTcpDataOffset { offset: usize },
    #[error("invalid SCTP chunk length: {length}")]
    InvalidChunkLength { length: u16 },
}
