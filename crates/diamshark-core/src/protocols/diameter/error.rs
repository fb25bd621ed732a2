use thiserror::Error;

/// Reasons a payload is not a well-formed Diameter message.
///
/// Callers scanning mixed traffic treat every variant the same way (skip
/// the payload); the detail is kept for tracing and tests.
#[derive(Debug, Error)]
pub enum DiameterError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("unsupported Diameter version: {version}")]
    UnsupportedVersion { version: u8 },
    #[error("invalid message length: {length}")]
    InvalidMessageLength { length: u32 },
    #[error("invalid length {length} for AVP {code}")]
    InvalidAvpLength { code: u32, length: u32 },
    #[error("AVP {code} overruns its container: ends at {end}, only {available} bytes")]
    AvpOverrun {
        code: u32,
        end: usize,
        available: usize,
    },
    #[error("invalid {kind} data for AVP {code}: {len} bytes")]
    InvalidAvpData {
        code: u32,
        kind: &'static str,
        len: usize,
    },
}
