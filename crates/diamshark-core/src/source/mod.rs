//! Capture inputs.
//!
//! Two levels of source exist: `PacketSource` yields link-layer frames as
//! stored in a capture file, `PayloadSource` yields the application-layer
//! payloads carried inside them. Only the pipeline pulls from either.

mod pcap;

pub use pcap::PcapFileSource;

use pcap_parser::Linktype;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct PacketEvent {
    pub ts: Option<f64>,
    pub linktype: Linktype,
    pub data: Vec<u8>,
}

pub trait PacketSource {
    fn next_packet(&mut self) -> Result<Option<PacketEvent>, SourceError>;
}

/// One application-layer payload (UDP datagram, TCP segment or SCTP DATA
/// chunk) together with the capture timestamp of its frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadEvent {
    pub ts: Option<f64>,
    pub payload: Vec<u8>,
}

/// Sequential supplier of opaque payloads; `Ok(None)` marks end of stream.
pub trait PayloadSource {
    fn next_payload(&mut self) -> Result<Option<PayloadEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("capture parse error: {0}")]
    Pcap(String),
}

impl From<pcap::error::PcapSourceError> for SourceError {
    fn from(value: pcap::error::PcapSourceError) -> Self {
        match value {
            pcap::error::PcapSourceError::Io(err) => SourceError::Io(err),
            pcap::error::PcapSourceError::Pcap { context, message } => {
                SourceError::Pcap(format!("{context}: {message}"))
            }
        }
    }
}
