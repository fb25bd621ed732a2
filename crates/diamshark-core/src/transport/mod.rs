//! Transport payload extraction.
//!
//! Turns link-layer frames into the application payloads they carry: the
//! UDP datagram body, the TCP segment body, or the user data of every SCTP
//! DATA chunk. No reassembly happens here; each segment stands alone.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
mod stream;

pub use error::TransportError;
pub use parser::{TransportSegment, parse_transport_segment};
pub use stream::PayloadStream;
