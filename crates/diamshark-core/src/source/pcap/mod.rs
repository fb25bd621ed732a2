//! PCAP/PCAPNG source implementation.
//!
//! Provides a `PacketSource` backed by capture files. File I/O and the
//! block-level parsing stay here; the pipeline only sees link-layer frames.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::PcapFileSource;
