//! diamshark core library: Diameter decoding for offline captures.
//!
//! Captured frames flow through a fixed chain of stages:
//! `source` reads link-layer frames, `transport` cuts out UDP/TCP/SCTP
//! payloads, `protocols::diameter` parses each payload into a header and a
//! typed AVP list, and `enrich` names the AVPs, expands grouped ones and
//! converts values into the serializable records defined here. The
//! `pipeline` drives the chain and writes one JSON record per message.
//!
//! Parsing is byte-oriented and side-effect free; all I/O stays in `source`
//! and `pipeline`. Payloads that are not Diameter are skipped and counted,
//! never fatal.
//!
//! Invariants:
//! - Records are produced in payload order, AVPs in wire order.
//! - Output for a given input and dictionary is byte-identical across runs.
//! - Name and table misses leave optional fields out; they are not errors.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use diamshark_core::{MessageDecoder, OutputFormat, RecordWriter, decode_pcap_file};
//!
//! let decoder = MessageDecoder::builtin();
//! let mut writer = RecordWriter::new(std::io::stdout().lock(), OutputFormat::Compact);
//! let summary = decode_pcap_file(Path::new("s6a.pcapng"), &decoder, &mut writer)?;
//! eprintln!("{} records", summary.records_written);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Serialize, Serializer};

pub mod dictionary;
pub mod enrich;
mod pipeline;
pub mod protocols;
mod source;
mod transport;

pub use pipeline::{
    DecodeSummary, MessageDecoder, OutputFormat, PipelineError, RecordWriter, decode_payloads,
    decode_pcap_file,
};
pub use source::{
    PacketEvent, PacketSource, PayloadEvent, PayloadSource, PcapFileSource, SourceError,
};
pub use transport::{
    PayloadStream, TransportError, TransportSegment, parse_transport_segment,
};

/// One decoded Diameter message, ready for serialization.
///
/// # Examples
/// ```
/// use diamshark_core::MessageRecord;
///
/// let record = MessageRecord {
///     command_code: 280,
///     command_code_name: Some("Device-Watchdog (DWR/DWA)".to_string()),
///     command_flags: 0x80,
///     command_flags_name: Some("R".to_string()),
///     application_id: 0,
///     application_name: Some("Diameter Base".to_string()),
///     hop_by_hop_id: 1,
///     end_to_end_id: 2,
///     avps: Vec::new(),
/// };
/// let json = serde_json::to_value(&record).unwrap();
/// assert_eq!(json["command_flags_name"], "R");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecord {
    pub command_code: u32,
    /// Label from the command table, e.g. `Update-Location (ULR/ULA)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_code_name: Option<String>,
    pub command_flags: u8,
    /// Set bits among R, P, E and T joined by `|`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_flags_name: Option<String>,
    pub application_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    pub hop_by_hop_id: u32,
    pub end_to_end_id: u32,
    /// Top-level AVPs in wire order.
    pub avps: Vec<AvpRecord>,
}

/// One AVP with its resolved name and converted value.
///
/// # Examples
/// ```
/// use diamshark_core::{AvpData, AvpRecord, CanonicalValue};
///
/// let avp = AvpRecord {
///     code: 268,
///     vendor_id: None,
///     name: Some("Result-Code".to_string()),
///     data: AvpData::Value(CanonicalValue::Unsigned32(2001)),
/// };
/// let json = serde_json::to_string(&avp).unwrap();
/// assert_eq!(json, r#"{"code":268,"name":"Result-Code","data":2001}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvpRecord {
    pub code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data: AvpData,
}

/// Exactly one representation of an AVP value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AvpData {
    Value(CanonicalValue),
    /// Children of a grouped AVP that decoded cleanly.
    Grouped(GroupedData),
    /// Output of a semantic decoder; supersedes the generic value.
    Decoded(DecodedValue),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedData {
    pub avps: Vec<AvpRecord>,
}

/// Generic JSON form of a primitive AVP value.
///
/// Integers keep their wire width and signedness. Bytes serialize as
/// standard base64.
///
/// # Examples
/// ```
/// use diamshark_core::CanonicalValue;
///
/// let bytes = CanonicalValue::Bytes(vec![0x01, 0x02, 0x03]);
/// assert_eq!(serde_json::to_string(&bytes).unwrap(), r#""AQID""#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CanonicalValue {
    Text(String),
    Bytes(#[serde(serialize_with = "serialize_base64")] Vec<u8>),
    Integer32(i32),
    Unsigned32(u32),
    Integer64(i64),
    Unsigned64(u64),
    Float32(f32),
    Float64(f64),
}

/// Structures produced by semantic decoders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedValue {
    Plmn(Plmn),
}

/// PLMN identity split into its country and network codes.
///
/// # Examples
/// ```
/// use diamshark_core::enrich::decode_plmn;
/// use diamshark_core::{DecodedValue, Plmn};
///
/// let decoded = decode_plmn(&[0x02, 0xF8, 0x10]);
/// assert_eq!(
///     decoded,
///     Some(DecodedValue::Plmn(Plmn {
///         mcc: "208".to_string(),
///         mnc: "01".to_string(),
///         hex: "02f810".to_string(),
///     }))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plmn {
    pub mcc: String,
    pub mnc: String,
    /// Lowercase hex of the raw AVP data.
    pub hex: String,
}

fn serialize_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(bytes))
}
