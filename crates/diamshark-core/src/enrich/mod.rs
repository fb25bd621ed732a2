//! Turns decoded AVPs into output records.
//!
//! The enricher names each AVP through the dictionary, expands grouped AVPs
//! into nested records and converts every remaining value to its canonical
//! JSON form. Registered semantic decoders replace the generic form of the
//! OctetString AVPs they recognize. Nothing here fails: every miss degrades
//! to a less specific representation.

mod optional;
mod presentation;
mod semantic;

pub use presentation::{application_name, build_record, command_code_name, command_flags_name};
pub use semantic::{DecoderRegistry, SemanticDecoder, decode_plmn};

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use crate::dictionary::{Dictionary, resolve_name};
use crate::protocols::diameter::{AddressValue, Avp, AvpValue, decode_grouped};
use crate::{AvpData, AvpRecord, CanonicalValue, GroupedData};

use optional::{optional_non_empty, optional_nonzero_u32};

/// Deepest grouped nesting that is expanded; deeper levels stay as hex.
pub const MAX_GROUPED_DEPTH: usize = 16;

/// Seconds between the NTP epoch (1900) and the Unix epoch (1970).
const NTP_UNIX_OFFSET: i64 = 2_208_988_800;

/// Read-only context for enriching the AVPs of one message.
#[derive(Clone, Copy)]
pub struct Enricher<'a> {
    dictionary: &'a dyn Dictionary,
    decoders: &'a DecoderRegistry,
}

impl<'a> Enricher<'a> {
    pub fn new(dictionary: &'a dyn Dictionary, decoders: &'a DecoderRegistry) -> Self {
        Self {
            dictionary,
            decoders,
        }
    }

    /// Enrich `avps` (wire order preserved) in the scope of `application_id`.
    pub fn enrich(&self, application_id: u32, avps: &[Avp]) -> Vec<AvpRecord> {
        self.enrich_level(application_id, avps, 0)
    }

    fn enrich_level(&self, application_id: u32, avps: &[Avp], depth: usize) -> Vec<AvpRecord> {
        avps.iter()
            .map(|avp| self.enrich_avp(application_id, avp, depth))
            .collect()
    }

    fn enrich_avp(&self, application_id: u32, avp: &Avp, depth: usize) -> AvpRecord {
        let name = resolve_name(self.dictionary, application_id, avp.code, avp.vendor_id);
        let data = self.avp_data(application_id, avp, &name, depth);
        AvpRecord {
            code: avp.code,
            vendor_id: optional_nonzero_u32(avp.vendor_id),
            name: optional_non_empty(name),
            data,
        }
    }

    fn avp_data(&self, application_id: u32, avp: &Avp, name: &str, depth: usize) -> AvpData {
        match &avp.value {
            AvpValue::Grouped(raw) => {
                if depth + 1 >= MAX_GROUPED_DEPTH {
                    debug!(code = avp.code, depth, "grouped nesting too deep, keeping hex");
                    return AvpData::Value(canonical_value(&avp.value));
                }
                match decode_grouped(raw, application_id, self.dictionary) {
                    Ok(children) => AvpData::Grouped(GroupedData {
                        avps: self.enrich_level(application_id, &children, depth + 1),
                    }),
                    Err(err) => {
                        debug!(code = avp.code, error = %err, "grouped decode failed, keeping hex");
                        AvpData::Value(canonical_value(&avp.value))
                    }
                }
            }
            AvpValue::OctetString(raw) => match self.decoders.decode(name, raw) {
                Some(decoded) => AvpData::Decoded(decoded),
                None => AvpData::Value(canonical_value(&avp.value)),
            },
            value => AvpData::Value(canonical_value(value)),
        }
    }
}

/// Generic canonical form of a raw value.
pub fn canonical_value(value: &AvpValue) -> CanonicalValue {
    match value {
        AvpValue::Utf8String(text) | AvpValue::DiameterIdentity(text) => {
            CanonicalValue::Text(text.clone())
        }
        AvpValue::OctetString(bytes) => CanonicalValue::Bytes(bytes.clone()),
        AvpValue::Address(address) => CanonicalValue::Text(address_text(address)),
        AvpValue::Integer32(v) => CanonicalValue::Integer32(*v),
        AvpValue::Unsigned32(v) => CanonicalValue::Unsigned32(*v),
        AvpValue::Integer64(v) => CanonicalValue::Integer64(*v),
        AvpValue::Unsigned64(v) => CanonicalValue::Unsigned64(*v),
        AvpValue::Float32(v) => CanonicalValue::Float32(*v),
        AvpValue::Float64(v) => CanonicalValue::Float64(*v),
        AvpValue::Grouped(raw) => CanonicalValue::Text(hex_string(raw)),
        AvpValue::Enumerated(v) => CanonicalValue::Text(format!("Enumerated{{{v}}}")),
        AvpValue::Time(secs) => CanonicalValue::Text(format!("Time{{{}}}", ntp_to_rfc3339(*secs))),
        AvpValue::DiameterUri(uri) => CanonicalValue::Text(format!("DiameterURI{{{uri}}}")),
        AvpValue::IpFilterRule(rule) => CanonicalValue::Text(format!("IPFilterRule{{{rule}}}")),
        AvpValue::QosFilterRule(rule) => CanonicalValue::Text(format!("QoSFilterRule{{{rule}}}")),
        AvpValue::Unknown(raw) => CanonicalValue::Text(format!("Unknown{{0x{}}}", hex_string(raw))),
    }
}

pub(crate) fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join("")
}

fn address_text(address: &AddressValue) -> String {
    match address {
        AddressValue::Ip(ip) => ip.to_string(),
        AddressValue::Other { family, address } => format!("{family}:{}", hex_string(address)),
    }
}

/// Wire Time values are NTP seconds; the Unix time is formatted as RFC3339.
fn ntp_to_rfc3339(secs: u32) -> String {
    OffsetDateTime::from_unix_timestamp(i64::from(secs) - NTP_UNIX_OFFSET)
        .ok()
        .and_then(|ts| ts.format(&Rfc3339).ok())
        .unwrap_or_else(|| secs.to_string())
}
