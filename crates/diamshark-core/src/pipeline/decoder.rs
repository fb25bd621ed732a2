use crate::dictionary::{Dictionary, StaticDictionary};
use crate::enrich::{DecoderRegistry, Enricher, build_record};
use crate::protocols::diameter::{DiameterError, parse_message};
use crate::MessageRecord;

/// Payload-to-record decoder: codec, enricher and presentation in one step.
///
/// Holds an immutable dictionary and decoder registry; one instance serves
/// any number of payloads.
pub struct MessageDecoder<D = StaticDictionary> {
    dictionary: D,
    decoders: DecoderRegistry,
}

impl MessageDecoder<StaticDictionary> {
    /// Built-in dictionary with the default semantic decoders.
    pub fn builtin() -> Self {
        Self::new(StaticDictionary::builtin(), DecoderRegistry::default())
    }
}

impl<D: Dictionary> MessageDecoder<D> {
    pub fn new(dictionary: D, decoders: DecoderRegistry) -> Self {
        Self {
            dictionary,
            decoders,
        }
    }

    /// Decode one payload. An error means the payload is not a usable
    /// Diameter message; callers skip it.
    pub fn decode_payload(&self, payload: &[u8]) -> Result<MessageRecord, DiameterError> {
        let message = parse_message(payload, &self.dictionary)?;
        let enricher = Enricher::new(&self.dictionary, &self.decoders);
        let avps = enricher.enrich(message.header.application_id, &message.avps);
        Ok(build_record(&message, avps))
    }
}

#[cfg(test)]
mod tests {
    use super::MessageDecoder;
    use crate::dictionary::StaticDictionary;
    use crate::enrich::DecoderRegistry;
    use crate::{AvpData, CanonicalValue};

    fn dwr() -> Vec<u8> {
        let mut out = vec![1, 0, 0, 32, 0x80, 0, 1, 24];
        out.extend_from_slice(&0u32.to_be_bytes());
        out.extend_from_slice(&5u32.to_be_bytes());
        out.extend_from_slice(&6u32.to_be_bytes());
        // Origin-State-Id = 9
        out.extend_from_slice(&[0, 0, 1, 22, 0x40, 0, 0, 12, 0, 0, 0, 9]);
        out
    }

    #[test]
    fn decodes_watchdog_request() {
        let record = MessageDecoder::builtin().decode_payload(&dwr()).unwrap();
        assert_eq!(record.command_code, 280);
        assert_eq!(record.command_code_name.as_deref(), Some("Device-Watchdog (DWR/DWA)"));
        assert_eq!(record.command_flags_name.as_deref(), Some("R"));
        assert_eq!(record.application_name.as_deref(), Some("Diameter Base"));
        assert_eq!(record.avps.len(), 1);
        assert_eq!(record.avps[0].name.as_deref(), Some("Origin-State-Id"));
        assert_eq!(record.avps[0].data, AvpData::Value(CanonicalValue::Unsigned32(9)));
    }

    #[test]
    fn empty_dictionary_leaves_avps_unnamed() {
        let decoder = MessageDecoder::new(StaticDictionary::new(), DecoderRegistry::empty());
        let record = decoder.decode_payload(&dwr()).unwrap();
        assert_eq!(record.avps[0].name, None);
        assert_eq!(
            record.avps[0].data,
            AvpData::Value(CanonicalValue::Text("Unknown{0x00000009}".to_string()))
        );
    }

    #[test]
    fn non_diameter_payload_is_an_error() {
        assert!(MessageDecoder::builtin().decode_payload(b"GET / HTTP/1.1\r\n").is_err());
    }
}
