use std::collections::HashMap;

use crate::{DecodedValue, Plmn};

use super::hex_string;

/// Reinterprets the raw bytes of an OctetString AVP as a richer structure.
///
/// `None` means the decoder does not apply (too short, wrong shape); the
/// caller then keeps the generic value.
pub type SemanticDecoder = fn(&[u8]) -> Option<DecodedValue>;

/// Semantic decoders keyed by the AVP name that triggers them.
#[derive(Debug, Clone)]
pub struct DecoderRegistry {
    decoders: HashMap<String, SemanticDecoder>,
}

impl DecoderRegistry {
    /// Registry with no decoders; every AVP keeps its generic value.
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register `decoder` for AVPs named `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, decoder: SemanticDecoder) {
        self.decoders.insert(name.into(), decoder);
    }

    pub fn decode(&self, name: &str, raw: &[u8]) -> Option<DecodedValue> {
        self.decoders.get(name).and_then(|decoder| decoder(raw))
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("Visited-PLMN-Id", decode_plmn);
        registry
    }
}

/// Decode a 3GPP TS 23.003 PLMN identity (packed BCD MCC + MNC).
///
/// Layout, low nibble first: `MCC1 MCC2 | MCC3 MNC3 | MNC1 MNC2`. An MNC3
/// nibble of `0xF` is filler and marks a two-digit MNC; otherwise the MNC
/// reads MNC1 MNC2 MNC3.
pub fn decode_plmn(raw: &[u8]) -> Option<DecodedValue> {
    let [b0, b1, b2, ..] = raw else {
        return None;
    };

    let mcc = format!("{}{}{}", b0 & 0x0F, b0 >> 4, b1 & 0x0F);
    let mnc3 = b1 >> 4;
    let mnc = if mnc3 == 0x0F {
        format!("{}{}", b2 & 0x0F, b2 >> 4)
    } else {
        format!("{}{}{}", b2 & 0x0F, b2 >> 4, mnc3)
    };

    Some(DecodedValue::Plmn(Plmn {
        mcc,
        mnc,
        hex: hex_string(raw),
    }))
}

#[cfg(test)]
mod tests {
    use super::{DecoderRegistry, decode_plmn};
    use crate::{DecodedValue, Plmn};

    fn plmn(mcc: &str, mnc: &str, hex: &str) -> Option<DecodedValue> {
        Some(DecodedValue::Plmn(Plmn {
            mcc: mcc.to_string(),
            mnc: mnc.to_string(),
            hex: hex.to_string(),
        }))
    }

    #[test]
    fn two_digit_mnc_with_filler() {
        assert_eq!(decode_plmn(&[0x21, 0xF3, 0x54]), plmn("123", "45", "21f354"));
    }

    #[test]
    fn three_digit_mnc() {
        assert_eq!(decode_plmn(&[0x21, 0x43, 0x65]), plmn("123", "564", "214365"));
    }

    #[test]
    fn real_world_plmn() {
        // MCC 310, MNC 410
        assert_eq!(decode_plmn(&[0x13, 0x00, 0x14]), plmn("310", "410", "130014"));
        // MCC 208, MNC 01
        assert_eq!(decode_plmn(&[0x02, 0xF8, 0x10]), plmn("208", "01", "02f810"));
    }

    #[test]
    fn extra_bytes_are_kept_in_hex() {
        assert_eq!(
            decode_plmn(&[0x21, 0xF3, 0x54, 0x00]),
            plmn("123", "45", "21f35400")
        );
    }

    #[test]
    fn short_input_is_not_applicable() {
        assert_eq!(decode_plmn(&[0x21, 0x43]), None);
        assert_eq!(decode_plmn(&[]), None);
    }

    #[test]
    fn default_registry_triggers_on_visited_plmn_id() {
        let registry = DecoderRegistry::default();
        assert!(registry.decode("Visited-PLMN-Id", &[0x21, 0x43, 0xF5]).is_some());
        assert!(registry.decode("Origin-Host", &[0x21, 0x43, 0xF5]).is_none());
        assert!(DecoderRegistry::empty()
            .decode("Visited-PLMN-Id", &[0x21, 0x43, 0xF5])
            .is_none());
    }

    #[test]
    fn registry_accepts_new_decoders() {
        fn length_decoder(raw: &[u8]) -> Option<DecodedValue> {
            Some(DecodedValue::Plmn(Plmn {
                mcc: raw.len().to_string(),
                mnc: String::new(),
                hex: String::new(),
            }))
        }

        let mut registry = DecoderRegistry::default();
        registry.register("Equivalent-PLMN", length_decoder);
        assert_eq!(
            registry.decode("Equivalent-PLMN", &[1, 2]),
            Some(DecodedValue::Plmn(Plmn {
                mcc: "2".to_string(),
                mnc: String::new(),
                hex: String::new(),
            }))
        );
    }
}
