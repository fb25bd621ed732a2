use crate::dictionary::{Dictionary, resolve_definition};

use super::error::DiameterError;
use super::layout;
use super::reader::DiameterReader;
use super::value::{AvpValue, decode_value};

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub version: u8,
    pub message_length: u32,
    pub command_flags: u8,
    pub command_code: u32,
    pub application_id: u32,
    pub hop_by_hop_id: u32,
    pub end_to_end_id: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Avp {
    pub code: u32,
    pub flags: u8,
    /// Vendor id from the AVP header; 0 when the V bit is clear.
    pub vendor_id: u32,
    pub value: AvpValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub header: Header,
    pub avps: Vec<Avp>,
}

/// Parse one Diameter message from the start of `payload`.
///
/// Bytes past the length declared in the header are ignored. AVP types are
/// taken from `dictionary` in the scope of the message's application.
pub fn parse_message(payload: &[u8], dictionary: &dyn Dictionary) -> Result<Message, DiameterError> {
    let header = parse_header(payload)?;
    let body = DiameterReader::new(payload)
        .read_slice(layout::HEADER_LEN..header.message_length as usize)?;
    let avps = parse_avps(body, header.application_id, dictionary)?;
    Ok(Message { header, avps })
}

/// Decode the child AVPs carried by a grouped AVP.
pub fn decode_grouped(
    raw: &[u8],
    application_id: u32,
    dictionary: &dyn Dictionary,
) -> Result<Vec<Avp>, DiameterError> {
    parse_avps(raw, application_id, dictionary)
}

fn parse_header(payload: &[u8]) -> Result<Header, DiameterError> {
    let reader = DiameterReader::new(payload);
    reader.require_len(layout::HEADER_LEN)?;

    let version = reader.read_u8(layout::VERSION_OFFSET)?;
    if version != layout::DIAMETER_VERSION {
        return Err(DiameterError::UnsupportedVersion { version });
    }

    let message_length = reader.read_u24_be(layout::MESSAGE_LENGTH_RANGE)?;
    if (message_length as usize) < layout::HEADER_LEN {
        return Err(DiameterError::InvalidMessageLength {
            length: message_length,
        });
    }
    reader.require_len(message_length as usize)?;

    Ok(Header {
        version,
        message_length,
        command_flags: reader.read_u8(layout::COMMAND_FLAGS_OFFSET)?,
        command_code: reader.read_u24_be(layout::COMMAND_CODE_RANGE)?,
        application_id: reader.read_u32_be(layout::APPLICATION_ID_RANGE)?,
        hop_by_hop_id: reader.read_u32_be(layout::HOP_BY_HOP_ID_RANGE)?,
        end_to_end_id: reader.read_u32_be(layout::END_TO_END_ID_RANGE)?,
    })
}

fn parse_avps(
    bytes: &[u8],
    application_id: u32,
    dictionary: &dyn Dictionary,
) -> Result<Vec<Avp>, DiameterError> {
    let reader = DiameterReader::new(bytes);
    let mut avps = Vec::new();
    let mut offset = 0;

    while offset < reader.len() {
        reader.require_len(offset + layout::AVP_HEADER_LEN)?;
        let code = reader.read_u32_be(
            offset + layout::AVP_CODE_RANGE.start..offset + layout::AVP_CODE_RANGE.end,
        )?;
        let flags = reader.read_u8(offset + layout::AVP_FLAGS_OFFSET)?;
        let length = reader.read_u24_be(
            offset + layout::AVP_LENGTH_RANGE.start..offset + layout::AVP_LENGTH_RANGE.end,
        )?;

        let (vendor_id, header_len) = if flags & layout::AVP_FLAG_VENDOR != 0 {
            let vendor_id = reader.read_u32_be(
                offset + layout::AVP_VENDOR_ID_RANGE.start..offset + layout::AVP_VENDOR_ID_RANGE.end,
            )?;
            (vendor_id, layout::AVP_VENDOR_HEADER_LEN)
        } else {
            (0, layout::AVP_HEADER_LEN)
        };

        if (length as usize) < header_len {
            return Err(DiameterError::InvalidAvpLength { code, length });
        }
        let end = offset + length as usize;
        if end > reader.len() {
            return Err(DiameterError::AvpOverrun {
                code,
                end,
                available: reader.len(),
            });
        }

        let data = reader.read_slice(offset + header_len..end)?;
        let data_type = resolve_definition(dictionary, application_id, code, vendor_id)
            .map(|def| def.data_type);
        avps.push(Avp {
            code,
            flags,
            vendor_id,
            value: decode_value(code, data_type, data)?,
        });

        // The last AVP may arrive without its trailing padding.
        offset = end.next_multiple_of(layout::AVP_ALIGNMENT).min(reader.len());
    }

    Ok(avps)
}
