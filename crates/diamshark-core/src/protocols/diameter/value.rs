use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::dictionary::DataType;

use super::error::DiameterError;
use super::layout;

/// Raw AVP value, tagged with the kind the dictionary assigned to it.
///
/// The tag travels from the codec to the enricher so that no later stage
/// has to guess the type from the bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum AvpValue {
    Utf8String(String),
    DiameterIdentity(String),
    DiameterUri(String),
    OctetString(Vec<u8>),
    Address(AddressValue),
    Integer32(i32),
    Unsigned32(u32),
    Integer64(i64),
    Unsigned64(u64),
    Float32(f32),
    Float64(f64),
    Enumerated(i32),
    /// Seconds since 1900-01-01T00:00:00Z, as carried on the wire.
    Time(u32),
    IpFilterRule(String),
    QosFilterRule(String),
    /// Encoded child AVPs; expanded on demand with `decode_grouped`.
    Grouped(Vec<u8>),
    /// AVP with no dictionary definition.
    Unknown(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressValue {
    Ip(IpAddr),
    Other { family: u16, address: Vec<u8> },
}

/// Decode AVP data according to its dictionary type (`None` = unknown AVP).
pub fn decode_value(
    code: u32,
    data_type: Option<DataType>,
    data: &[u8],
) -> Result<AvpValue, DiameterError> {
    let Some(data_type) = data_type else {
        return Ok(AvpValue::Unknown(data.to_vec()));
    };

    let value = match data_type {
        DataType::OctetString => AvpValue::OctetString(data.to_vec()),
        DataType::Utf8String => AvpValue::Utf8String(lossy(data)),
        DataType::DiameterIdentity => AvpValue::DiameterIdentity(lossy(data)),
        DataType::DiameterUri => AvpValue::DiameterUri(lossy(data)),
        DataType::IpFilterRule => AvpValue::IpFilterRule(lossy(data)),
        DataType::QosFilterRule => AvpValue::QosFilterRule(lossy(data)),
        DataType::Integer32 => AvpValue::Integer32(i32::from_be_bytes(fixed(code, "Integer32", data)?)),
        DataType::Unsigned32 => {
            AvpValue::Unsigned32(u32::from_be_bytes(fixed(code, "Unsigned32", data)?))
        }
        DataType::Integer64 => AvpValue::Integer64(i64::from_be_bytes(fixed(code, "Integer64", data)?)),
        DataType::Unsigned64 => {
            AvpValue::Unsigned64(u64::from_be_bytes(fixed(code, "Unsigned64", data)?))
        }
        DataType::Float32 => AvpValue::Float32(f32::from_be_bytes(fixed(code, "Float32", data)?)),
        DataType::Float64 => AvpValue::Float64(f64::from_be_bytes(fixed(code, "Float64", data)?)),
        DataType::Enumerated => {
            AvpValue::Enumerated(i32::from_be_bytes(fixed(code, "Enumerated", data)?))
        }
        DataType::Time => AvpValue::Time(u32::from_be_bytes(fixed(code, "Time", data)?)),
        DataType::Address => AvpValue::Address(decode_address(code, data)?),
        DataType::Grouped => AvpValue::Grouped(data.to_vec()),
    };
    Ok(value)
}

fn fixed<const N: usize>(
    code: u32,
    kind: &'static str,
    data: &[u8],
) -> Result<[u8; N], DiameterError> {
    data.try_into().map_err(|_| DiameterError::InvalidAvpData {
        code,
        kind,
        len: data.len(),
    })
}

fn decode_address(code: u32, data: &[u8]) -> Result<AddressValue, DiameterError> {
    if data.len() < layout::ADDRESS_FAMILY_LEN {
        return Err(DiameterError::InvalidAvpData {
            code,
            kind: "Address",
            len: data.len(),
        });
    }
    let family = u16::from_be_bytes([data[0], data[1]]);
    let address = &data[layout::ADDRESS_FAMILY_LEN..];

    let ip = match family {
        layout::ADDRESS_FAMILY_IPV4 => <[u8; 4]>::try_from(address)
            .ok()
            .map(|octets| IpAddr::V4(Ipv4Addr::from(octets))),
        layout::ADDRESS_FAMILY_IPV6 => <[u8; 16]>::try_from(address)
            .ok()
            .map(|octets| IpAddr::V6(Ipv6Addr::from(octets))),
        _ => None,
    };

    Ok(match ip {
        Some(ip) => AddressValue::Ip(ip),
        None => AddressValue::Other {
            family,
            address: address.to_vec(),
        },
    })
}

fn lossy(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use super::{AddressValue, AvpValue, decode_value};
    use crate::dictionary::DataType;
    use crate::protocols::diameter::error::DiameterError;

    #[test]
    fn decodes_fixed_width_integers() {
        let value = decode_value(268, Some(DataType::Unsigned32), &2001u32.to_be_bytes()).unwrap();
        assert_eq!(value, AvpValue::Unsigned32(2001));

        let value = decode_value(447, Some(DataType::Integer64), &(-5i64).to_be_bytes()).unwrap();
        assert_eq!(value, AvpValue::Integer64(-5));
    }

    #[test]
    fn wrong_width_is_invalid() {
        let err = decode_value(268, Some(DataType::Unsigned32), &[0, 1]).unwrap_err();
        assert!(matches!(
            err,
            DiameterError::InvalidAvpData {
                code: 268,
                kind: "Unsigned32",
                len: 2
            }
        ));
    }

    #[test]
    fn unknown_type_keeps_bytes() {
        let value = decode_value(9999, None, &[1, 2, 3]).unwrap();
        assert_eq!(value, AvpValue::Unknown(vec![1, 2, 3]));
    }

    #[test]
    fn decodes_addresses() {
        let value = decode_value(257, Some(DataType::Address), &[0, 1, 10, 0, 0, 7]).unwrap();
        assert_eq!(
            value,
            AvpValue::Address(AddressValue::Ip(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7))))
        );

        let value = decode_value(257, Some(DataType::Address), &[0, 8, 0xab]).unwrap();
        assert_eq!(
            value,
            AvpValue::Address(AddressValue::Other {
                family: 8,
                address: vec![0xab],
            })
        );

        assert!(decode_value(257, Some(DataType::Address), &[0]).is_err());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let value = decode_value(1, Some(DataType::Utf8String), &[b'a', 0xff]).unwrap();
        assert_eq!(value, AvpValue::Utf8String("a\u{fffd}".to_string()));
    }
}
