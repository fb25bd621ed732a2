use etherparse::{IpNumber, SlicedPacket, TransportSlice};
use pcap_parser::Linktype;

use super::error::TransportError;
use super::reader::TransportReader;

/// Application payloads carried by one frame.
///
/// UDP and TCP always carry exactly one payload; SCTP carries one per DATA
/// chunk and may carry none.
#[derive(Debug)]
pub struct TransportSegment<'a> {
    pub payloads: Vec<&'a [u8]>,
}

/// Parse the transport segment of a link-layer frame.
///
/// Returns `Ok(None)` for link types or transports that carry no
/// application payload of interest.
pub fn parse_transport_segment(
    linktype: Linktype,
    data: &[u8],
) -> Result<Option<TransportSegment<'_>>, TransportError> {
    let sliced = match linktype {
        Linktype::ETHERNET => {
            SlicedPacket::from_ethernet(data).map_err(|e| TransportError::Slice(e.to_string()))?
        }
        Linktype::RAW | Linktype::IPV4 | Linktype::IPV6 => {
            SlicedPacket::from_ip(data).map_err(|e| TransportError::Slice(e.to_string()))?
        }
        _ => return Ok(None),
    };

    let net = sliced.net.ok_or(TransportError::MissingNetworkLayer)?;
    let ip_payload = net.ip_payload_ref().ok_or(TransportError::MissingIpPayload)?;
    let reader = TransportReader::new(ip_payload.payload);

    let payloads = match sliced.transport {
        Some(TransportSlice::Udp(_)) => vec![reader.udp_payload()?],
        Some(TransportSlice::Tcp(_)) => vec![reader.tcp_payload()?],
        Some(_) => return Ok(None),
        None if ip_payload.ip_number == IpNumber::SCTP && !ip_payload.fragmented => {
            reader.sctp_data_chunks()?
        }
        None => return Ok(None),
    };

    Ok(Some(TransportSegment { payloads }))
}
