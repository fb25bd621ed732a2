#![allow(dead_code)]

use std::fs;
use std::path::Path;

use etherparse::{IpNumber, PacketBuilder};

pub const DIAMETER_PORT: u16 = 3868;
pub const S6A: u32 = 16777251;
pub const VENDOR_3GPP: u32 = 10415;

pub fn avp(code: u32, vendor_id: Option<u32>, data: &[u8]) -> Vec<u8> {
    let header_len = if vendor_id.is_some() { 12 } else { 8 };
    let length = (header_len + data.len()) as u32;
    let mut out = code.to_be_bytes().to_vec();
    out.push(if vendor_id.is_some() { 0xC0 } else { 0x40 });
    out.extend_from_slice(&length.to_be_bytes()[1..]);
    if let Some(vendor_id) = vendor_id {
        out.extend_from_slice(&vendor_id.to_be_bytes());
    }
    out.extend_from_slice(data);
    while out.len() % 4 != 0 {
        out.push(0);
    }
    out
}

pub fn message(
    command_code: u32,
    flags: u8,
    application_id: u32,
    hop_by_hop_id: u32,
    avps: &[Vec<u8>],
) -> Vec<u8> {
    let body = avps.concat();
    let length = (20 + body.len()) as u32;
    let mut out = vec![1];
    out.extend_from_slice(&length.to_be_bytes()[1..]);
    out.push(flags);
    out.extend_from_slice(&command_code.to_be_bytes()[1..]);
    out.extend_from_slice(&application_id.to_be_bytes());
    out.extend_from_slice(&hop_by_hop_id.to_be_bytes());
    out.extend_from_slice(&0xABCD_0000u32.to_be_bytes());
    out.extend_from_slice(&body);
    out
}

pub fn udp_frame(payload: &[u8]) -> Vec<u8> {
    let builder = PacketBuilder::ethernet2([1, 2, 3, 4, 5, 6], [6, 5, 4, 3, 2, 1])
        .ipv4([10, 0, 0, 1], [10, 0, 0, 2], 64)
        .udp(40000, DIAMETER_PORT);
    let mut frame = Vec::with_capacity(builder.size(payload.len()));
    builder.write(&mut frame, payload).unwrap();
    frame
}

pub fn tcp_frame(payload: &[u8]) -> Vec<u8> {
    let builder = PacketBuilder::ethernet2([1, 2, 3, 4, 5, 6], [6, 5, 4, 3, 2, 1])
        .ipv6([0x20; 16], [0x30; 16], 64)
        .tcp(40001, DIAMETER_PORT, 1000, 65535);
    let mut frame = Vec::with_capacity(builder.size(payload.len()));
    builder.write(&mut frame, payload).unwrap();
    frame
}

/// Ethernet/IPv4/SCTP frame with one DATA chunk per payload.
pub fn sctp_frame(payloads: &[&[u8]]) -> Vec<u8> {
    let mut sctp = Vec::new();
    sctp.extend_from_slice(&DIAMETER_PORT.to_be_bytes());
    sctp.extend_from_slice(&DIAMETER_PORT.to_be_bytes());
    sctp.extend_from_slice(&0x0102_0304u32.to_be_bytes());
    sctp.extend_from_slice(&0u32.to_be_bytes());
    for (tsn, payload) in payloads.iter().enumerate() {
        let length = (16 + payload.len()) as u16;
        sctp.extend_from_slice(&[0, 0x03]);
        sctp.extend_from_slice(&length.to_be_bytes());
        sctp.extend_from_slice(&(tsn as u32).to_be_bytes());
        sctp.extend_from_slice(&0u16.to_be_bytes());
        sctp.extend_from_slice(&(tsn as u16).to_be_bytes());
        sctp.extend_from_slice(&46u32.to_be_bytes());
        sctp.extend_from_slice(payload);
        while sctp.len() % 4 != 0 {
            sctp.push(0);
        }
    }

    let builder = PacketBuilder::ethernet2([1, 2, 3, 4, 5, 6], [6, 5, 4, 3, 2, 1])
        .ipv4([10, 0, 0, 1], [10, 0, 0, 2], 64);
    let mut frame = Vec::with_capacity(builder.size(sctp.len()));
    builder.write(&mut frame, IpNumber::SCTP, &sctp).unwrap();
    frame
}

/// Little-endian legacy PCAP with an Ethernet link type.
pub fn write_pcap(path: &Path, frames: &[Vec<u8>]) {
    let mut out = Vec::new();
    out.extend_from_slice(&0xA1B2_C3D4u32.to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&4u16.to_le_bytes());
    out.extend_from_slice(&0i32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&65535u32.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());
    for (index, frame) in frames.iter().enumerate() {
        out.extend_from_slice(&(1_700_000_000u32 + index as u32).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&(frame.len() as u32).to_le_bytes());
        out.extend_from_slice(&(frame.len() as u32).to_le_bytes());
        out.extend_from_slice(frame);
    }
    fs::write(path, out).unwrap();
}

/// Big-endian PCAPNG: one section, one Ethernet interface.
pub fn write_pcapng(path: &Path, frames: &[Vec<u8>]) {
    let mut out = Vec::new();
    out.extend_from_slice(&pcapng_block(0x0A0D_0D0A, &section_header_body()));
    out.extend_from_slice(&pcapng_block(1, &interface_desc_body()));
    for (index, frame) in frames.iter().enumerate() {
        let ts_us = 1_700_000_000_000_000u64 + index as u64;
        out.extend_from_slice(&pcapng_block(6, &enhanced_packet_body(ts_us, frame)));
    }
    fs::write(path, out).unwrap();
}

fn pcapng_block(block_type: u32, body: &[u8]) -> Vec<u8> {
    let total_len = (8 + body.len() + 4) as u32;
    let mut block = Vec::with_capacity(total_len as usize);
    block.extend_from_slice(&block_type.to_be_bytes());
    block.extend_from_slice(&total_len.to_be_bytes());
    block.extend_from_slice(body);
    block.extend_from_slice(&total_len.to_be_bytes());
    block
}

fn section_header_body() -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&0x1A2B_3C4Du32.to_be_bytes());
    body.extend_from_slice(&1u16.to_be_bytes());
    body.extend_from_slice(&0u16.to_be_bytes());
    body.extend_from_slice(&(-1i64).to_be_bytes());
    body
}

fn interface_desc_body() -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&1u16.to_be_bytes());
    body.extend_from_slice(&0u16.to_be_bytes());
    body.extend_from_slice(&65535u32.to_be_bytes());
    body
}

fn enhanced_packet_body(ts_us: u64, data: &[u8]) -> Vec<u8> {
    let cap_len = data.len() as u32;
    let mut body = Vec::new();
    body.extend_from_slice(&0u32.to_be_bytes());
    body.extend_from_slice(&((ts_us >> 32) as u32).to_be_bytes());
    body.extend_from_slice(&(ts_us as u32).to_be_bytes());
    body.extend_from_slice(&cap_len.to_be_bytes());
    body.extend_from_slice(&cap_len.to_be_bytes());
    body.extend_from_slice(data);
    body.resize(body.len() + (4 - data.len() % 4) % 4, 0);
    body
}

/// Update-Location-Request carrying a Visited-PLMN-Id and a grouped
/// Vendor-Specific-Application-Id.
pub fn ulr(hop_by_hop_id: u32) -> Vec<u8> {
    let vsai = [
        avp(266, None, &VENDOR_3GPP.to_be_bytes()),
        avp(258, None, &S6A.to_be_bytes()),
    ]
    .concat();
    message(
        316,
        0xC0,
        S6A,
        hop_by_hop_id,
        &[
            avp(263, None, b"mme.example.net;1;42"),
            avp(264, None, b"mme.example.net"),
            avp(260, None, &vsai),
            avp(1407, Some(VENDOR_3GPP), &[0x13, 0x00, 0x14]),
            avp(1405, Some(VENDOR_3GPP), &34u32.to_be_bytes()),
        ],
    )
}
