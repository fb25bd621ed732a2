use std::io::{Read, Seek, SeekFrom};

use pcap_parser::Linktype;

use super::error::PcapSourceError;
use super::layout;

/// Read the magic bytes and rewind the reader to the start.
///
/// # Errors
/// Returns `PcapSourceError::Io` when fewer than four bytes are available
/// or the reader cannot be rewound.
pub fn read_magic_and_rewind<R: Read + Seek>(reader: &mut R) -> Result<[u8; 4], PcapSourceError> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    reader.seek(SeekFrom::Start(0))?;
    Ok(magic)
}

pub fn is_pcapng_magic(magic: &[u8; 4]) -> bool {
    magic == &layout::PCAPNG_MAGIC
}

/// Resolve the linktype for a PCAPNG interface id, defaulting to Ethernet.
pub fn linktype_for_interface(linktypes: &[Linktype], if_id: u32) -> Linktype {
    linktypes
        .get(if_id as usize)
        .copied()
        .unwrap_or(Linktype::ETHERNET)
}

/// Convert a PCAPNG high/low timestamp (microsecond resolution) to seconds.
pub fn pcapng_ts_to_seconds(ts_high: u32, ts_low: u32) -> f64 {
    let ts = ((ts_high as u64) << 32) | (ts_low as u64);
    ts as f64 * 1e-6
}

pub fn legacy_ts_to_seconds(ts_sec: u32, ts_usec: u32) -> f64 {
    ts_sec as f64 + (ts_usec as f64 * 1e-6)
}
