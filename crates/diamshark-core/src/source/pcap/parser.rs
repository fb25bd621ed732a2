use std::fs::File;
use std::path::Path;

use pcap_parser::{
    Block, LegacyPcapReader, Linktype, PcapBlockOwned, PcapError, PcapNGReader,
    traits::PcapReaderIterator,
};

use crate::source::{PacketEvent, PacketSource, SourceError};

use super::error::PcapSourceError;
use super::layout;
use super::reader::{
    is_pcapng_magic, legacy_ts_to_seconds, linktype_for_interface, pcapng_ts_to_seconds,
    read_magic_and_rewind,
};

/// Capture file reader yielding one `PacketEvent` per captured frame.
///
/// Legacy PCAP and PCAPNG are both accepted; the format is chosen from the
/// file magic, never from the extension.
pub struct PcapFileSource {
    inner: CaptureReader,
}

enum CaptureReader {
    Legacy {
        reader: LegacyPcapReader<File>,
        linktype: Option<Linktype>,
    },
    Ng {
        reader: PcapNGReader<File>,
        linktypes: Vec<Linktype>,
    },
}

impl PcapFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        let inner = create_reader(file)?;
        Ok(Self { inner })
    }
}

impl PacketSource for PcapFileSource {
    fn next_packet(&mut self) -> Result<Option<PacketEvent>, SourceError> {
        next_packet(&mut self.inner).map_err(SourceError::from)
    }
}

fn create_reader(mut file: File) -> Result<CaptureReader, PcapSourceError> {
    let magic = read_magic_and_rewind(&mut file)?;

    if is_pcapng_magic(&magic) {
        let reader = PcapNGReader::new(layout::PCAP_READER_BUFFER_SIZE, file)
            .map_err(|e| pcap_error("pcapng reader init", e))?;
        Ok(CaptureReader::Ng {
            reader,
            linktypes: Vec::new(),
        })
    } else {
        let reader = LegacyPcapReader::new(layout::PCAP_READER_BUFFER_SIZE, file)
            .map_err(|e| pcap_error("pcap reader init", e))?;
        Ok(CaptureReader::Legacy {
            reader,
            linktype: None,
        })
    }
}

fn next_packet(reader: &mut CaptureReader) -> Result<Option<PacketEvent>, PcapSourceError> {
    loop {
        match reader {
            CaptureReader::Legacy { reader, linktype } => match reader.next() {
                Ok((offset, block)) => {
                    let event = match block {
                        PcapBlockOwned::LegacyHeader(header) => {
                            *linktype = Some(header.network);
                            None
                        }
                        PcapBlockOwned::Legacy(packet) => Some(PacketEvent {
                            ts: Some(legacy_ts_to_seconds(packet.ts_sec, packet.ts_usec)),
                            linktype: linktype.unwrap_or(Linktype::ETHERNET),
                            data: packet.data.to_vec(),
                        }),
                        _ => None,
                    };
                    reader.consume(offset);
                    if event.is_some() {
                        return Ok(event);
                    }
                }
                Err(PcapError::Eof) => return Ok(None),
                Err(PcapError::Incomplete(_)) => {
                    reader
                        .refill()
                        .map_err(|e| pcap_error("pcap reader refill", e))?;
                }
                Err(e) => return Err(pcap_error("pcap reader next", e)),
            },
            CaptureReader::Ng { reader, linktypes } => match reader.next() {
                Ok((offset, block)) => {
                    let event = match block {
                        PcapBlockOwned::NG(Block::SectionHeader(_)) => {
                            // Interface ids restart with every section.
                            linktypes.clear();
                            None
                        }
                        PcapBlockOwned::NG(Block::InterfaceDescription(intf)) => {
                            linktypes.push(intf.linktype);
                            None
                        }
                        PcapBlockOwned::NG(Block::EnhancedPacket(packet)) => Some(PacketEvent {
                            ts: Some(pcapng_ts_to_seconds(packet.ts_high, packet.ts_low)),
                            linktype: linktype_for_interface(linktypes, packet.if_id),
                            data: packet.data.to_vec(),
                        }),
                        PcapBlockOwned::NG(Block::SimplePacket(packet)) => Some(PacketEvent {
                            ts: None,
                            linktype: linktype_for_interface(linktypes, 0),
                            data: packet.data.to_vec(),
                        }),
                        _ => None,
                    };
                    reader.consume(offset);
                    if event.is_some() {
                        return Ok(event);
                    }
                }
                Err(PcapError::Eof) => return Ok(None),
                Err(PcapError::Incomplete(_)) => {
                    reader
                        .refill()
                        .map_err(|e| pcap_error("pcapng reader refill", e))?;
                }
                Err(e) => return Err(pcap_error("pcapng reader next", e)),
            },
        }
    }
}

fn pcap_error<E: std::fmt::Display>(context: &'static str, err: E) -> PcapSourceError {
    PcapSourceError::Pcap {
        context,
        message: err.to_string(),
    }
}
