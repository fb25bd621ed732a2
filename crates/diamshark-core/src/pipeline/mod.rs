//! Decode driver: payloads in, JSON records out.
//!
//! A payload that fails to parse as Diameter produces no record and does
//! not stop the run; it is logged at `trace` and counted. Only source,
//! dictionary and output failures abort.

mod decoder;
mod writer;

pub use decoder::MessageDecoder;
pub use writer::{OutputFormat, RecordWriter};

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::dictionary::Dictionary;
use crate::source::{PayloadEvent, PayloadSource, PcapFileSource, SourceError};
use crate::transport::PayloadStream;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Counters for one decode run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodeSummary {
    /// Frames read from the capture (0 when decoding bare payloads).
    pub packets_total: u64,
    pub payloads_total: u64,
    pub records_written: u64,
    /// Payloads that did not parse as Diameter.
    pub skipped_payloads: u64,
    /// Frames whose link/network/transport layers could not be sliced.
    pub undecodable_frames: u64,
    pub serialize_failures: u64,
}

/// Decode every payload of `source` and write one record per message.
pub fn decode_payloads<P, D, W>(
    source: &mut P,
    decoder: &MessageDecoder<D>,
    writer: &mut RecordWriter<W>,
) -> Result<DecodeSummary, PipelineError>
where
    P: PayloadSource,
    D: Dictionary,
    W: Write,
{
    let mut summary = DecodeSummary::default();

    while let Some(PayloadEvent { ts, payload }) = source.next_payload()? {
        summary.payloads_total += 1;
        match decoder.decode_payload(&payload) {
            Ok(record) => {
                if writer.write(&record)? {
                    summary.records_written += 1;
                } else {
                    summary.serialize_failures += 1;
                }
            }
            Err(err) => {
                summary.skipped_payloads += 1;
                trace!(?ts, len = payload.len(), error = %err, "skipping non-Diameter payload");
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}

/// Decode a PCAP/PCAPNG capture file.
pub fn decode_pcap_file<D, W>(
    path: &Path,
    decoder: &MessageDecoder<D>,
    writer: &mut RecordWriter<W>,
) -> Result<DecodeSummary, PipelineError>
where
    D: Dictionary,
    W: Write,
{
    let mut payloads = PayloadStream::new(PcapFileSource::open(path)?);
    let mut summary = decode_payloads(&mut payloads, decoder, writer)?;
    summary.packets_total = payloads.packets_seen();
    summary.undecodable_frames = payloads.undecodable_frames();

    debug!(
        path = %path.display(),
        packets = summary.packets_total,
        payloads = summary.payloads_total,
        records = summary.records_written,
        skipped = summary.skipped_payloads,
        undecodable = summary.undecodable_frames,
        serialize_failures = summary.serialize_failures,
        "decode finished"
    );
    Ok(summary)
}
