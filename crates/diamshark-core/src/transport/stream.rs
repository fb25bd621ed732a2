use std::collections::VecDeque;

use tracing::trace;

use crate::source::{PacketEvent, PacketSource, PayloadEvent, PayloadSource, SourceError};

use super::parse_transport_segment;

/// Adapts a `PacketSource` into a `PayloadSource`.
///
/// Frames that cannot be sliced are dropped and counted; frames carrying
/// several SCTP DATA chunks are buffered and handed out one chunk at a time.
pub struct PayloadStream<S> {
    packets: S,
    pending: VecDeque<PayloadEvent>,
    packets_seen: u64,
    undecodable_frames: u64,
}

impl<S: PacketSource> PayloadStream<S> {
    pub fn new(packets: S) -> Self {
        Self {
            packets,
            pending: VecDeque::new(),
            packets_seen: 0,
            undecodable_frames: 0,
        }
    }

    pub fn packets_seen(&self) -> u64 {
        self.packets_seen
    }

    pub fn undecodable_frames(&self) -> u64 {
        self.undecodable_frames
    }

    fn enqueue(&mut self, event: PacketEvent) {
        match parse_transport_segment(event.linktype, &event.data) {
            Ok(Some(segment)) => {
                for payload in segment.payloads {
                    if payload.is_empty() {
                        continue;
                    }
                    self.pending.push_back(PayloadEvent {
                        ts: event.ts,
                        payload: payload.to_vec(),
                    });
                }
            }
            Ok(None) => {}
            Err(err) => {
                self.undecodable_frames += 1;
                trace!(error = %err, "skipping undecodable frame");
            }
        }
    }
}

impl<S: PacketSource> PayloadSource for PayloadStream<S> {
    fn next_payload(&mut self) -> Result<Option<PayloadEvent>, SourceError> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }
            match self.packets.next_packet()? {
                Some(event) => {
                    self.packets_seen += 1;
                    self.enqueue(event);
                }
                None => return Ok(None),
            }
        }
    }
}
