use super::error::TransportError;
use super::layout;

/// Bounds-checked access to an IP payload (the transport header included).
pub struct TransportReader<'a> {
    payload: &'a [u8],
}

impl<'a> TransportReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), TransportError> {
        if self.payload.len() < needed {
            return Err(TransportError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, TransportError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(TransportError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Result<u16, TransportError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(TransportError::TooShort {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], TransportError> {
        self.payload
            .get(range.clone())
            .ok_or(TransportError::TooShort {
                needed: range.end,
                actual: self.payload.len(),
            })
    }

    pub fn udp_payload(&self) -> Result<&'a [u8], TransportError> {
        self.require_len(layout::UDP_HEADER_LEN)?;
        self.read_slice(layout::UDP_HEADER_LEN..self.payload.len())
    }

    pub fn tcp_payload(&self) -> Result<&'a [u8], TransportError> {
        self.require_len(layout::TCP_MIN_HEADER_LEN)?;
        let offset = ((self.read_u8(layout::TCP_DATA_OFFSET_INDEX)? >> 4) as usize) * 4;
        if offset < layout::TCP_MIN_HEADER_LEN {
            return Err(TransportError::InvalidTcpDataOffset { offset });
        }
        self.require_len(offset)?;
        self.read_slice(offset..self.payload.len())
    }

    /// User data of every DATA chunk, in packet order.
    ///
    /// Chunks are walked by their declared length rounded up to four bytes;
    /// the final chunk may omit its padding.
    pub fn sctp_data_chunks(&self) -> Result<Vec<&'a [u8]>, TransportError> {
        self.require_len(layout::SCTP_COMMON_HEADER_LEN)?;
        let mut chunks = Vec::new();
        let mut offset = layout::SCTP_COMMON_HEADER_LEN;

        while offset + layout::SCTP_CHUNK_HEADER_LEN <= self.payload.len() {
            let chunk_type = self.read_u8(offset + layout::SCTP_CHUNK_TYPE_OFFSET)?;
            let length = self.read_u16_be(
                offset + layout::SCTP_CHUNK_LENGTH_RANGE.start
                    ..offset + layout::SCTP_CHUNK_LENGTH_RANGE.end,
            )?;
            let chunk_len = length as usize;
            if chunk_len < layout::SCTP_CHUNK_HEADER_LEN {
                return Err(TransportError::InvalidChunkLength { length });
            }
            let end = offset + chunk_len;
            self.require_len(end)?;

            if chunk_type == layout::SCTP_CHUNK_TYPE_DATA {
                if chunk_len < layout::SCTP_DATA_CHUNK_HEADER_LEN {
                    return Err(TransportError::InvalidChunkLength { length });
                }
                let data = self.read_slice(offset + layout::SCTP_DATA_CHUNK_HEADER_LEN..end)?;
                chunks.push(data);
            }

            offset = end.next_multiple_of(4).min(self.payload.len());
        }

        Ok(chunks)
    }
}
