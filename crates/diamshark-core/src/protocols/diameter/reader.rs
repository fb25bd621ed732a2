use super::error::DiameterError;

pub struct DiameterReader<'a> {
    payload: &'a [u8],
}

impl<'a> DiameterReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DiameterError> {
        if self.payload.len() < needed {
            return Err(DiameterError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DiameterError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(DiameterError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    /// Read the 24-bit big-endian integers used for lengths and command codes.
    pub fn read_u24_be(&self, range: std::ops::Range<usize>) -> Result<u32, DiameterError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 3 {
            return Err(DiameterError::TooShort {
                needed: 3,
                actual: bytes.len(),
            });
        }
        Ok(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }

    pub fn read_u32_be(&self, range: std::ops::Range<usize>) -> Result<u32, DiameterError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 4 {
            return Err(DiameterError::TooShort {
                needed: 4,
                actual: bytes.len(),
            });
        }
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], DiameterError> {
        self.payload
            .get(range.clone())
            .ok_or(DiameterError::TooShort {
                needed: range.end,
                actual: self.payload.len(),
            })
    }
}
