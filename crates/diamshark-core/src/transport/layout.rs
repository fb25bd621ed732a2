pub const UDP_HEADER_LEN: usize = 8;

pub const TCP_MIN_HEADER_LEN: usize = 20;
pub const TCP_DATA_OFFSET_INDEX: usize = 12;

pub const SCTP_COMMON_HEADER_LEN: usize = 12;

pub const SCTP_CHUNK_HEADER_LEN: usize = 4;
pub const SCTP_CHUNK_TYPE_OFFSET: usize = 0;
pub const SCTP_CHUNK_LENGTH_RANGE: std::ops::Range<usize> = 2..4;
pub const SCTP_CHUNK_TYPE_DATA: u8 = 0;
/// Chunk header plus TSN, stream id, stream sequence and PPID.
pub const SCTP_DATA_CHUNK_HEADER_LEN: usize = 16;
