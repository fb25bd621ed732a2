pub const HEADER_LEN: usize = 20;
pub const VERSION_OFFSET: usize = 0;
pub const MESSAGE_LENGTH_RANGE: std::ops::Range<usize> = 1..4;
pub const COMMAND_FLAGS_OFFSET: usize = 4;
pub const COMMAND_CODE_RANGE: std::ops::Range<usize> = 5..8;
pub const APPLICATION_ID_RANGE: std::ops::Range<usize> = 8..12;
pub const HOP_BY_HOP_ID_RANGE: std::ops::Range<usize> = 12..16;
pub const END_TO_END_ID_RANGE: std::ops::Range<usize> = 16..20;

pub const DIAMETER_VERSION: u8 = 1;

pub const COMMAND_FLAG_REQUEST: u8 = 0x80;
pub const COMMAND_FLAG_PROXIABLE: u8 = 0x40;
pub const COMMAND_FLAG_ERROR: u8 = 0x20;
pub const COMMAND_FLAG_RETRANSMITTED: u8 = 0x10;

pub const AVP_CODE_RANGE: std::ops::Range<usize> = 0..4;
pub const AVP_FLAGS_OFFSET: usize = 4;
pub const AVP_LENGTH_RANGE: std::ops::Range<usize> = 5..8;
pub const AVP_VENDOR_ID_RANGE: std::ops::Range<usize> = 8..12;
pub const AVP_HEADER_LEN: usize = 8;
pub const AVP_VENDOR_HEADER_LEN: usize = 12;
pub const AVP_ALIGNMENT: usize = 4;

pub const AVP_FLAG_VENDOR: u8 = 0x80;

pub const ADDRESS_FAMILY_LEN: usize = 2;
pub const ADDRESS_FAMILY_IPV4: u16 = 1;
pub const ADDRESS_FAMILY_IPV6: u16 = 2;
