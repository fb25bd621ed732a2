//! Diameter (RFC 6733) message decoding.
//!
//! `parse_message` reads the 20-byte header and the AVP sequence that
//! follows it; grouped AVPs are left encoded and expanded on demand with
//! `decode_grouped`, so a damaged group does not cost the whole message.
//! Each AVP value is tagged with the kind its dictionary definition names.
//! AVPs without a definition stay `Unknown` bytes.
//!
//! Wire offsets live in `layout`, bounds-checked access in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod value;

pub use error::DiameterError;
pub use parser::{Avp, Header, Message, decode_grouped, parse_message};
pub use value::{AddressValue, AvpValue};
