use crate::protocols::diameter::{Message, layout};
use crate::{AvpRecord, MessageRecord};

use super::optional::optional_non_empty;

/// Assemble the output record for `message` from its enriched AVPs.
pub fn build_record(message: &Message, avps: Vec<AvpRecord>) -> MessageRecord {
    let header = &message.header;
    MessageRecord {
        command_code: header.command_code,
        command_code_name: optional_non_empty(command_code_name(header.command_code)),
        command_flags: header.command_flags,
        command_flags_name: optional_non_empty(command_flags_name(header.command_flags)),
        application_id: header.application_id,
        application_name: optional_non_empty(application_name(header.application_id)),
        hop_by_hop_id: header.hop_by_hop_id,
        end_to_end_id: header.end_to_end_id,
        avps,
    }
}

/// Label for a command code; empty for codes outside the table.
pub fn command_code_name(code: u32) -> &'static str {
    match code {
        257 => "Capabilities-Exchange (CER/CEA)",
        258 => "Re-Auth (RAR/RAA)",
        271 => "Accounting (ACR/ACA)",
        272 => "Credit-Control (CCR/CCA)",
        274 => "Abort-Session (ASR/ASA)",
        275 => "Session-Termination (STR/STA)",
        280 => "Device-Watchdog (DWR/DWA)",
        282 => "Disconnect-Peer (DPR/DPA)",
        316 => "Update-Location (ULR/ULA)",
        317 => "Cancel-Location (CLR/CLA)",
        318 => "Authentication-Information (AIR/AIA)",
        319 => "Insert-Subscriber-Data (IDR/IDA)",
        320 => "Delete-Subscriber-Data (DSR/DSA)",
        321 => "Purge-UE (PUR/PUA)",
        322 => "Reset (RSR/RSA)",
        323 => "Notify (NOR/NOA)",
        _ => "",
    }
}

/// `R|P|E|T` rendering of the command flag bits; other bits are ignored.
pub fn command_flags_name(flags: u8) -> String {
    [
        (layout::COMMAND_FLAG_REQUEST, "R"),
        (layout::COMMAND_FLAG_PROXIABLE, "P"),
        (layout::COMMAND_FLAG_ERROR, "E"),
        (layout::COMMAND_FLAG_RETRANSMITTED, "T"),
    ]
    .iter()
    .filter(|(bit, _)| flags & bit != 0)
    .map(|(_, letter)| *letter)
    .collect::<Vec<_>>()
    .join("|")
}

pub fn application_name(id: u32) -> &'static str {
    match id {
        0 => "Diameter Base",
        3 => "Diameter Base Accounting",
        4 => "Diameter Credit Control",
        16777238 => "Gx",
        16777251 => "S6a/S6d",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::{application_name, build_record, command_code_name, command_flags_name};
    use crate::protocols::diameter::{Header, Message};

    fn message(command_code: u32, command_flags: u8, application_id: u32) -> Message {
        Message {
            header: Header {
                version: 1,
                message_length: 20,
                command_flags,
                command_code,
                application_id,
                hop_by_hop_id: 7,
                end_to_end_id: 9,
            },
            avps: Vec::new(),
        }
    }

    #[test]
    fn flags_names() {
        assert_eq!(command_flags_name(0x80), "R");
        assert_eq!(command_flags_name(0xC0), "R|P");
        assert_eq!(command_flags_name(0xF0), "R|P|E|T");
        assert_eq!(command_flags_name(0x50), "P|T");
        assert_eq!(command_flags_name(0x00), "");
        assert_eq!(command_flags_name(0x0F), "");
    }

    #[test]
    fn flags_names_cover_every_byte() {
        for flags in 0..=u8::MAX {
            let expected: Vec<&str> = [(0x80, "R"), (0x40, "P"), (0x20, "E"), (0x10, "T")]
                .into_iter()
                .filter(|(bit, _)| flags & bit != 0)
                .map(|(_, letter)| letter)
                .collect();
            assert_eq!(command_flags_name(flags), expected.join("|"), "flags {flags:#04x}");
        }
    }

    #[test]
    fn command_and_application_tables() {
        assert_eq!(command_code_name(318), "Authentication-Information (AIR/AIA)");
        assert_eq!(command_code_name(280), "Device-Watchdog (DWR/DWA)");
        assert_eq!(command_code_name(999), "");
        assert_eq!(application_name(16777251), "S6a/S6d");
        assert_eq!(application_name(0), "Diameter Base");
        assert_eq!(application_name(42), "");
    }

    #[test]
    fn update_location_without_flags() {
        let record = build_record(&message(316, 0, 16777251), Vec::new());
        assert_eq!(record.command_code_name.as_deref(), Some("Update-Location (ULR/ULA)"));
        assert_eq!(record.command_flags_name, None);
        assert_eq!(record.application_name.as_deref(), Some("S6a/S6d"));
        assert_eq!(record.hop_by_hop_id, 7);
        assert_eq!(record.end_to_end_id, 9);
    }

    #[test]
    fn unknown_codes_leave_names_empty() {
        let record = build_record(&message(999, 0x80, 55), Vec::new());
        assert_eq!(record.command_code_name, None);
        assert_eq!(record.command_flags_name.as_deref(), Some("R"));
        assert_eq!(record.application_name, None);
    }
}
