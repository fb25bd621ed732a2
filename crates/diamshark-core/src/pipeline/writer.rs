use std::io::{self, Write};

use tracing::warn;

use crate::MessageRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON object per line.
    #[default]
    Compact,
    /// Indented JSON objects separated by newlines.
    Pretty,
}

/// Serializes records to `out`, one per line (or block, when pretty).
pub struct RecordWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Write one record. `Ok(false)` means the record could not be
    /// serialized and was dropped; write failures are returned as errors.
    ///
    /// serde_json renders non-finite floats as `null`, so records built from
    /// the current value types always serialize.
    pub fn write(&mut self, record: &MessageRecord) -> io::Result<bool> {
        let serialized = match self.format {
            OutputFormat::Compact => serde_json::to_string(record),
            OutputFormat::Pretty => serde_json::to_string_pretty(record),
        };
        self.emit(record, serialized)
    }

    fn emit(
        &mut self,
        record: &MessageRecord,
        serialized: serde_json::Result<String>,
    ) -> io::Result<bool> {
        match serialized {
            Ok(json) => {
                writeln!(self.out, "{json}")?;
                Ok(true)
            }
            Err(err) => {
                warn!(
                    command_code = record.command_code,
                    hop_by_hop_id = record.hop_by_hop_id,
                    error = %err,
                    "dropping record that failed to serialize"
                );
                Ok(false)
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputFormat, RecordWriter};
    use crate::MessageRecord;

    fn record() -> MessageRecord {
        MessageRecord {
            command_code: 280,
            command_code_name: None,
            command_flags: 0,
            command_flags_name: None,
            application_id: 0,
            application_name: None,
            hop_by_hop_id: 1,
            end_to_end_id: 2,
            avps: Vec::new(),
        }
    }

    #[test]
    fn compact_writes_json_lines() {
        let mut writer = RecordWriter::new(Vec::new(), OutputFormat::Compact);
        assert!(writer.write(&record()).unwrap());
        assert!(writer.write(&record()).unwrap());
        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("{\"command_code\":280,"));
    }

    #[test]
    fn pretty_writes_indented_json() {
        let mut writer = RecordWriter::new(Vec::new(), OutputFormat::Pretty);
        writer.write(&record()).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert!(text.starts_with("{\n  \"command_code\": 280,"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["end_to_end_id"], 2);
    }

    #[test]
    fn serialization_failure_drops_record() {
        let mut writer = RecordWriter::new(Vec::new(), OutputFormat::Compact);
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(!writer.emit(&record(), Err(err)).unwrap());
        assert!(writer.write(&record()).unwrap());
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn non_finite_floats_still_serialize() {
        use crate::{AvpData, AvpRecord, CanonicalValue};

        let mut nan = record();
        nan.avps.push(AvpRecord {
            code: 1,
            vendor_id: None,
            name: None,
            data: AvpData::Value(CanonicalValue::Float64(f64::NAN)),
        });
        let mut writer = RecordWriter::new(Vec::new(), OutputFormat::Compact);
        assert!(writer.write(&nan).unwrap());
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert!(text.contains("\"data\":null"));
    }
}
