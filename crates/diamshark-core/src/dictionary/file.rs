use serde::Deserialize;

use super::{AvpDefinition, DataType, DictionaryError, StaticDictionary};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DictionaryFile {
    applications: Vec<ApplicationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ApplicationEntry {
    id: u32,
    #[serde(default)]
    avps: Vec<AvpEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AvpEntry {
    code: u32,
    name: String,
    #[serde(rename = "type")]
    data_type: DataType,
    #[serde(default)]
    vendor_id: u32,
}

/// Merge definitions from a JSON document into `dictionary`.
///
/// Returns the number of definitions read. Entries override built-in
/// definitions with the same application, code and vendor. On error the
/// dictionary is left unchanged.
pub(super) fn extend_from_json(
    dictionary: &mut StaticDictionary,
    json: &str,
) -> Result<usize, DictionaryError> {
    let file: DictionaryFile = serde_json::from_str(json)?;
    let mut definitions = Vec::new();
    for application in file.applications {
        for avp in application.avps {
            if avp.name.trim().is_empty() {
                return Err(DictionaryError::EmptyName {
                    application_id: application.id,
                    code: avp.code,
                });
            }
            definitions.push((
                application.id,
                AvpDefinition {
                    code: avp.code,
                    name: avp.name,
                    vendor_id: avp.vendor_id,
                    data_type: avp.data_type,
                },
            ));
        }
    }

    let loaded = definitions.len();
    for (application_id, definition) in definitions {
        dictionary.insert(application_id, definition);
    }
    Ok(loaded)
}
