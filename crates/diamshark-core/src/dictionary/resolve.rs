use super::{AvpDefinition, Dictionary, VendorScope};

/// Application id of the base protocol, where shared AVPs are defined.
pub const BASE_APPLICATION_ID: u32 = 0;

/// Find the definition of an AVP as seen from `application_id`.
///
/// The application's own table is consulted first, then the base protocol
/// table. A miss in both is `None`, never an error.
pub fn resolve_definition(
    dictionary: &dyn Dictionary,
    application_id: u32,
    code: u32,
    vendor_id: u32,
) -> Option<&AvpDefinition> {
    let scope = VendorScope::from_wire(vendor_id);
    dictionary
        .find_avp(application_id, code, scope)
        .or_else(|| dictionary.find_avp(BASE_APPLICATION_ID, code, scope))
}

/// Resolve an AVP name; an empty string means the AVP is unknown.
pub fn resolve_name(
    dictionary: &dyn Dictionary,
    application_id: u32,
    code: u32,
    vendor_id: u32,
) -> String {
    resolve_definition(dictionary, application_id, code, vendor_id)
        .map(|def| def.name.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{resolve_definition, resolve_name};
    use crate::dictionary::{AvpDefinition, DataType, StaticDictionary};

    fn dictionary() -> StaticDictionary {
        let mut dict = StaticDictionary::new();
        dict.insert(
            0,
            AvpDefinition {
                code: 263,
                name: "Session-Id".to_string(),
                vendor_id: 0,
                data_type: DataType::Utf8String,
            },
        );
        dict.insert(
            16777251,
            AvpDefinition {
                code: 1407,
                name: "Visited-PLMN-Id".to_string(),
                vendor_id: 10415,
                data_type: DataType::OctetString,
            },
        );
        dict.insert(
            16777251,
            AvpDefinition {
                code: 263,
                name: "S6a-Session-Id".to_string(),
                vendor_id: 0,
                data_type: DataType::Utf8String,
            },
        );
        dict
    }

    #[test]
    fn application_definition_wins() {
        assert_eq!(resolve_name(&dictionary(), 16777251, 263, 0), "S6a-Session-Id");
    }

    #[test]
    fn falls_back_to_base_application() {
        assert_eq!(resolve_name(&dictionary(), 4, 263, 0), "Session-Id");
    }

    #[test]
    fn vendor_must_match_when_given() {
        let dict = dictionary();
        assert_eq!(resolve_name(&dict, 16777251, 1407, 10415), "Visited-PLMN-Id");
        assert_eq!(resolve_name(&dict, 16777251, 1407, 5535), "");
    }

    #[test]
    fn miss_in_both_tiers_is_empty() {
        let dict = dictionary();
        assert_eq!(resolve_name(&dict, 16777251, 9999, 0), "");
        assert!(resolve_definition(&dict, 0, 9999, 0).is_none());
    }
}
