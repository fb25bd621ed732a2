//! AVP naming dictionary.
//!
//! Definitions map `(application id, AVP code, vendor)` to a name and a
//! data type. The codec uses the data type to pick a value kind; the
//! enricher uses the name. Both go through `resolve`, which applies the
//! base-application fallback, so neither touches the tables directly.
//!
//! Dictionaries are read-only once built. `Dictionary` requires
//! `Send + Sync` so one instance can be shared by concurrent decoders.

mod builtin;
mod error;
mod file;
mod resolve;

pub use error::DictionaryError;
pub use resolve::{BASE_APPLICATION_ID, resolve_definition, resolve_name};

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

/// 3GPP vendor id (IANA enterprise number 10415).
pub const VENDOR_3GPP: u32 = 10415;

/// Wire data type of an AVP, as named in RFC 6733 and its extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DataType {
    OctetString,
    Integer32,
    Integer64,
    Unsigned32,
    Unsigned64,
    Float32,
    Float64,
    Grouped,
    Address,
    Time,
    #[serde(rename = "UTF8String")]
    Utf8String,
    DiameterIdentity,
    #[serde(rename = "DiameterURI")]
    DiameterUri,
    Enumerated,
    #[serde(rename = "IPFilterRule")]
    IpFilterRule,
    #[serde(rename = "QoSFilterRule")]
    QosFilterRule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvpDefinition {
    pub code: u32,
    pub name: String,
    /// Owning vendor; 0 for vendorless (IETF) AVPs.
    pub vendor_id: u32,
    pub data_type: DataType,
}

/// Vendor filter for a lookup.
///
/// An AVP without the V bit carries vendor id 0 on the wire. That is mapped
/// to `Undefined` rather than `Vendor(0)` so the lookup can tell "no vendor
/// given" apart from "this specific vendor".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorScope {
    Undefined,
    Vendor(u32),
}

impl VendorScope {
    pub fn from_wire(vendor_id: u32) -> Self {
        if vendor_id == 0 {
            VendorScope::Undefined
        } else {
            VendorScope::Vendor(vendor_id)
        }
    }
}

pub trait Dictionary: Send + Sync {
    /// Exact lookup within one application; no fallback.
    fn find_avp(&self, application_id: u32, code: u32, vendor: VendorScope)
    -> Option<&AvpDefinition>;
}

/// In-memory dictionary indexed by application and AVP code.
#[derive(Debug, Clone, Default)]
pub struct StaticDictionary {
    avps: HashMap<(u32, u32), Vec<AvpDefinition>>,
}

impl StaticDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base protocol, Credit-Control and S6a/S6d definitions.
    pub fn builtin() -> Self {
        let mut dictionary = Self::new();
        for (application_id, table) in builtin::TABLES {
            for &(code, name, vendor_id, data_type) in *table {
                dictionary.insert(
                    *application_id,
                    AvpDefinition {
                        code,
                        name: name.to_string(),
                        vendor_id,
                        data_type,
                    },
                );
            }
        }
        dictionary
    }

    /// Add a definition, replacing any existing one with the same
    /// application, code and vendor.
    pub fn insert(&mut self, application_id: u32, definition: AvpDefinition) {
        let entries = self
            .avps
            .entry((application_id, definition.code))
            .or_default();
        match entries
            .iter_mut()
            .find(|existing| existing.vendor_id == definition.vendor_id)
        {
            Some(existing) => *existing = definition,
            None => entries.push(definition),
        }
    }

    pub fn extend_from_json(&mut self, json: &str) -> Result<usize, DictionaryError> {
        file::extend_from_json(self, json)
    }

    pub fn load_json(&mut self, path: &Path) -> Result<usize, DictionaryError> {
        let json = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.extend_from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.avps.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.avps.is_empty()
    }
}

impl Dictionary for StaticDictionary {
    fn find_avp(
        &self,
        application_id: u32,
        code: u32,
        vendor: VendorScope,
    ) -> Option<&AvpDefinition> {
        let entries = self.avps.get(&(application_id, code))?;
        match vendor {
            VendorScope::Vendor(vendor_id) => {
                entries.iter().find(|def| def.vendor_id == vendor_id)
            }
            VendorScope::Undefined => entries
                .iter()
                .find(|def| def.vendor_id == 0)
                .or_else(|| entries.first()),
        }
    }
}
