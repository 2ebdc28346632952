use ahash::AHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::SchemaError;

/// The static catalog describing all device types and the global
/// property/command/event vocabularies.
///
/// Supplied once by the embedding system and treated as immutable for the
/// lifetime of the editor session. Unknown or incomplete entries are kept
/// as-is at this level; the projection queries decide what is offered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// Device-type name to descriptor.
    #[serde(default)]
    pub devicetypes: AHashMap<String, DeviceTypeDef>,
    /// Global property table, keyed by property id.
    #[serde(default)]
    pub values: AHashMap<String, PropertyDef>,
    /// Global command table, keyed by command id.
    #[serde(default)]
    pub commands: AHashMap<String, CommandDef>,
    /// Global event table. Only the keys are consulted here; payloads are
    /// kept verbatim for frontends that want them. A `BTreeMap` keeps the
    /// projected event list deterministic.
    #[serde(default)]
    pub events: BTreeMap<String, serde_json::Value>,
}

impl Schema {
    /// Parse a schema document from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::JsonParse(e.to_string()))
    }
}

/// Declares which events, properties and commands a device type offers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceTypeDef {
    #[serde(default)]
    pub events: Vec<String>,
    /// Property-id references into [`Schema::values`], in declaration order.
    #[serde(default)]
    pub properties: Vec<String>,
    /// Command-id references into [`Schema::commands`], in declaration order.
    #[serde(default)]
    pub commands: Vec<String>,
}

/// Global property record.
///
/// `name` and `type` are optional because schema documents in the wild omit
/// them; an entry lacking either is never offered to the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyDef {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Declared choices for `option`-typed properties.
    #[serde(default)]
    pub options: Vec<String>,
}

/// Global command record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandDef {
    pub name: Option<String>,
    /// Parameter key to descriptor. A `BTreeMap` keeps parameter rows in a
    /// deterministic order.
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterDef>,
}

/// A single command parameter; `name` is the display label of its row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParameterDef {
    pub name: Option<String>,
}

/// A concrete device instance known to the home-automation system.
#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    pub name: String,
    pub uuid: String,
    pub devicetype: String,
}

impl Device {
    /// Parse a device-list snapshot from its JSON representation.
    pub fn list_from_json(json: &str) -> Result<Vec<Device>, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::DeviceListParse(e.to_string()))
    }
}
