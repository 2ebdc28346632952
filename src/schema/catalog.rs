use itertools::Itertools;

use super::model::{Device, Schema};
use crate::editor::DropdownOption;
use crate::error::SchemaError;

/// Editor-session scoped snapshot of the schema and the device list.
///
/// Built once by the embedding page and shared (via `Arc`) with every block
/// instantiated during the session; never mutated after construction. All
/// queries are pure projections and total: absent or malformed schema
/// entries are skipped rather than reported, so a sparse schema degrades to
/// sparse dropdowns instead of a failure.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    schema: Schema,
    devices: Vec<Device>,
}

impl SchemaCatalog {
    pub fn new(schema: Schema, devices: Vec<Device>) -> Self {
        Self { schema, devices }
    }

    /// Builds a catalog straight from the two JSON documents the embedding
    /// system serves.
    pub fn from_json(schema_json: &str, devices_json: &str) -> Result<Self, SchemaError> {
        Ok(Self::new(
            Schema::from_json(schema_json)?,
            Device::list_from_json(devices_json)?,
        ))
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Devices of the given type with a non-empty name, as (name, uuid)
    /// options in snapshot order.
    pub fn devices_of_type(&self, devicetype: &str) -> Vec<DropdownOption> {
        let options = self
            .devices
            .iter()
            .filter(|d| !d.name.is_empty() && d.devicetype == devicetype)
            .map(|d| DropdownOption::new(&d.name, &d.uuid))
            .collect();
        non_empty(options)
    }

    /// Distinct device types among named devices, first-seen order.
    pub fn device_types(&self) -> Vec<DropdownOption> {
        let options = self
            .devices
            .iter()
            .filter(|d| !d.name.is_empty())
            .map(|d| d.devicetype.as_str())
            .unique()
            .map(|t| DropdownOption::new(t, t))
            .collect();
        non_empty(options)
    }

    /// Every event name in the global event table, in key order.
    pub fn all_event_names(&self) -> Vec<DropdownOption> {
        let options = self
            .schema
            .events
            .keys()
            .map(|e| DropdownOption::new(e, e))
            .collect();
        non_empty(options)
    }

    /// The declared event list of a device type, in declaration order.
    pub fn events_of_type(&self, devicetype: &str) -> Vec<DropdownOption> {
        let options = self
            .schema
            .devicetypes
            .get(devicetype)
            .map(|def| {
                def.events
                    .iter()
                    .map(|e| DropdownOption::new(e, e))
                    .collect()
            })
            .unwrap_or_default();
        non_empty(options)
    }

    /// Resolved property descriptors of a device type, in declaration order.
    ///
    /// Only property ids that resolve to a global record carrying both a
    /// display name and a declared type are included.
    pub fn properties_of_type(&self, devicetype: &str) -> PropertyTable {
        let mut entries = Vec::new();
        if let Some(def) = self.schema.devicetypes.get(devicetype) {
            for id in &def.properties {
                let Some(record) = self.schema.values.get(id) else {
                    continue;
                };
                let (Some(name), Some(kind)) = (&record.name, &record.kind) else {
                    continue;
                };
                entries.push(PropertyEntry {
                    id: id.clone(),
                    name: name.clone(),
                    kind: PropertyKind::parse(kind),
                    options: record.options.clone(),
                });
            }
        }
        PropertyTable { entries }
    }

    /// Resolved command descriptors of a device type, in declaration order.
    ///
    /// Only command ids that resolve to a global record carrying a display
    /// name are included.
    pub fn commands_of_type(&self, devicetype: &str) -> CommandTable {
        let mut entries = Vec::new();
        if let Some(def) = self.schema.devicetypes.get(devicetype) {
            for id in &def.commands {
                let Some(record) = self.schema.commands.get(id) else {
                    continue;
                };
                let Some(name) = &record.name else {
                    continue;
                };
                let parameters = record
                    .parameters
                    .iter()
                    .map(|(key, param)| CommandParameter {
                        key: key.clone(),
                        label: param.name.clone().unwrap_or_default(),
                    })
                    .collect();
                entries.push(CommandEntry {
                    id: id.clone(),
                    name: name.clone(),
                    parameters,
                });
            }
        }
        CommandTable { entries }
    }
}

/// The host dropdown field fails on an empty option list; substitute the
/// sentinel blank option.
fn non_empty(options: Vec<DropdownOption>) -> Vec<DropdownOption> {
    if options.is_empty() {
        vec![DropdownOption::placeholder()]
    } else {
        options
    }
}

/// Declared value type of a property, driving the dynamic field layout of
/// the device-property block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    Option,
    Range,
    Color,
    Time,
    TimeOffset,
    Threshold,
    Bool,
    /// Any declared type without a dedicated field layout.
    Other(String),
}

impl PropertyKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "option" => Self::Option,
            "range" => Self::Range,
            "color" => Self::Color,
            "time" => Self::Time,
            "timeoffset" => Self::TimeOffset,
            "threshold" => Self::Threshold,
            "bool" => Self::Bool,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A property a device type offers: the global record plus the id it was
/// resolved from.
#[derive(Debug, Clone)]
pub struct PropertyEntry {
    pub id: String,
    pub name: String,
    pub kind: PropertyKind,
    pub options: Vec<String>,
}

/// Properties of one device type, in schema declaration order.
#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    entries: Vec<PropertyEntry>,
}

impl PropertyTable {
    pub fn get(&self, id: &str) -> Option<&PropertyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dropdown options keyed by property id, labeled by display name.
    pub fn dropdown_options(&self) -> Vec<DropdownOption> {
        non_empty(
            self.entries
                .iter()
                .map(|e| DropdownOption::new(&e.name, &e.id))
                .collect(),
        )
    }
}

/// One parameter of a command; `label` may be empty when the schema record
/// carries no display name.
#[derive(Debug, Clone)]
pub struct CommandParameter {
    pub key: String,
    pub label: String,
}

/// A command a device type offers: the global record plus the id it was
/// resolved from.
#[derive(Debug, Clone)]
pub struct CommandEntry {
    pub id: String,
    pub name: String,
    pub parameters: Vec<CommandParameter>,
}

/// Commands of one device type, in schema declaration order.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    pub fn get(&self, id: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dropdown options keyed by command id, labeled by display name.
    pub fn dropdown_options(&self) -> Vec<DropdownOption> {
        non_empty(
            self.entries
                .iter()
                .map(|e| DropdownOption::new(&e.name, &e.id))
                .collect(),
        )
    }
}
