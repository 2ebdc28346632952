use ahash::AHashMap;
use std::sync::Arc;
use tracing::warn;

use super::BLOCK_COLOUR;
use crate::editor::{
    Block, BlockBody, Connector, DeviceTypeOptions, DropdownOption, FieldDef,
};
use crate::schema::{PropertyEntry, PropertyKind, PropertyTable, SchemaCatalog};

/// Registry name of [`DevicePropertyBlock`].
pub const DEVICE_PROPERTY_BLOCK: &str = "device_property";

const MAIN_INPUT: &str = "MAIN";
const CUSTOM_INPUT: &str = "CUSTOM";
const TYPE_FIELD: &str = "TYPE";
const PROP_FIELD: &str = "PROP";

/// Device-property block: TYPE and PROP dropdowns followed by a trailing
/// row of fields whose shape depends on the selected property's declared
/// type.
///
/// The PROP dropdown is keyed by property id and labeled by display name;
/// the resolved table is cached so the trailing row can be rebuilt without
/// consulting the catalog again. The trailing row is always replaced as a
/// whole.
pub struct DevicePropertyBlock {
    catalog: Arc<SchemaCatalog>,
    properties: PropertyTable,
    last_type: Option<String>,
    last_prop: Option<String>,
    body: BlockBody,
}

impl DevicePropertyBlock {
    pub fn new(catalog: Arc<SchemaCatalog>) -> Self {
        let mut body = BlockBody::new(Connector::Value)
            .with_colour(BLOCK_COLOUR)
            .with_tooltip("Condition on a device property");
        body.set_row(
            MAIN_INPUT,
            vec![
                FieldDef::label("property"),
                FieldDef::dropdown(TYPE_FIELD, DeviceTypeOptions::new(catalog.clone())),
                FieldDef::static_dropdown(PROP_FIELD, Vec::new()),
            ],
        );
        body.set_row(CUSTOM_INPUT, vec![FieldDef::placeholder()]);
        Self {
            catalog,
            properties: PropertyTable::default(),
            last_type: None,
            last_prop: None,
            body,
        }
    }

    /// Field layout of the trailing row for the selected property.
    fn custom_fields(entry: Option<&PropertyEntry>) -> Vec<FieldDef> {
        let mut fields = Vec::new();
        let Some(entry) = entry else {
            fields.push(FieldDef::placeholder());
            return fields;
        };
        match &entry.kind {
            PropertyKind::Option => {
                fields.push(FieldDef::label("="));
                let options = entry
                    .options
                    .iter()
                    .map(|o| DropdownOption::new(o, o))
                    .collect();
                fields.push(FieldDef::static_dropdown("OPTION", options));
            }
            PropertyKind::Range => {
                fields.push(FieldDef::label("in range ["));
                fields.push(FieldDef::text("MIN", "0"));
                fields.push(FieldDef::label(","));
                fields.push(FieldDef::text("MAX", "100"));
                fields.push(FieldDef::label("]"));
            }
            PropertyKind::Color => {
                fields.push(FieldDef::label("has colour"));
                fields.push(FieldDef::colour("COLOR", "#000000"));
            }
            PropertyKind::Time => {
                fields.push(FieldDef::label("is"));
                fields.push(FieldDef::text("HOUR", "0"));
                fields.push(FieldDef::label(":"));
                fields.push(FieldDef::text("MINUTE", "0"));
            }
            PropertyKind::TimeOffset => {
                fields.push(FieldDef::label("has offset"));
                fields.push(FieldDef::static_dropdown(
                    "SIGN",
                    vec![
                        DropdownOption::new("-", "minus"),
                        DropdownOption::new("+", "plus"),
                    ],
                ));
                fields.push(FieldDef::text("HOUR", "0"));
                fields.push(FieldDef::label(":"));
                fields.push(FieldDef::text("MINUTE", "0"));
            }
            PropertyKind::Threshold => {
                fields.push(FieldDef::label("is"));
                fields.push(FieldDef::static_dropdown(
                    "SIGN",
                    vec![
                        DropdownOption::new(">", "gt"),
                        DropdownOption::new("<", "lt"),
                        DropdownOption::new(">=", "gte"),
                        DropdownOption::new("<=", "lte"),
                    ],
                ));
                fields.push(FieldDef::text("THRESHOLD", "0"));
                // a threshold property also carries the boolean fields and
                // the trailing spacer
                push_bool_fields(&mut fields);
                fields.push(FieldDef::placeholder());
            }
            PropertyKind::Bool => {
                push_bool_fields(&mut fields);
                fields.push(FieldDef::placeholder());
            }
            PropertyKind::Other(_) => fields.push(FieldDef::placeholder()),
        }
        fields
    }
}

fn push_bool_fields(fields: &mut Vec<FieldDef>) {
    fields.push(FieldDef::label("is"));
    fields.push(FieldDef::static_dropdown(
        "BOOL",
        vec![
            DropdownOption::new("true", "true"),
            DropdownOption::new("false", "false"),
        ],
    ));
}

impl Block for DevicePropertyBlock {
    fn block_type(&self) -> &'static str {
        DEVICE_PROPERTY_BLOCK
    }

    fn body(&self) -> &BlockBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut BlockBody {
        &mut self.body
    }

    fn on_change(&mut self) {
        let current_type = self
            .body
            .field_value(TYPE_FIELD)
            .unwrap_or_default()
            .to_string();
        if self.last_type.as_deref() != Some(current_type.as_str()) {
            self.last_type = Some(current_type.clone());
            self.properties = self.catalog.properties_of_type(&current_type);
            if let Err(err) = self.body.replace_field(
                MAIN_INPUT,
                PROP_FIELD,
                FieldDef::static_dropdown(PROP_FIELD, self.properties.dropdown_options()),
            ) {
                warn!(%err, devicetype = %current_type, "unable to rebuild the property dropdown");
            }
        }

        let current_prop = self
            .body
            .field_value(PROP_FIELD)
            .unwrap_or_default()
            .to_string();
        if self.last_prop.as_deref() != Some(current_prop.as_str()) {
            self.last_prop = Some(current_prop.clone());
            let fields = Self::custom_fields(self.properties.get(&current_prop));
            self.body.set_row(CUSTOM_INPUT, fields);
        }
    }

    fn get_values(&self) -> AHashMap<String, String> {
        self.body.row_values(CUSTOM_INPUT)
    }
}
