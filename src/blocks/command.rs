use ahash::AHashMap;
use std::sync::Arc;
use tracing::warn;

use super::BLOCK_COLOUR;
use crate::editor::{Block, BlockBody, Connector, DeviceTypeOptions, FieldDef};
use crate::schema::{CommandTable, SchemaCatalog};

/// Registry name of [`DeviceCommandBlock`].
pub const DEVICE_COMMAND_BLOCK: &str = "device_command";

const MAIN_INPUT: &str = "MAIN";
const TYPE_FIELD: &str = "TYPE";
const CMD_FIELD: &str = "CMD";

/// Parameter keys come from the schema, so their fields are registered
/// under this prefix to keep them clear of the TYPE/CMD control fields.
/// [`DeviceCommandBlock::get_values`] strips it again on export.
const PARAM_PREFIX: &str = "CUSTOM_";

/// Device-command block: TYPE and CMD dropdowns followed by one input row
/// per parameter of the selected command.
///
/// Each parameter gets its own named row so rows can be removed
/// individually when the selection changes; the free-text field of a row
/// is keyed by the upper-cased parameter key behind [`PARAM_PREFIX`].
/// Statement-shaped: the surrounding program chains commands rather than
/// reading a value.
pub struct DeviceCommandBlock {
    catalog: Arc<SchemaCatalog>,
    commands: CommandTable,
    last_type: Option<String>,
    last_cmd: Option<String>,
    param_rows: Vec<String>,
    body: BlockBody,
}

impl DeviceCommandBlock {
    pub fn new(catalog: Arc<SchemaCatalog>) -> Self {
        let mut body = BlockBody::new(Connector::Statement)
            .with_colour(BLOCK_COLOUR)
            .with_tooltip("Send a command to a device");
        body.set_row(
            MAIN_INPUT,
            vec![
                FieldDef::label("command"),
                FieldDef::dropdown(TYPE_FIELD, DeviceTypeOptions::new(catalog.clone())),
                FieldDef::static_dropdown(CMD_FIELD, Vec::new()),
            ],
        );
        Self {
            catalog,
            commands: CommandTable::default(),
            last_type: None,
            last_cmd: None,
            param_rows: Vec::new(),
            body,
        }
    }

    /// Tears down every parameter row of the previous selection. A row
    /// that has already vanished is reported and skipped.
    fn clear_param_rows(&mut self) {
        for name in self.param_rows.drain(..) {
            if let Err(err) = self.body.remove_input(&name) {
                warn!(%err, input = %name, "unable to find parameter row during teardown");
            }
        }
    }
}

impl Block for DeviceCommandBlock {
    fn block_type(&self) -> &'static str {
        DEVICE_COMMAND_BLOCK
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
            self.commands = self.catalog.commands_of_type(&current_type);
            if let Err(err) = self.body.replace_field(
                MAIN_INPUT,
                CMD_FIELD,
                FieldDef::static_dropdown(CMD_FIELD, self.commands.dropdown_options()),
            ) {
                warn!(%err, devicetype = %current_type, "unable to rebuild the command dropdown");
            }
        }

        let current_cmd = self
            .body
            .field_value(CMD_FIELD)
            .unwrap_or_default()
            .to_string();
        if self.last_cmd.as_deref() != Some(current_cmd.as_str()) {
            self.last_cmd = Some(current_cmd.clone());
            self.clear_param_rows();
            let parameters = self
                .commands
                .get(&current_cmd)
                .map(|entry| entry.parameters.as_slice())
                .unwrap_or_default();
            if parameters.is_empty() {
                self.body.set_row("INPUT_empty", vec![FieldDef::placeholder()]);
                self.param_rows.push("INPUT_empty".to_string());
            } else {
                for param in parameters {
                    let key = param.key.to_uppercase();
                    let row = format!("INPUT_{key}");
                    let mut fields = Vec::new();
                    if !param.label.is_empty() {
                        fields.push(FieldDef::label(format!("-{}", param.label)));
                    }
                    fields.push(FieldDef::text(format!("{PARAM_PREFIX}{key}"), ""));
                    self.body.set_row(&row, fields);
                    self.param_rows.push(row);
                }
            }
        }
    }

    fn get_values(&self) -> AHashMap<String, String> {
        let mut values = AHashMap::new();
        for row in &self.param_rows {
            for (key, value) in self.body.row_values(row) {
                let exported = key
                    .strip_prefix(PARAM_PREFIX)
                    .map(str::to_string)
                    .unwrap_or(key);
                values.insert(exported, value);
            }
        }
        values
    }
}
