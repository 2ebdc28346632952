use std::sync::Arc;
use tracing::warn;

use super::BLOCK_COLOUR;
use crate::editor::{Block, BlockBody, Connector, DeviceTypeOptions, FieldDef};
use crate::schema::SchemaCatalog;

/// Registry name of [`DeviceBlock`].
pub const DEVICE_BLOCK: &str = "device";

const MAIN_INPUT: &str = "MAIN";
const TYPE_FIELD: &str = "TYPE";
const DEVICE_FIELD: &str = "DEVICE";

/// Device-reference block: a TYPE dropdown coupled to a DEVICE dropdown.
///
/// The DEVICE dropdown is rebuilt from the catalog whenever the selected
/// type changes; its committed value (the device uuid) is what the block
/// produces as an expression.
pub struct DeviceBlock {
    catalog: Arc<SchemaCatalog>,
    last_type: Option<String>,
    body: BlockBody,
}

impl DeviceBlock {
    pub fn new(catalog: Arc<SchemaCatalog>) -> Self {
        let mut body = BlockBody::new(Connector::Value)
            .with_colour(BLOCK_COLOUR)
            .with_tooltip("Reference to a configured device");
        body.set_row(
            MAIN_INPUT,
            vec![
                FieldDef::label("device"),
                FieldDef::dropdown(TYPE_FIELD, DeviceTypeOptions::new(catalog.clone())),
                // stays the blank placeholder until a type is committed
                FieldDef::static_dropdown(DEVICE_FIELD, Vec::new()),
            ],
        );
        Self {
            catalog,
            last_type: None,
            body,
        }
    }
}

impl Block for DeviceBlock {
    fn block_type(&self) -> &'static str {
        DEVICE_BLOCK
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
        if self.last_type.as_deref() == Some(current_type.as_str()) {
            return;
        }
        self.last_type = Some(current_type.clone());
        let devices = self.catalog.devices_of_type(&current_type);
        if let Err(err) = self.body.replace_field(
            MAIN_INPUT,
            DEVICE_FIELD,
            FieldDef::static_dropdown(DEVICE_FIELD, devices),
        ) {
            warn!(%err, devicetype = %current_type, "unable to rebuild the device dropdown");
        }
    }
}
