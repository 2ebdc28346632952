use std::sync::Arc;
use tracing::warn;

use super::BLOCK_COLOUR;
use crate::editor::{AllEventOptions, Block, BlockBody, Connector, DeviceTypeOptions, FieldDef};
use crate::schema::SchemaCatalog;

/// Registry name of [`DeviceEventBlock`].
pub const DEVICE_EVENT_BLOCK: &str = "device_event";

/// Registry name of [`EventBlock`].
pub const EVENT_BLOCK: &str = "event";

const MAIN_INPUT: &str = "MAIN";
const TYPE_FIELD: &str = "TYPE";
const EVENT_FIELD: &str = "EVENT";

/// Device-event block: a TYPE dropdown coupled to an EVENT dropdown over
/// the events the selected device type declares.
pub struct DeviceEventBlock {
    catalog: Arc<SchemaCatalog>,
    last_type: Option<String>,
    body: BlockBody,
}

impl DeviceEventBlock {
    pub fn new(catalog: Arc<SchemaCatalog>) -> Self {
        let mut body = BlockBody::new(Connector::Value)
            .with_colour(BLOCK_COLOUR)
            .with_tooltip("Event declared by a device type");
        body.set_row(
            MAIN_INPUT,
            vec![
                FieldDef::label("event"),
                FieldDef::dropdown(TYPE_FIELD, DeviceTypeOptions::new(catalog.clone())),
                FieldDef::static_dropdown(EVENT_FIELD, Vec::new()),
            ],
        );
        Self {
            catalog,
            last_type: None,
            body,
        }
    }
}

impl Block for DeviceEventBlock {
    fn block_type(&self) -> &'static str {
        DEVICE_EVENT_BLOCK
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
        let events = self.catalog.events_of_type(&current_type);
        if let Err(err) = self.body.replace_field(
            MAIN_INPUT,
            EVENT_FIELD,
            FieldDef::static_dropdown(EVENT_FIELD, events),
        ) {
            warn!(%err, devicetype = %current_type, "unable to rebuild the event dropdown");
        }
    }
}

/// Generic event block: one EVENT dropdown over every event in the schema.
/// Its option provider queries the catalog at render time, so the block
/// itself has no reactive state.
pub struct EventBlock {
    body: BlockBody,
}

impl EventBlock {
    pub fn new(catalog: Arc<SchemaCatalog>) -> Self {
        let mut body = BlockBody::new(Connector::Value)
            .with_colour(BLOCK_COLOUR)
            .with_tooltip("Any event known to the system");
        body.set_row(
            MAIN_INPUT,
            vec![
                FieldDef::label("event"),
                FieldDef::dropdown(EVENT_FIELD, AllEventOptions::new(catalog)),
            ],
        );
        Self { body }
    }
}

impl Block for EventBlock {
    fn block_type(&self) -> &'static str {
        EVENT_BLOCK
    }

    fn body(&self) -> &BlockBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut BlockBody {
        &mut self.body
    }
}
