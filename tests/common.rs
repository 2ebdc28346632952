//! Common test utilities for building schema and device fixtures.
use domoblocks::prelude::*;
use serde_json::json;

/// A schema exercising every property kind, a malformed property entry and
/// a nameless command.
#[allow(dead_code)]
pub fn sample_schema() -> Schema {
    let doc = json!({
        "devicetypes": {
            "dimmer": {
                "events": ["event.device.statechanged", "event.device.levelchanged"],
                "properties": ["state", "level"],
                "commands": ["on", "off", "setlevel", "mute"]
            },
            "thermostat": {
                "events": ["event.environment.temperaturechanged"],
                "properties": ["temperature", "mode", "ghost", "unlisted"],
                "commands": ["settemperature", "nameless"]
            },
            "rgbdimmer": {
                "properties": ["color", "wakeup", "offset", "pressure"],
                "commands": ["setcolor"]
            }
        },
        "values": {
            "state": { "name": "State", "type": "bool" },
            "level": { "name": "Level", "type": "range" },
            "temperature": { "name": "Temperature", "type": "threshold" },
            "mode": { "name": "Mode", "type": "option", "options": ["heat", "cool", "auto"] },
            "color": { "name": "Colour", "type": "color" },
            "wakeup": { "name": "Wakeup time", "type": "time" },
            "offset": { "name": "Offset", "type": "timeoffset" },
            "pressure": { "name": "Pressure", "type": "barometric" },
            // malformed on purpose: carries no declared type
            "ghost": { "name": "Ghost" }
        },
        "commands": {
            "on": { "name": "Turn on" },
            "off": { "name": "Turn off" },
            "setlevel": { "name": "Set level", "parameters": { "level": { "name": "Level" } } },
            // parameter key clashing with the block's own TYPE field
            "mute": { "name": "Mute", "parameters": { "type": { "name": "Type" } } },
            "settemperature": {
                "name": "Set temperature",
                "parameters": {
                    "temperature": { "name": "Temperature" },
                    "mode": { "name": "Mode" }
                }
            },
            "setcolor": {
                "name": "Set colour",
                "parameters": {
                    "red": { "name": "Red" },
                    "green": { "name": "Green" },
                    "blue": { "name": "Blue" }
                }
            },
            // malformed on purpose: carries no display name
            "nameless": {}
        },
        "events": {
            "event.device.statechanged": {},
            "event.device.levelchanged": {},
            "event.environment.temperaturechanged": {}
        }
    });
    serde_json::from_value(doc).expect("fixture schema parses")
}

/// Device snapshot covering duplicates of one type and an unnamed device
/// that must never be offered.
#[allow(dead_code)]
pub fn sample_devices() -> Vec<Device> {
    serde_json::from_value(json!([
        { "name": "Kitchen dimmer", "uuid": "uuid-dim-1", "devicetype": "dimmer" },
        { "name": "Bedroom dimmer", "uuid": "uuid-dim-2", "devicetype": "dimmer" },
        { "name": "", "uuid": "uuid-hidden", "devicetype": "relay" },
        { "name": "Hallway thermostat", "uuid": "uuid-thermo-1", "devicetype": "thermostat" },
        { "name": "Mood light", "uuid": "uuid-rgb-1", "devicetype": "rgbdimmer" }
    ]))
    .expect("fixture devices parse")
}

#[allow(dead_code)]
pub fn sample_catalog() -> Arc<SchemaCatalog> {
    Arc::new(SchemaCatalog::new(sample_schema(), sample_devices()))
}

#[allow(dead_code)]
pub fn empty_catalog() -> Arc<SchemaCatalog> {
    Arc::new(SchemaCatalog::new(Schema::default(), Vec::new()))
}

/// Current option list of a dropdown field on a block.
#[allow(dead_code)]
pub fn dropdown_options(block: &dyn Block, input: &str, key: &str) -> Vec<DropdownOption> {
    let row = block.body().input(input).expect("input row exists");
    let field = row
        .fields()
        .iter()
        .find(|f| f.key == key)
        .expect("field exists");
    match &field.kind {
        FieldKind::Dropdown(provider) => provider.options(),
        other => panic!("field {key} is not a dropdown: {other:?}"),
    }
}
