//! Tests for the schema catalog's projection queries.
mod common;
use common::*;
use domoblocks::prelude::*;

#[test]
fn test_placeholder_substitution_is_universal() {
    let catalog = empty_catalog();

    for options in [
        catalog.device_types(),
        catalog.all_event_names(),
        catalog.devices_of_type("dimmer"),
        catalog.events_of_type("dimmer"),
        catalog.properties_of_type("dimmer").dropdown_options(),
        catalog.commands_of_type("dimmer").dropdown_options(),
    ] {
        assert_eq!(options.len(), 1);
        assert!(options[0].is_placeholder());
    }
}

#[test]
fn test_device_types_are_distinct_and_skip_unnamed() {
    let catalog = sample_catalog();
    let types: Vec<String> = catalog
        .device_types()
        .into_iter()
        .map(|o| o.value)
        .collect();

    // first-seen order, one entry per type, nothing from the unnamed device
    assert_eq!(types, vec!["dimmer", "thermostat", "rgbdimmer"]);
}

#[test]
fn test_devices_of_type_lists_name_uuid_pairs() {
    let catalog = sample_catalog();
    let devices = catalog.devices_of_type("dimmer");

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0], DropdownOption::new("Kitchen dimmer", "uuid-dim-1"));
    assert_eq!(devices[1], DropdownOption::new("Bedroom dimmer", "uuid-dim-2"));
}

#[test]
fn test_devices_of_unknown_type_yield_exactly_the_placeholder() {
    let catalog = sample_catalog();
    let devices = catalog.devices_of_type("fountain");

    assert_eq!(devices, vec![DropdownOption::placeholder()]);

    // the unnamed relay is filtered, so its type is as good as unknown
    let relays = catalog.devices_of_type("relay");
    assert_eq!(relays, vec![DropdownOption::placeholder()]);
}

#[test]
fn test_all_event_names_are_deterministic() {
    let catalog = sample_catalog();
    let events: Vec<String> = catalog
        .all_event_names()
        .into_iter()
        .map(|o| o.value)
        .collect();

    assert_eq!(
        events,
        vec![
            "event.device.levelchanged",
            "event.device.statechanged",
            "event.environment.temperaturechanged",
        ]
    );
}

#[test]
fn test_events_of_type_follow_declaration_order() {
    let catalog = sample_catalog();
    let events: Vec<String> = catalog
        .events_of_type("dimmer")
        .into_iter()
        .map(|o| o.value)
        .collect();

    assert_eq!(
        events,
        vec!["event.device.statechanged", "event.device.levelchanged"]
    );

    // a type without declared events degrades to the placeholder
    let none = catalog.events_of_type("rgbdimmer");
    assert_eq!(none, vec![DropdownOption::placeholder()]);
}

#[test]
fn test_properties_exclude_unresolved_and_typeless_entries() {
    let catalog = sample_catalog();
    let properties = catalog.properties_of_type("thermostat");

    // "ghost" lacks a type, "unlisted" has no global record
    let ids: Vec<&str> = properties.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["temperature", "mode"]);

    let temperature = properties.get("temperature").expect("resolved entry");
    assert_eq!(temperature.name, "Temperature");
    assert_eq!(temperature.kind, PropertyKind::Threshold);

    let mode = properties.get("mode").expect("resolved entry");
    assert_eq!(mode.options, vec!["heat", "cool", "auto"]);
}

#[test]
fn test_property_dropdown_is_keyed_by_id_and_labeled_by_name() {
    let catalog = sample_catalog();
    let options = catalog.properties_of_type("dimmer").dropdown_options();

    assert_eq!(options[0], DropdownOption::new("State", "state"));
    assert_eq!(options[1], DropdownOption::new("Level", "level"));
}

#[test]
fn test_unrecognized_property_type_is_kept_as_other() {
    let catalog = sample_catalog();
    let properties = catalog.properties_of_type("rgbdimmer");

    let pressure = properties.get("pressure").expect("resolved entry");
    assert_eq!(pressure.kind, PropertyKind::Other("barometric".to_string()));
}

#[test]
fn test_commands_exclude_nameless_entries() {
    let catalog = sample_catalog();
    let commands = catalog.commands_of_type("thermostat");

    let ids: Vec<&str> = commands.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["settemperature"]);
}

#[test]
fn test_command_parameters_are_deterministically_ordered() {
    let catalog = sample_catalog();
    let commands = catalog.commands_of_type("rgbdimmer");

    let setcolor = commands.get("setcolor").expect("resolved entry");
    let keys: Vec<&str> = setcolor.parameters.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, vec!["blue", "green", "red"]);
    assert_eq!(setcolor.parameters[0].label, "Blue");
}

#[test]
fn test_unknown_type_yields_empty_tables() {
    let catalog = sample_catalog();

    assert!(catalog.properties_of_type("fountain").is_empty());
    assert!(catalog.commands_of_type("fountain").is_empty());
    // the dropdown built over an empty table still carries the placeholder
    let options = catalog.properties_of_type("fountain").dropdown_options();
    assert_eq!(options, vec![DropdownOption::placeholder()]);
}

#[test]
fn test_schema_parse_errors_are_reported() {
    let err = Schema::from_json("{ not json").expect_err("parse fails");
    assert!(matches!(err, SchemaError::JsonParse(_)));

    let err = Device::list_from_json("[{}]").expect_err("missing fields fail");
    assert!(matches!(err, SchemaError::DeviceListParse(_)));
}

#[test]
fn test_catalog_from_json_round_trip() {
    let schema_json = r#"{
        "devicetypes": { "switch": { "events": ["event.device.statechanged"] } },
        "events": { "event.device.statechanged": {} }
    }"#;
    let devices_json = r#"[
        { "name": "Porch switch", "uuid": "uuid-sw-1", "devicetype": "switch" }
    ]"#;

    let catalog = SchemaCatalog::from_json(schema_json, devices_json).expect("parses");
    assert_eq!(catalog.devices().len(), 1);
    assert_eq!(
        catalog.events_of_type("switch"),
        vec![DropdownOption::new(
            "event.device.statechanged",
            "event.device.statechanged"
        )]
    );
}
