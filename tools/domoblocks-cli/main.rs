use clap::Parser;
use domoblocks::prelude::*;
use std::fs;

/// Inspect what the editor blocks would offer for a schema and device list
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the schema JSON file
    schema_path: String,
    /// Path to the device list JSON file
    devices_path: String,

    /// Only print the entries of this device type
    #[arg(short = 't', long)]
    devicetype: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // --- 1. File Loading ---
    let schema_json = fs::read_to_string(&cli.schema_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read schema file '{}': {}",
            &cli.schema_path, e
        ))
    });
    let devices_json = fs::read_to_string(&cli.devices_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read device list file '{}': {}",
            &cli.devices_path, e
        ))
    });

    // --- 2. Catalog Construction ---
    let catalog = SchemaCatalog::from_json(&schema_json, &devices_json)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    // --- 3. Projection Dump ---
    let types: Vec<String> = catalog
        .device_types()
        .into_iter()
        .map(|o| o.value)
        .filter(|t| match &cli.devicetype {
            Some(wanted) => t == wanted,
            None => !t.is_empty(),
        })
        .collect();

    if types.is_empty() {
        println!("No matching device types.");
        return;
    }

    for devicetype in &types {
        println!("== {devicetype} ==");

        println!("  devices:");
        for option in catalog.devices_of_type(devicetype) {
            print_option(&option);
        }

        println!("  events:");
        for option in catalog.events_of_type(devicetype) {
            print_option(&option);
        }

        println!("  properties:");
        let properties = catalog.properties_of_type(devicetype);
        if properties.is_empty() {
            println!("    (none)");
        }
        for prop in properties.iter() {
            if prop.options.is_empty() {
                println!("    {} [{}] {:?}", prop.name, prop.id, prop.kind);
            } else {
                println!(
                    "    {} [{}] {:?} options={}",
                    prop.name,
                    prop.id,
                    prop.kind,
                    prop.options.join("|")
                );
            }
        }

        println!("  commands:");
        let commands = catalog.commands_of_type(devicetype);
        if commands.is_empty() {
            println!("    (none)");
        }
        for cmd in commands.iter() {
            let params: Vec<&str> = cmd.parameters.iter().map(|p| p.key.as_str()).collect();
            if params.is_empty() {
                println!("    {} [{}]", cmd.name, cmd.id);
            } else {
                println!("    {} [{}] parameters={}", cmd.name, cmd.id, params.join(","));
            }
        }
        println!();
    }
}

fn print_option(option: &DropdownOption) {
    if option.is_placeholder() {
        println!("    (none)");
    } else {
        println!("    {} [{}]", option.label, option.value);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
