//! # Domoblocks - Schema-Driven Blocks for a Visual Automation Editor
//!
//! **Domoblocks** provides the custom block definitions a visual,
//! drag-and-drop rule editor needs to let users compose references to
//! home-automation devices, their events, properties and commands. The
//! blocks render dropdown menus and input fields that change shape based
//! on the currently selected device type, driven entirely by the schema
//! the automation system serves.
//!
//! ## Core Workflow
//!
//! The crate is host-agnostic: it models the retained block structure a
//! visual editor keeps per block (rows of fields, committed values, a
//! change notification), and the frontend maps that structure onto its own
//! widgets. The primary workflow is:
//!
//! 1.  **Load the snapshot**: Parse the schema document and the device
//!     list into a [`schema::SchemaCatalog`], once per editor session.
//! 2.  **Register the blocks**: Build a [`editor::BlockRegistry`] (the
//!     standard one carries the five stock definitions) and hand it to the
//!     host for palette population.
//! 3.  **Instantiate and drive**: For every block the user drags in,
//!     instantiate it over the shared catalog; commit each field edit with
//!     [`editor::BlockEdit::edit_field`], which notifies the block so it
//!     can rebuild its dependent fields.
//! 4.  **Harvest**: A code-generation step reads each block's
//!     [`editor::Block::get_values`] to emit the final automation rule.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use domoblocks::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let schema_json = std::fs::read_to_string("schema.json")?;
//!     let devices_json = std::fs::read_to_string("devices.json")?;
//!     let catalog = Arc::new(SchemaCatalog::from_json(&schema_json, &devices_json)?);
//!
//!     let registry = BlockRegistry::standard();
//!     let mut block = registry
//!         .instantiate(DEVICE_PROPERTY_BLOCK, catalog.clone())
//!         .expect("definition is registered");
//!
//!     // The host commits a field edit, then the block reshapes itself.
//!     block.edit_field("TYPE", "dimmer")?;
//!     block.edit_field("PROP", "level")?;
//!     for (key, value) in block.get_values() {
//!         println!("{key} = {value}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Schema entries that are missing or incomplete never fail a query: the
//! affected dropdown degrades to a single blank option, keeping the editor
//! usable against sparse schemas.

pub mod blocks;
pub mod editor;
pub mod error;
pub mod prelude;
pub mod schema;
