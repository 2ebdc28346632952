//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the domoblocks
//! crate, so a frontend (or a test) can pull in the whole block surface
//! with a single `use`.
//!
//! # Example
//!
//! ```rust,no_run
//! use domoblocks::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let schema_json = std::fs::read_to_string("path/to/schema.json")?;
//! let devices_json = std::fs::read_to_string("path/to/devices.json")?;
//! let catalog = Arc::new(SchemaCatalog::from_json(&schema_json, &devices_json)?);
//!
//! let registry = BlockRegistry::standard();
//! let mut block = registry
//!     .instantiate("device", catalog.clone())
//!     .expect("definition is registered");
//! block.edit_field("TYPE", "dimmer")?;
//! # Ok(())
//! # }
//! ```

// Schema model and accessor
pub use crate::schema::{
    CommandEntry, CommandTable, Device, PropertyEntry, PropertyKind, PropertyTable, Schema,
    SchemaCatalog,
};

// Host-editor surface
pub use crate::editor::{
    Block, BlockBody, BlockEdit, BlockRegistry, Connector, DropdownOption, FieldDef, FieldKind,
    OptionProvider, StaticOptions,
};

// The five block definitions
pub use crate::blocks::{
    DEVICE_BLOCK, DEVICE_COMMAND_BLOCK, DEVICE_EVENT_BLOCK, DEVICE_PROPERTY_BLOCK, DeviceBlock,
    DeviceCommandBlock, DeviceEventBlock, DevicePropertyBlock, EVENT_BLOCK, EventBlock,
};

// Error types
pub use crate::error::{BlockError, SchemaError};

// Commonly paired imports
pub use ahash::AHashMap;
pub use std::sync::Arc;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
