use thiserror::Error;

/// Errors that can occur while loading the schema document or the device
/// list snapshot.
#[derive(Error, Debug, Clone)]
pub enum SchemaError {
    #[error("Failed to parse schema JSON: {0}")]
    JsonParse(String),

    #[error("Failed to parse device list JSON: {0}")]
    DeviceListParse(String),
}

/// Errors surfaced by the host-side field registry of a block.
///
/// Block change handlers never propagate these: a failed teardown or a
/// field that cannot register is reported to the diagnostic channel and the
/// rebuild degrades, keeping the block usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("A field keyed '{key}' is already registered on this block (input '{input}')")]
    DuplicateField { input: String, key: String },

    #[error("Block has no input row named '{0}'")]
    UnknownInput(String),

    #[error("Block has no field keyed '{0}'")]
    UnknownField(String),
}
