use ahash::AHashMap;
use std::sync::Arc;

use super::block::BlockBody;
use crate::blocks::{
    DEVICE_BLOCK, DEVICE_COMMAND_BLOCK, DEVICE_EVENT_BLOCK, DEVICE_PROPERTY_BLOCK, DeviceBlock,
    DeviceCommandBlock, DeviceEventBlock, DevicePropertyBlock, EVENT_BLOCK, EventBlock,
};
use crate::error::BlockError;
use crate::schema::SchemaCatalog;

/// One custom block definition: retained structure, change handling and
/// value export.
pub trait Block {
    /// Registry name of the definition this block was built from.
    fn block_type(&self) -> &'static str;

    fn body(&self) -> &BlockBody;

    fn body_mut(&mut self) -> &mut BlockBody;

    /// Invoked by the host after any field edit within the block. The
    /// default is a no-op for blocks without reactive fields.
    fn on_change(&mut self) {}

    /// Current values of the block's dynamic fields, keyed by field key,
    /// for consumption by a code-generation step. Blocks without dynamic
    /// fields report nothing.
    fn get_values(&self) -> AHashMap<String, String> {
        AHashMap::new()
    }
}

/// Commits a field edit the way the host editor does: the value is stored
/// first, then the change handler runs, so the handler always observes the
/// edit it was notified about.
pub trait BlockEdit {
    fn edit_field(&mut self, key: &str, value: &str) -> Result<(), BlockError>;
}

impl<B: Block + ?Sized> BlockEdit for B {
    fn edit_field(&mut self, key: &str, value: &str) -> Result<(), BlockError> {
        self.body_mut().set_field_value(key, value)?;
        self.on_change();
        Ok(())
    }
}

type BlockFactory = Box<dyn Fn(Arc<SchemaCatalog>) -> Box<dyn Block> + Send + Sync>;

/// Name-to-definition registry the host editor instantiates blocks from.
pub struct BlockRegistry {
    factories: AHashMap<String, BlockFactory>,
}

impl BlockRegistry {
    /// An empty registry, for hosts that assemble their own block palette.
    pub fn new() -> Self {
        Self {
            factories: AHashMap::new(),
        }
    }

    /// Registry preloaded with the five standard definitions.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(DEVICE_BLOCK, |catalog| Box::new(DeviceBlock::new(catalog)));
        registry.register(DEVICE_EVENT_BLOCK, |catalog| {
            Box::new(DeviceEventBlock::new(catalog))
        });
        registry.register(EVENT_BLOCK, |catalog| Box::new(EventBlock::new(catalog)));
        registry.register(DEVICE_PROPERTY_BLOCK, |catalog| {
            Box::new(DevicePropertyBlock::new(catalog))
        });
        registry.register(DEVICE_COMMAND_BLOCK, |catalog| {
            Box::new(DeviceCommandBlock::new(catalog))
        });
        registry
    }

    /// Registers a definition under a name, replacing any previous holder.
    pub fn register(
        &mut self,
        name: &str,
        factory: impl Fn(Arc<SchemaCatalog>) -> Box<dyn Block> + Send + Sync + 'static,
    ) {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Builds a fresh block of the named definition over the given catalog.
    pub fn instantiate(&self, name: &str, catalog: Arc<SchemaCatalog>) -> Option<Box<dyn Block>> {
        self.factories.get(name).map(|factory| factory(catalog))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered definition names, sorted for stable presentation.
    pub fn block_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
