use ahash::AHashMap;
use tracing::warn;

use super::field::FieldDef;
use crate::error::BlockError;

/// How a block connects to the surrounding visual program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// Produces a value consumable as an expression.
    Value,
    /// Statement-shaped: links to a previous and a next statement.
    Statement,
}

/// A single named row of fields within a block (the host's "dummy input").
#[derive(Debug)]
pub struct InputRow {
    name: String,
    fields: Vec<FieldDef>,
}

impl InputRow {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }
}

/// Host-side retained structure of one visual block: named field rows, the
/// committed values of its value-bearing fields, and cosmetic attributes.
///
/// Value-bearing field keys form a single namespace across all rows, which
/// is why registering a second field under a live key is an error. Rebuilds
/// go through [`BlockBody::set_row`], which tears the old generation down
/// before the new one registers and therefore never trips that check
/// against itself.
#[derive(Debug)]
pub struct BlockBody {
    inputs: Vec<InputRow>,
    values: AHashMap<String, String>,
    connector: Connector,
    colour: u16,
    tooltip: String,
}

impl BlockBody {
    pub fn new(connector: Connector) -> Self {
        Self {
            inputs: Vec::new(),
            values: AHashMap::new(),
            connector,
            colour: 0,
            tooltip: String::new(),
        }
    }

    /// Hue of the block in the editor palette.
    pub fn with_colour(mut self, colour: u16) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    pub fn connector(&self) -> Connector {
        self.connector
    }

    pub fn colour(&self) -> u16 {
        self.colour
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn inputs(&self) -> &[InputRow] {
        &self.inputs
    }

    pub fn input(&self, name: &str) -> Option<&InputRow> {
        self.inputs.iter().find(|i| i.name == name)
    }

    /// Creates the named row if absent, then atomically installs `fields`
    /// as its full field list. The old fields and their values are torn
    /// down first. A field that still fails to register (its key is live on
    /// another row) is dropped with a diagnostic rather than failing the
    /// rebuild.
    pub fn set_row(&mut self, input: &str, fields: Vec<FieldDef>) {
        match self.inputs.iter().position(|i| i.name == input) {
            Some(idx) => {
                let old = std::mem::take(&mut self.inputs[idx].fields);
                for field in &old {
                    if field.kind.is_value_bearing() {
                        self.values.remove(&field.key);
                    }
                }
            }
            None => self.inputs.push(InputRow {
                name: input.to_string(),
                fields: Vec::new(),
            }),
        }
        for field in fields {
            if let Err(err) = self.append_field(input, field) {
                warn!(%err, input, "dropping field that failed to register");
            }
        }
    }

    /// Removes a whole row and the values of its fields.
    pub fn remove_input(&mut self, name: &str) -> Result<(), BlockError> {
        let idx = self
            .inputs
            .iter()
            .position(|i| i.name == name)
            .ok_or_else(|| BlockError::UnknownInput(name.to_string()))?;
        let row = self.inputs.remove(idx);
        for field in &row.fields {
            if field.kind.is_value_bearing() {
                self.values.remove(&field.key);
            }
        }
        Ok(())
    }

    /// Appends one field to an existing row, seeding its default value.
    pub fn append_field(&mut self, input: &str, field: FieldDef) -> Result<(), BlockError> {
        if field.kind.is_value_bearing() && self.values.contains_key(&field.key) {
            return Err(BlockError::DuplicateField {
                input: input.to_string(),
                key: field.key.clone(),
            });
        }
        let row = self
            .inputs
            .iter_mut()
            .find(|i| i.name == input)
            .ok_or_else(|| BlockError::UnknownInput(input.to_string()))?;
        if let Some(default) = field.kind.default_value() {
            self.values.insert(field.key.clone(), default);
        }
        row.fields.push(field);
        Ok(())
    }

    /// Swaps one field for another in place, keeping its position in the
    /// row. The old field's value is dropped and the replacement's default
    /// is seeded.
    pub fn replace_field(
        &mut self,
        input: &str,
        key: &str,
        field: FieldDef,
    ) -> Result<(), BlockError> {
        if field.kind.is_value_bearing()
            && field.key != key
            && self.values.contains_key(&field.key)
        {
            return Err(BlockError::DuplicateField {
                input: input.to_string(),
                key: field.key,
            });
        }
        let row_idx = self
            .inputs
            .iter()
            .position(|i| i.name == input)
            .ok_or_else(|| BlockError::UnknownInput(input.to_string()))?;
        let field_idx = self.inputs[row_idx]
            .fields
            .iter()
            .position(|f| f.key == key)
            .ok_or_else(|| BlockError::UnknownField(key.to_string()))?;
        let old = self.inputs[row_idx].fields.remove(field_idx);
        if old.kind.is_value_bearing() {
            self.values.remove(&old.key);
        }
        if let Some(default) = field.kind.default_value() {
            self.values.insert(field.key.clone(), default);
        }
        self.inputs[row_idx].fields.insert(field_idx, field);
        Ok(())
    }

    /// Committed value of a value-bearing field.
    pub fn field_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Commits a value to an existing value-bearing field.
    pub fn set_field_value(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), BlockError> {
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(BlockError::UnknownField(key.to_string())),
        }
    }

    /// Current values of the value-bearing fields of one row, keyed by
    /// field key. Labels and placeholders are excluded; a missing row
    /// yields an empty map.
    pub fn row_values(&self, input: &str) -> AHashMap<String, String> {
        let mut out = AHashMap::new();
        if let Some(row) = self.input(input) {
            for field in row.fields() {
                if field.kind.is_value_bearing() {
                    if let Some(value) = self.values.get(&field.key) {
                        out.insert(field.key.clone(), value.clone());
                    }
                }
            }
        }
        out
    }
}
