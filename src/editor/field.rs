use std::fmt;
use std::sync::Arc;

use crate::schema::SchemaCatalog;

/// One entry of a dropdown field: the text the user reads and the value the
/// block reports when the entry is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The sentinel blank option substituted whenever a query yields
    /// nothing. The host dropdown field fails on an empty option list.
    pub fn placeholder() -> Self {
        Self::new("", "")
    }

    pub fn is_placeholder(&self) -> bool {
        self.label.is_empty() && self.value.is_empty()
    }
}

/// Supplies the current option list of a dropdown field.
///
/// The host queries the provider every time the dropdown opens, so
/// schema-derived implementations always reflect the catalog without the
/// block having to rebuild the field.
pub trait OptionProvider: Send + Sync {
    fn options(&self) -> Vec<DropdownOption>;
}

/// Fixed option list. An empty input list is replaced by the blank
/// placeholder option on construction, so the list is never empty.
pub struct StaticOptions(Vec<DropdownOption>);

impl StaticOptions {
    pub fn new(mut options: Vec<DropdownOption>) -> Self {
        if options.is_empty() {
            options.push(DropdownOption::placeholder());
        }
        Self(options)
    }

    pub fn placeholder() -> Self {
        Self::new(Vec::new())
    }
}

impl OptionProvider for StaticOptions {
    fn options(&self) -> Vec<DropdownOption> {
        self.0.clone()
    }
}

/// Distinct device types drawn from the catalog snapshot.
pub struct DeviceTypeOptions {
    catalog: Arc<SchemaCatalog>,
}

impl DeviceTypeOptions {
    pub fn new(catalog: Arc<SchemaCatalog>) -> Self {
        Self { catalog }
    }
}

impl OptionProvider for DeviceTypeOptions {
    fn options(&self) -> Vec<DropdownOption> {
        self.catalog.device_types()
    }
}

/// Every event name in the schema's global event table.
pub struct AllEventOptions {
    catalog: Arc<SchemaCatalog>,
}

impl AllEventOptions {
    pub fn new(catalog: Arc<SchemaCatalog>) -> Self {
        Self { catalog }
    }
}

impl OptionProvider for AllEventOptions {
    fn options(&self) -> Vec<DropdownOption> {
        self.catalog.all_event_names()
    }
}

/// What a field is and how it renders.
#[derive(Clone)]
pub enum FieldKind {
    /// Inert literal text between editable fields.
    Label(String),
    Dropdown(Arc<dyn OptionProvider>),
    Text { default: String },
    Colour { default: String },
    /// 1x1 blank image keeping an otherwise empty row renderable.
    Placeholder,
}

impl FieldKind {
    /// Whether the field carries a user-editable value.
    pub fn is_value_bearing(&self) -> bool {
        matches!(
            self,
            FieldKind::Dropdown(_) | FieldKind::Text { .. } | FieldKind::Colour { .. }
        )
    }

    /// The value the field holds before any user edit. Dropdowns default to
    /// their first option.
    pub fn default_value(&self) -> Option<String> {
        match self {
            FieldKind::Dropdown(provider) => Some(
                provider
                    .options()
                    .first()
                    .map(|o| o.value.clone())
                    .unwrap_or_default(),
            ),
            FieldKind::Text { default } | FieldKind::Colour { default } => Some(default.clone()),
            FieldKind::Label(_) | FieldKind::Placeholder => None,
        }
    }
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Label(text) => f.debug_tuple("Label").field(text).finish(),
            FieldKind::Dropdown(provider) => {
                f.debug_tuple("Dropdown").field(&provider.options()).finish()
            }
            FieldKind::Text { default } => {
                f.debug_struct("Text").field("default", default).finish()
            }
            FieldKind::Colour { default } => {
                f.debug_struct("Colour").field("default", default).finish()
            }
            FieldKind::Placeholder => f.write_str("Placeholder"),
        }
    }
}

/// Tagged field descriptor: an addressable key plus a rendering kind.
///
/// Rows are rebuilt by constructing the full descriptor list and installing
/// it in one step, never by incremental add/remove of live fields.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub key: String,
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn new(key: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    /// Inert literal text. Shares the conventional "text" key; labels never
    /// enter the value store.
    pub fn label(text: impl Into<String>) -> Self {
        Self::new("text", FieldKind::Label(text.into()))
    }

    /// The inert blank spacer, conventional "empty" key.
    pub fn placeholder() -> Self {
        Self::new("empty", FieldKind::Placeholder)
    }

    pub fn dropdown(key: impl Into<String>, provider: impl OptionProvider + 'static) -> Self {
        Self::new(key, FieldKind::Dropdown(Arc::new(provider)))
    }

    /// Dropdown over a fixed option list (placeholder-padded when empty).
    pub fn static_dropdown(key: impl Into<String>, options: Vec<DropdownOption>) -> Self {
        Self::dropdown(key, StaticOptions::new(options))
    }

    pub fn text(key: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(
            key,
            FieldKind::Text {
                default: default.into(),
            },
        )
    }

    pub fn colour(key: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(
            key,
            FieldKind::Colour {
                default: default.into(),
            },
        )
    }
}
