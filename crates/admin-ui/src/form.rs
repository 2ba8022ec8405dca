//! Declarative form schemas
//!
//! A schema lists the fields a resource form renders, how each one is
//! rendered and whether it is required. Page objects derive control ids from
//! it and test doubles derive the controls they simulate from it.

use serde::{Deserialize, Serialize};

/// One entry of a choice list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// How a field is rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    Email,
    Color,
    Checkbox {
        #[serde(default)]
        default: bool,
    },
    /// Select box over a fixed list, optionally led by an empty placeholder
    Choice {
        choices: Vec<Choice>,
        #[serde(default)]
        placeholder: bool,
    },
    /// Select box over resources of another kind (currencies, locales, ...)
    Entity {
        resource: String,
        #[serde(default)]
        multiple: bool,
    },
}

impl FieldKind {
    pub fn is_select(&self) -> bool {
        matches!(self, FieldKind::Choice { .. } | FieldKind::Entity { .. })
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, FieldKind::Entity { multiple: true, .. })
    }
}

/// A single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Snake-case key used by validation messages and step text
    pub key: String,
    /// Property name the control is bound to
    pub property: String,
    /// Human label, as written in "Please enter channel {label}."
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    /// Rendered disabled once the resource exists
    #[serde(default)]
    pub locked_on_update: bool,
}

impl FormField {
    pub fn new(key: impl Into<String>, property: impl Into<String>, kind: FieldKind) -> Self {
        let key = key.into();
        let label = key.replace('_', " ");
        Self {
            key,
            property: property.into(),
            label,
            kind,
            required: false,
            locked_on_update: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn locked_on_update(mut self) -> Self {
        self.locked_on_update = true;
        self
    }
}

/// Fields of one resource form, under a block prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    block_prefix: String,
    fields: Vec<FormField>,
}

impl FormSchema {
    pub fn new(block_prefix: impl Into<String>) -> Self {
        Self {
            block_prefix: block_prefix.into(),
            fields: Vec::new(),
        }
    }

    pub fn add(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// DOM id of the control bound to `key`
    pub fn control_id(&self, key: &str) -> Option<String> {
        self.field(key)
            .map(|f| format!("{}_{}", self.block_prefix, f.property))
    }

    /// Reverse of [`control_id`](Self::control_id)
    pub fn field_by_control_id(&self, id: &str) -> Option<&FormField> {
        let property = id.strip_prefix(&self.block_prefix)?.strip_prefix('_')?;
        self.fields.iter().find(|f| f.property == property)
    }
}
