use super::FieldError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::Display;

/// Children of an object node, ordered by key.
pub type AttrMap = BTreeMap<String, Attr>;

/// One node of an object body as returned by the API server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attr {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<Self>),
    Object(AttrMap),
}

/// The variant of an [`Attr`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum AttrKind {
    #[strum(serialize = "null")]
    Null,
    #[strum(serialize = "a boolean")]
    Bool,
    #[strum(serialize = "a number")]
    Number,
    #[strum(serialize = "a string")]
    String,
    #[strum(serialize = "a list")]
    Array,
    #[strum(serialize = "an object")]
    Object,
}

impl Attr {
    #[must_use]
    pub const fn kind(&self) -> AttrKind {
        match self {
            Self::Null => AttrKind::Null,
            Self::Bool(_) => AttrKind::Bool,
            Self::Number(_) => AttrKind::Number,
            Self::String(_) => AttrKind::String,
            Self::Array(_) => AttrKind::Array,
            Self::Object(_) => AttrKind::Object,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&AttrMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Direct child of an object node.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Walk `path` through nested objects.
    ///
    /// Missing keys, intermediate values that are not objects, and a trailing
    /// `null` all report [`FieldError::Absent`].
    pub fn lookup(&self, path: &[&str]) -> Result<&Self, FieldError> {
        let mut current = self;
        for segment in path {
            current = current.get(segment).ok_or_else(|| FieldError::absent(path))?;
        }

        if matches!(current, Self::Null) {
            return Err(FieldError::absent(path));
        }

        Ok(current)
    }

    pub fn lookup_str(&self, path: &[&str]) -> Result<&str, FieldError> {
        let node = self.lookup(path)?;
        node.as_str().ok_or_else(|| FieldError::wrong_shape(path, AttrKind::String, node.kind()))
    }

    pub fn lookup_bool(&self, path: &[&str]) -> Result<bool, FieldError> {
        let node = self.lookup(path)?;
        node.as_bool().ok_or_else(|| FieldError::wrong_shape(path, AttrKind::Bool, node.kind()))
    }

    pub fn lookup_array(&self, path: &[&str]) -> Result<&[Self], FieldError> {
        let node = self.lookup(path)?;
        node.as_array().ok_or_else(|| FieldError::wrong_shape(path, AttrKind::Array, node.kind()))
    }

    pub fn lookup_object(&self, path: &[&str]) -> Result<&AttrMap, FieldError> {
        let node = self.lookup(path)?;
        node.as_object().ok_or_else(|| FieldError::wrong_shape(path, AttrKind::Object, node.kind()))
    }

    /// `metadata.name` of an object body.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.lookup_str(&["metadata", "name"]).ok()
    }

    /// `metadata.namespace` of an object body.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.lookup_str(&["metadata", "namespace"]).ok()
    }

    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.get("apiVersion").and_then(Self::as_str)
    }

    #[must_use]
    pub fn object_kind(&self) -> Option<&str> {
        self.get("kind").and_then(Self::as_str)
    }

    /// Scalar rendering used by the text printers; `None` for lists and objects.
    #[must_use]
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Self::Null => Some("null".to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(n.to_string()),
            Self::String(s) => Some(s.clone()),
            Self::Array(_) | Self::Object(_) => None,
        }
    }
}

impl From<serde_json::Value> for Attr {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(map) => Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
        }
    }
}

impl From<&str> for Attr {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Attr {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Attr {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<AttrMap> for Attr {
    fn from(value: AttrMap) -> Self {
        Self::Object(value)
    }
}
