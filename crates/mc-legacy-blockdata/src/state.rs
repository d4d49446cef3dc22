//! Immutable modern block states: a block name plus named properties.
//!
//! A [`PropertyState`] is a value. Every setter returns a new state and
//! leaves the receiver untouched, so builders can derive from a shared
//! default without aliasing problems.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Namespace prefix of every vanilla block name.
pub const MINECRAFT_NAMESPACE: &str = "minecraft:";

/// A single block state property value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    Str(String),
}

impl PropertyValue {
    /// Parse a printed token back into the narrowest matching value.
    pub fn parse(token: &str) -> Self {
        match token {
            "true" => PropertyValue::Bool(true),
            "false" => PropertyValue::Bool(false),
            _ => match token.parse::<i32>() {
                Ok(i) => PropertyValue::Int(i),
                Err(_) => PropertyValue::Str(token.to_string()),
            },
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{b}"),
            PropertyValue::Int(i) => write!(f, "{i}"),
            PropertyValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<u8> for PropertyValue {
    fn from(v: u8) -> Self {
        PropertyValue::Int(v as i32)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Str(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Str(v)
    }
}

/// One concrete modern block configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyState {
    name: String,
    #[serde(default)]
    properties: BTreeMap<String, PropertyValue>,
}

impl PropertyState {
    /// A state without properties. Names without a namespace get `minecraft:`.
    pub fn new(name: &str) -> Self {
        let name = if name.contains(':') {
            name.to_string()
        } else {
            format!("{MINECRAFT_NAMESPACE}{name}")
        };
        Self {
            name,
            properties: BTreeMap::new(),
        }
    }

    /// The namespaced block name, e.g. `minecraft:chest`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.properties.get(property)
    }

    pub fn has(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Properties in name order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Return a copy with `property` added or overridden.
    #[must_use]
    pub fn with(&self, property: &str, value: impl Into<PropertyValue>) -> Self {
        let mut next = self.clone();
        next.properties.insert(property.to_string(), value.into());
        next
    }

    /// Return a copy with every `(property, value)` pair applied in order.
    #[must_use]
    pub fn with_all<'a, V>(&self, props: impl IntoIterator<Item = (&'a str, V)>) -> Self
    where
        V: Into<PropertyValue>,
    {
        let mut next = self.clone();
        for (k, v) in props {
            next.properties.insert(k.to_string(), v.into());
        }
        next
    }
}

impl fmt::Display for PropertyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.properties.is_empty() {
            return Ok(());
        }
        f.write_str("[")?;
        for (i, (k, v)) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{k}={v}")?;
        }
        f.write_str("]")
    }
}

/// Error returned when parsing `name[key=value,...]` fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed block state: {0}")]
pub struct ParseStateError(pub String);

impl FromStr for PropertyState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(open) = s.find('[') else {
            if s.is_empty() {
                return Err(ParseStateError(s.to_string()));
            }
            return Ok(PropertyState::new(s));
        };
        if !s.ends_with(']') || open == 0 {
            return Err(ParseStateError(s.to_string()));
        }
        let mut state = PropertyState::new(&s[..open]);
        let body = &s[open + 1..s.len() - 1];
        for pair in body.split(',').filter(|p| !p.is_empty()) {
            let (k, v) = pair
                .split_once('=')
                .ok_or_else(|| ParseStateError(s.to_string()))?;
            state
                .properties
                .insert(k.trim().to_string(), PropertyValue::parse(v.trim()));
        }
        Ok(state)
    }
}
