//! XML serializer backend (quick-xml serde support)
//!
//! The root element is named after the model type. XML text content loses
//! leading and trailing whitespace on decode, so models with padded string
//! values are refused at encode time instead of coming back altered.

use serde_json::Value;

use crate::domain::ports::serializer::model_name;
use crate::domain::{ContentModel, ModelSerializer, SerializationError};

#[derive(Debug, Clone)]
pub struct XmlModelSerializer {
    enabled: bool,
}

impl XmlModelSerializer {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for XmlModelSerializer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_xml_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// First string value whose edge whitespace wouldn't survive as text content.
fn padded_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) if s.trim_matches(is_xml_space).len() != s.len() => Some(s.as_str()),
        Value::Array(items) => items.iter().find_map(padded_text),
        Value::Object(fields) => fields.values().find_map(padded_text),
        _ => None,
    }
}

impl ModelSerializer for XmlModelSerializer {
    fn serialize<T: ContentModel>(&self, model: &T) -> Result<String, SerializationError> {
        if !self.enabled {
            return Err(SerializationError::Unavailable(self.name()));
        }
        let encode_error = |reason: String| SerializationError::Encode {
            model: model_name::<T>(),
            reason,
        };

        let text = quick_xml::se::to_string(model).map_err(|e| encode_error(e.to_string()))?;
        let tree = serde_json::to_value(model).map_err(|e| encode_error(e.to_string()))?;
        if let Some(padded) = padded_text(&tree) {
            return Err(encode_error(format!(
                "value {padded:?} has leading or trailing whitespace"
            )));
        }
        Ok(text)
    }

    fn deserialize<T: ContentModel>(&self, input: &str) -> Result<T, SerializationError> {
        if !self.enabled {
            return Err(SerializationError::Unavailable(self.name()));
        }
        quick_xml::de::from_str(input).map_err(|e| SerializationError::Decode {
            model: model_name::<T>(),
            reason: e.to_string(),
        })
    }

    fn is_available(&self) -> bool {
        self.enabled
    }

    fn name(&self) -> &'static str {
        "xml"
    }
}
