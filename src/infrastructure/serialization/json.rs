//! JSON serializer backend (serde_json)

use crate::domain::ports::serializer::model_name;
use crate::domain::{ContentModel, ModelSerializer, SerializationError};

#[derive(Debug, Clone)]
pub struct JsonModelSerializer {
    pretty: bool,
    enabled: bool,
}

impl JsonModelSerializer {
    pub fn new() -> Self {
        Self {
            pretty: false,
            enabled: true,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for JsonModelSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSerializer for JsonModelSerializer {
    fn serialize<T: ContentModel>(&self, model: &T) -> Result<String, SerializationError> {
        if !self.enabled {
            return Err(SerializationError::Unavailable(self.name()));
        }
        let encoded = if self.pretty {
            serde_json::to_string_pretty(model)
        } else {
            serde_json::to_string(model)
        };
        encoded.map_err(|e| SerializationError::Encode {
            model: model_name::<T>(),
            reason: e.to_string(),
        })
    }

    fn deserialize<T: ContentModel>(&self, input: &str) -> Result<T, SerializationError> {
        if !self.enabled {
            return Err(SerializationError::Unavailable(self.name()));
        }
        serde_json::from_str(input).map_err(|e| SerializationError::Decode {
            model: model_name::<T>(),
            reason: e.to_string(),
        })
    }

    fn is_available(&self) -> bool {
        self.enabled
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
