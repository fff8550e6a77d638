//! Serializer port: converts content models to and from text

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::error::SerializationError;

/// Marker for types that can travel through a [`ModelSerializer`].
pub trait ContentModel: Serialize + DeserializeOwned {}

/// A content model serialization backend.
///
/// Implementations must keep `is_available` free of side effects so callers
/// can probe it repeatedly before picking a backend.
pub trait ModelSerializer {
    /// Encode a model as text.
    fn serialize<T: ContentModel>(&self, model: &T) -> Result<String, SerializationError>;

    /// Reconstruct a model from text produced by [`ModelSerializer::serialize`].
    fn deserialize<T: ContentModel>(&self, input: &str) -> Result<T, SerializationError>;

    /// Whether the backend can currently be used.
    fn is_available(&self) -> bool;

    /// Short backend name for logs and errors.
    fn name(&self) -> &'static str;
}

/// Short type name used in serialization errors.
pub(crate) fn model_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Link;
    use crate::shared::PaginatedResult;

    #[test]
    fn model_name_drops_path_and_generics() {
        assert_eq!(model_name::<Link>(), "Link");
        assert_eq!(model_name::<PaginatedResult<Link>>(), "PaginatedResult");
    }
}
