use crate::error::Result;
use serde::Serialize;

/// Base trait for all deck-list result objects
pub trait JsonObject {
    /// Convert to JSON string
    fn to_json_string(&self) -> Result<String>
    where
        Self: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    /// Convert to JSON value
    fn to_json_value(&self) -> Result<serde_json::Value>
    where
        Self: Serialize,
    {
        Ok(serde_json::to_value(self)?)
    }
}
