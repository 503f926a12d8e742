use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Reference to an uploaded image held by an asset store.
///
/// Serialized as a plain string inside the configuration record. The value is
/// opaque to everything but the store that issued it; older records may hold a
/// path such as `saved_birthday_data/images/a.png`, which stores resolve by its
/// final component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(value: impl Into<String>) -> Self {
        AssetRef(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for AssetRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetRef {
    fn from(value: &str) -> Self {
        AssetRef::new(value)
    }
}

impl From<String> for AssetRef {
    fn from(value: String) -> Self {
        AssetRef(value)
    }
}
