//! Assets: named entries of a stable pool.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

use super::Balance;

/// A human-readable asset identifier, unique within a pool.
///
/// The engine never interprets the name; it is the key the presentation
/// layer uses to address pool entries (e.g. `"DAI"`, `"USDC"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetName(String);

impl AssetName {
    /// Creates a new `AssetName`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownAsset`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(EngineError::UnknownAsset(String::from(
                "asset name must not be empty",
            )));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for AssetName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AssetName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One entry of a stable pool: a named asset and its recorded balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    name: AssetName,
    balance: Balance,
}

impl Asset {
    /// Creates a new `Asset`.
    #[must_use]
    pub const fn new(name: AssetName, balance: Balance) -> Self {
        Self { name, balance }
    }

    /// Convenience constructor validating both fields from raw values.
    ///
    /// # Errors
    ///
    /// Propagates the [`AssetName`] and [`Balance`] validation errors.
    pub fn try_from_raw(name: impl Into<String>, balance: f64) -> Result<Self> {
        Ok(Self::new(AssetName::new(name)?, Balance::new(balance)?))
    }

    /// Returns the asset name.
    #[must_use]
    pub const fn name(&self) -> &AssetName {
        &self.name
    }

    /// Returns the recorded balance.
    #[must_use]
    pub const fn balance(&self) -> Balance {
        self.balance
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.balance)
    }
}
