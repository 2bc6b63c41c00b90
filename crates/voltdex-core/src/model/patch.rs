//! Explicit field-presence wrapper for partial updates

use serde::{Deserialize, Deserializer};

/// One updatable field of a patch
///
/// `Keep` leaves the stored value untouched; `Set` replaces it. For nullable
/// attributes `T` is an `Option`, so `Set(None)` clears the value.
///
/// When deserializing a patch struct marked `#[serde(default)]`, an absent key
/// becomes `Keep` and a key present with `null` becomes `Set(None)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Keep,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    /// The supplied value, if any
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Keep => None,
            Patch::Set(v) => Some(v),
        }
    }

    /// Write the supplied value into `slot`; no-op for `Keep`
    pub fn apply_to(self, slot: &mut T) {
        if let Patch::Set(v) = self {
            *slot = v;
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Set(value)
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Set)
    }
}
