//! Table names and their storage keys

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four persisted tables
///
/// The serialized form is the storage key used by every backend
/// (`cellModels`, `batteryPacks`, `cars`, `carBatteryPacks`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TableName {
    #[serde(rename = "cellModels")]
    CellModels,
    #[serde(rename = "batteryPacks")]
    BatteryPacks,
    #[serde(rename = "cars")]
    Cars,
    #[serde(rename = "carBatteryPacks")]
    CarBatteryPacks,
}

impl TableName {
    /// All tables in dependency order: a table only references tables before it.
    pub const ALL: [TableName; 4] = [
        TableName::CellModels,
        TableName::Cars,
        TableName::BatteryPacks,
        TableName::CarBatteryPacks,
    ];

    /// Storage key for this table
    pub fn key(&self) -> &'static str {
        match self {
            TableName::CellModels => "cellModels",
            TableName::BatteryPacks => "batteryPacks",
            TableName::Cars => "cars",
            TableName::CarBatteryPacks => "carBatteryPacks",
        }
    }

    /// Tables (and the foreign-key field within them) that reference this table.
    ///
    /// A record in `self` cannot be deleted while any of these hold its id.
    pub fn dependents(&self) -> &'static [(TableName, &'static str)] {
        match self {
            TableName::CellModels => &[(TableName::BatteryPacks, "cellModelId")],
            TableName::BatteryPacks => &[(TableName::CarBatteryPacks, "batteryPackId")],
            TableName::Cars => &[(TableName::CarBatteryPacks, "carId")],
            TableName::CarBatteryPacks => &[],
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown table name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTableName(pub String);

impl fmt::Display for UnknownTableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown table: {}", self.0)
    }
}

impl std::error::Error for UnknownTableName {}

impl FromStr for TableName {
    type Err = UnknownTableName;

    /// Accepts storage keys and their kebab-case aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cellModels" | "cell-models" => Ok(TableName::CellModels),
            "batteryPacks" | "battery-packs" => Ok(TableName::BatteryPacks),
            "cars" => Ok(TableName::Cars),
            "carBatteryPacks" | "car-battery-packs" => Ok(TableName::CarBatteryPacks),
            other => Err(UnknownTableName(other.to_string())),
        }
    }
}
