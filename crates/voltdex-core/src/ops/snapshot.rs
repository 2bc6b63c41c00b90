//! Whole-dataset operations: export, import and reset

use std::time::Instant;

use serde::{Deserialize, Serialize};
use voltdex_core_types::TableName;

use super::store::Store;
use crate::backend::KvBackend;
use crate::errors::{Result, VoltdexError};
use crate::model::{BatteryPack, Car, CarBatteryPack, CellModel};
use crate::rules::integrity::{self, IntegrityViolation};
use crate::{log_op_end, log_op_error, log_op_start};

/// Snapshot of every table, keyed by storage key when serialized
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Export {
    #[serde(default)]
    pub cell_models: Vec<CellModel>,
    #[serde(default)]
    pub battery_packs: Vec<BatteryPack>,
    #[serde(default)]
    pub cars: Vec<Car>,
    #[serde(default)]
    pub car_battery_packs: Vec<CarBatteryPack>,
}

impl Export {
    /// Row count for one table
    pub fn row_count(&self, table: TableName) -> usize {
        match table {
            TableName::CellModels => self.cell_models.len(),
            TableName::BatteryPacks => self.battery_packs.len(),
            TableName::Cars => self.cars.len(),
            TableName::CarBatteryPacks => self.car_battery_packs.len(),
        }
    }
}

impl<B: KvBackend> Store<B> {
    /// Snapshot every table
    ///
    /// # Errors
    ///
    /// Returns backend or serialization errors.
    pub fn export(&self) -> Result<Export> {
        Ok(Export {
            cell_models: self.load()?,
            battery_packs: self.load()?,
            cars: self.load()?,
            car_battery_packs: self.load()?,
        })
    }

    /// Replace every table with the contents of `export`
    ///
    /// The snapshot is validated as a whole first; an inconsistent snapshot
    /// leaves the store untouched.
    ///
    /// # Errors
    ///
    /// * `InvalidImport` - duplicate or zero ids, or a dangling foreign key
    /// * backend or serialization errors
    pub fn import(&mut self, export: Export) -> Result<()> {
        log_op_start!("import");
        let start = Instant::now();

        self.import_impl(export).map_err(|e| {
            log_op_error!(
                "import",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!("import", duration_ms = start.elapsed().as_millis() as u64);
        Ok(())
    }

    fn import_impl(&mut self, export: Export) -> Result<()> {
        let violations = integrity::check(&export);
        if let Some(first) = violations.first() {
            return Err(VoltdexError::InvalidImport {
                reason: format!("{} ({} violation(s) total)", first, violations.len()),
            });
        }

        self.save(&export.cell_models)?;
        self.save(&export.cars)?;
        self.save(&export.battery_packs)?;
        self.save(&export.car_battery_packs)
    }

    /// Clear all four tables and load the built-in dataset again
    ///
    /// # Errors
    ///
    /// Returns backend or serialization errors.
    pub fn reset(&mut self) -> Result<()> {
        log_op_start!("reset");
        let start = Instant::now();

        self.reset_impl().map_err(|e| {
            log_op_error!(
                "reset",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!("reset", duration_ms = start.elapsed().as_millis() as u64);
        Ok(())
    }

    fn reset_impl(&mut self) -> Result<()> {
        for table in TableName::ALL {
            self.drop_table(table)?;
        }
        crate::seed::seed(self)
    }

    /// Scan persisted tables for duplicate ids and dangling foreign keys
    ///
    /// The storage layer enforces no schema, so entries edited outside the
    /// store can drift. An empty result means the dataset is consistent.
    ///
    /// # Errors
    ///
    /// Returns backend or serialization errors.
    pub fn check_integrity(&self) -> Result<Vec<IntegrityViolation>> {
        Ok(integrity::check(&self.export()?))
    }
}
