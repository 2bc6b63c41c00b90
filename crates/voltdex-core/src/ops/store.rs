use std::time::Instant;

use voltdex_core_types::TableName;

use crate::backend::KvBackend;
use crate::errors::{Result, VoltdexError};
use crate::model::{BatteryPack, Car, CarBatteryPack, CellModel, ForeignKey, Record};
use crate::{log_op_end, log_op_error, log_op_start};

/// Relational store over a key-value backend
///
/// Each table lives in one backend entry as a JSON array. Every operation
/// reads what it needs and writes the full modified table back before
/// returning; nothing is cached between calls.
///
/// Mutations take `&mut self`, so a store has a single writer.
#[derive(Debug)]
pub struct Store<B: KvBackend> {
    backend: B,
}

impl<B: KvBackend> Store<B> {
    /// Wrap a backend without seeding
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Wrap a backend, seeding the built-in dataset on first use
    ///
    /// First use means the `cellModels` entry is absent.
    ///
    /// # Errors
    ///
    /// Returns backend or serialization errors raised while seeding.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self::new(backend);
        if !store.is_initialized()? {
            crate::seed::seed(&mut store)?;
        }
        Ok(store)
    }

    /// Whether the backend already holds a `cellModels` entry
    ///
    /// # Errors
    ///
    /// Returns backend errors.
    pub fn is_initialized(&self) -> Result<bool> {
        Ok(self.backend.get(TableName::CellModels.key())?.is_some())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    // ===== Table IO =====

    pub(crate) fn load<R: Record>(&self) -> Result<Vec<R>> {
        match self.backend.get(R::TABLE.key())? {
            None => Ok(Vec::new()),
            Some(json) => Ok(serde_json::from_str(&json)?),
        }
    }

    pub(crate) fn save<R: Record>(&mut self, rows: &[R]) -> Result<()> {
        let json = serde_json::to_string(rows)?;
        self.backend.set(R::TABLE.key(), &json)?;
        tracing::debug!(table = R::TABLE.key(), row_count = rows.len(), "table persisted");
        Ok(())
    }

    pub(crate) fn drop_table(&mut self, table: TableName) -> Result<()> {
        self.backend.remove(table.key())
    }

    /// Ids and held foreign keys for every row of `table`
    fn references_in(&self, table: TableName) -> Result<Vec<(u64, Vec<ForeignKey>)>> {
        fn collect<R: Record>(rows: Vec<R>) -> Vec<(u64, Vec<ForeignKey>)> {
            rows.iter().map(|r| (r.id(), r.references())).collect()
        }
        Ok(match table {
            TableName::CellModels => collect(self.load::<CellModel>()?),
            TableName::BatteryPacks => collect(self.load::<BatteryPack>()?),
            TableName::Cars => collect(self.load::<Car>()?),
            TableName::CarBatteryPacks => collect(self.load::<CarBatteryPack>()?),
        })
    }

    fn ensure_references_exist(&self, refs: &[ForeignKey]) -> Result<()> {
        for fk in refs {
            let exists = self
                .references_in(fk.target)?
                .iter()
                .any(|(id, _)| *id == fk.id);
            if !exists {
                return Err(VoltdexError::InvalidReference {
                    table: fk.target,
                    field: fk.field,
                    id: fk.id,
                });
            }
        }
        Ok(())
    }

    /// First row in a dependent table whose foreign key points at `table`/`id`
    fn first_dependent(&self, table: TableName, id: u64) -> Result<Option<(TableName, u64)>> {
        for (dependent_table, field) in table.dependents() {
            let hit = self
                .references_in(*dependent_table)?
                .into_iter()
                .find(|(_, refs)| {
                    refs.iter()
                        .any(|fk| fk.field == *field && fk.target == table && fk.id == id)
                });
            if let Some((dependent_id, _)) = hit {
                return Ok(Some((*dependent_table, dependent_id)));
            }
        }
        Ok(None)
    }

    // ===== CRUD =====

    /// All rows of a table in storage order
    ///
    /// # Errors
    ///
    /// Returns backend or serialization errors.
    pub fn list<R: Record>(&self) -> Result<Vec<R>> {
        self.load()
    }

    /// The row with the given id, if any
    ///
    /// # Errors
    ///
    /// Returns backend or serialization errors. A missing id is `Ok(None)`.
    pub fn get<R: Record>(&self, id: u64) -> Result<Option<R>> {
        Ok(self.load::<R>()?.into_iter().find(|r| r.id() == id))
    }

    /// Insert a new row, assigning `max(ids) + 1`
    ///
    /// Every non-null foreign key in `new` must resolve. Nothing is written
    /// when validation fails.
    ///
    /// # Errors
    ///
    /// * `InvalidReference` - a supplied foreign key names a missing record
    /// * backend or serialization errors
    pub fn create<R: Record>(&mut self, new: R::New) -> Result<R> {
        let table = R::TABLE.key();
        log_op_start!("create", table = table);
        let start = Instant::now();

        let record = self.create_impl::<R>(new).map_err(|e| {
            log_op_error!(
                "create",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                table = table
            );
            e
        })?;

        log_op_end!(
            "create",
            duration_ms = start.elapsed().as_millis() as u64,
            table = table,
            record_id = record.id()
        );
        Ok(record)
    }

    fn create_impl<R: Record>(&mut self, new: R::New) -> Result<R> {
        self.ensure_references_exist(&R::new_references(&new))?;

        let mut rows = self.load::<R>()?;
        let record = R::from_new(next_id(&rows)?, new);
        rows.push(record.clone());
        self.save(&rows)?;
        Ok(record)
    }

    /// Merge supplied patch fields over an existing row
    ///
    /// Only foreign keys actually supplied in the patch are validated.
    ///
    /// # Errors
    ///
    /// * `RecordNotFound` - no row has `id`
    /// * `InvalidReference` - a supplied foreign key names a missing record
    /// * backend or serialization errors
    pub fn update<R: Record>(&mut self, id: u64, patch: R::Patch) -> Result<R> {
        let table = R::TABLE.key();
        log_op_start!("update", table = table, record_id = id);
        let start = Instant::now();

        let record = self.update_impl::<R>(id, patch).map_err(|e| {
            log_op_error!(
                "update",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                table = table,
                record_id = id
            );
            e
        })?;

        log_op_end!(
            "update",
            duration_ms = start.elapsed().as_millis() as u64,
            table = table,
            record_id = id
        );
        Ok(record)
    }

    fn update_impl<R: Record>(&mut self, id: u64, patch: R::Patch) -> Result<R> {
        let mut rows = self.load::<R>()?;
        let pos = rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or(VoltdexError::RecordNotFound { table: R::TABLE, id })?;

        self.ensure_references_exist(&R::patch_references(&patch))?;

        rows[pos].apply_patch(patch);
        let updated = rows[pos].clone();
        self.save(&rows)?;
        Ok(updated)
    }

    /// Delete a row unless another table still references it
    ///
    /// # Errors
    ///
    /// * `RecordNotFound` - no row has `id`
    /// * `DeleteBlocked` - a dependent row holds a foreign key to `id`
    /// * backend or serialization errors
    pub fn remove<R: Record>(&mut self, id: u64) -> Result<()> {
        let table = R::TABLE.key();
        log_op_start!("remove", table = table, record_id = id);
        let start = Instant::now();

        self.remove_impl::<R>(id).map_err(|e| {
            log_op_error!(
                "remove",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                table = table,
                record_id = id
            );
            e
        })?;

        log_op_end!(
            "remove",
            duration_ms = start.elapsed().as_millis() as u64,
            table = table,
            record_id = id
        );
        Ok(())
    }

    fn remove_impl<R: Record>(&mut self, id: u64) -> Result<()> {
        let mut rows = self.load::<R>()?;
        let pos = rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or(VoltdexError::RecordNotFound { table: R::TABLE, id })?;

        if let Some((dependent_table, dependent_id)) = self.first_dependent(R::TABLE, id)? {
            return Err(VoltdexError::DeleteBlocked {
                table: R::TABLE,
                id,
                dependent_table,
                dependent_id,
            });
        }

        rows.remove(pos);
        self.save(&rows)
    }
}

/// Next identifier for a table: one past the current maximum, or 1 when empty
///
/// # Errors
///
/// * `IdsExhausted` - the current maximum is `u64::MAX`
pub fn next_id<R: Record>(rows: &[R]) -> Result<u64> {
    let max_id = rows.iter().map(Record::id).max().unwrap_or(0);
    max_id
        .checked_add(1)
        .ok_or(VoltdexError::IdsExhausted {
            table: R::TABLE,
            max_id,
        })
}
