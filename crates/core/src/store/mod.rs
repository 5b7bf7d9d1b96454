//! Local game library - the persisted side of the catalog.
//!
//! Records are unique by name. Imports from RAWG go through
//! [`GameStore::get_or_create`] so that an existing record is never
//! overwritten by fresher external data.

mod sqlite;
mod types;

pub use sqlite::SqliteGameStore;
pub use types::*;

use tracing::warn;

/// Trait for game record storage.
pub trait GameStore: Send + Sync {
    /// All records, ordered by id.
    fn list(&self) -> Result<Vec<GameRecord>, StoreError>;

    /// Get a record by id.
    fn get(&self, id: i64) -> Result<GameRecord, StoreError>;

    /// Get a record by exact name.
    fn get_by_name(&self, name: &str) -> Result<Option<GameRecord>, StoreError>;

    /// Insert a new record.
    ///
    /// Fails with [`StoreError::Conflict`] if the name is taken.
    fn create(&self, draft: GameDraft) -> Result<GameRecord, StoreError>;

    /// Apply a partial update.
    ///
    /// Renaming onto a name owned by another record fails with
    /// [`StoreError::Conflict`].
    fn update(&self, id: i64, patch: GamePatch) -> Result<GameRecord, StoreError>;

    /// Permanently remove a record.
    fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Records matching every condition of `filter`, ordered by id.
    fn search(&self, filter: &GameFilter) -> Result<Vec<GameRecord>, StoreError>;

    /// Case-insensitive substring match on name.
    fn find_by_name(&self, text: &str) -> Result<Vec<GameRecord>, StoreError> {
        self.search(&GameFilter {
            name_contains: Some(text.to_string()),
            ..Default::default()
        })
    }

    /// Records whose rating lies within the inclusive bounds.
    fn find_by_rating_range(
        &self,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Vec<GameRecord>, StoreError> {
        self.search(&GameFilter {
            name_contains: None,
            min_rating: min,
            max_rating: max,
        })
    }

    /// Insert drafts one at a time. A failing draft is reported in
    /// `errors` and does not stop the remaining ones.
    fn create_bulk(&self, drafts: Vec<GameDraft>) -> BulkInsertResult {
        let mut result = BulkInsertResult::default();

        for draft in drafts {
            let name = draft.name.clone();
            match self.create(draft) {
                Ok(record) => result.inserted.push(record),
                Err(e) => {
                    warn!(name = %name, error = %e, "Bulk insert item rejected");
                    result.errors.push(BulkInsertError {
                        name,
                        error: e.to_string(),
                    });
                }
            }
        }

        result
    }

    /// Return the record named like `draft`, creating it if absent.
    /// An existing record is returned unchanged. The flag is true only when
    /// this call inserted the record.
    fn get_or_create(&self, draft: GameDraft) -> Result<(GameRecord, bool), StoreError> {
        if let Some(existing) = self.get_by_name(&draft.name)? {
            return Ok((existing, false));
        }

        let name = draft.name.clone();
        match self.create(draft) {
            Ok(record) => Ok((record, true)),
            // Lost a race with a concurrent insert of the same name
            Err(StoreError::Conflict(_)) => self
                .get_by_name(&name)?
                .map(|existing| (existing, false))
                .ok_or_else(|| StoreError::Internal(format!("'{}' vanished after conflict", name))),
            Err(e) => Err(e),
        }
    }
}
