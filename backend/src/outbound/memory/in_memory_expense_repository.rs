//! Mutex-guarded expense store.
//!
//! Records sit in a `BTreeMap` keyed by [`ExpenseId`]. Because identifiers
//! only ever grow, key order is insertion order, and the next identifier is
//! the last key plus one. Each operation takes the lock once, so reading the
//! last key and inserting under the next one cannot interleave with another
//! append.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{ExpenseRepository, ExpenseRepositoryError};
use crate::domain::{Expense, ExpenseDraft, ExpenseId, ExpenseValidationError, seed_drafts};

/// Process-local [`ExpenseRepository`].
#[derive(Debug, Default)]
pub struct InMemoryExpenseRepository {
    records: Mutex<BTreeMap<ExpenseId, Expense>>,
}

impl InMemoryExpenseRepository {
    /// Create an empty store. The first append receives [`ExpenseId::FIRST`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the seed expenses under identifiers 1 to 5.
    ///
    /// # Errors
    /// Returns the validation error of the first seed row that fails
    /// normalisation.
    ///
    /// # Examples
    /// ```
    /// use spendwise_backend::outbound::memory::InMemoryExpenseRepository;
    ///
    /// let repo = InMemoryExpenseRepository::seeded().expect("seed rows are valid");
    /// # let _ = repo;
    /// ```
    pub fn seeded() -> Result<Self, ExpenseValidationError> {
        let records = seed_drafts()?
            .into_iter()
            .zip(1_i64..)
            .map(|(draft, raw)| {
                let id = ExpenseId::new(raw);
                (id, Expense::new(id, draft))
            })
            .collect();
        Ok(Self {
            records: Mutex::new(records),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<ExpenseId, Expense>>, ExpenseRepositoryError> {
        self.records.lock().map_err(|_| {
            debug!("expense store mutex poisoned");
            ExpenseRepositoryError::unavailable("expense store lock poisoned")
        })
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn list_all(&self) -> Result<Vec<Expense>, ExpenseRepositoryError> {
        Ok(self.lock()?.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseRepositoryError> {
        Ok(self.lock()?.get(&id).cloned())
    }

    async fn append(&self, draft: ExpenseDraft) -> Result<Expense, ExpenseRepositoryError> {
        let mut records = self.lock()?;
        let id = match records.last_key_value() {
            None => ExpenseId::FIRST,
            Some((last, _)) => last
                .next()
                .ok_or_else(|| ExpenseRepositoryError::query("expense identifiers exhausted"))?,
        };
        let expense = Expense::new(id, draft);
        records.insert(id, expense.clone());
        Ok(expense)
    }

    async fn apply_update(
        &self,
        id: ExpenseId,
        draft: ExpenseDraft,
    ) -> Result<Option<Expense>, ExpenseRepositoryError> {
        let mut records = self.lock()?;
        Ok(records.get_mut(&id).map(|expense| {
            expense.replace_fields(draft);
            expense.clone()
        }))
    }
}
