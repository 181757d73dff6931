//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ExpenseCommand, ExpenseQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub expenses: Arc<dyn ExpenseCommand>,
    pub expenses_query: Arc<dyn ExpenseQuery>,
}

impl HttpState {
    /// Construct state from the expense driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use spendwise_backend::domain::ExpenseService;
    /// use spendwise_backend::inbound::http::state::HttpState;
    /// use spendwise_backend::outbound::memory::InMemoryExpenseRepository;
    ///
    /// let service = Arc::new(ExpenseService::new(
    ///     Arc::new(InMemoryExpenseRepository::new()),
    ///     Arc::new(mockable::DefaultClock),
    /// ));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.expenses_query.clone();
    /// ```
    pub fn new(expenses: Arc<dyn ExpenseCommand>, expenses_query: Arc<dyn ExpenseQuery>) -> Self {
        Self {
            expenses,
            expenses_query,
        }
    }
}
