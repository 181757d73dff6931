//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use crate::domain::ExpenseService;
use crate::domain::ports::{ExpenseCommand, ExpenseQuery, MockExpenseCommand, MockExpenseQuery};
use crate::inbound::http::expenses;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryExpenseRepository;

/// Build state over a freshly seeded in-memory store and the system clock.
pub fn seeded_state() -> HttpState {
    let repo = InMemoryExpenseRepository::seeded().expect("seed rows are valid");
    let service = Arc::new(ExpenseService::new(
        Arc::new(repo),
        Arc::new(mockable::DefaultClock),
    ));
    HttpState::new(service.clone(), service)
}

/// Build state from mocked driving ports.
pub fn mocked_state(command: MockExpenseCommand, query: MockExpenseQuery) -> HttpState {
    let command: Arc<dyn ExpenseCommand> = Arc::new(command);
    let query: Arc<dyn ExpenseQuery> = Arc::new(query);
    HttpState::new(command, query)
}

/// App exposing only the expense routes over `state`.
pub fn expense_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(expenses::configure)
}
