//! In-memory adapters.

mod in_memory_expense_repository;

pub use in_memory_expense_repository::InMemoryExpenseRepository;
