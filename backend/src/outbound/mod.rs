//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local expense store behind a mutex. Records live
//!   only as long as the process.
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;
