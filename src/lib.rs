//! userbase - a validated, in-memory user CRUD service
//!
//! The store module is the core: validation rules, email uniqueness,
//! partial-vs-full update semantics and monotonic id allocation. The
//! http_server module is a thin adapter mapping requests to store
//! operations and store results to response envelopes.

pub mod cli;
pub mod http_server;
pub mod store;
