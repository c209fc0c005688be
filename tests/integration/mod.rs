//! Integration tests
//!
//! End-to-end flows over the SQLite store: the HTTP API and the session
//! lifecycle.

mod api;
