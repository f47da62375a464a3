//! Integration tests driving the app through the worker
//!
//! `lobby` runs against an in-memory backend; `backend` runs the real HTTP
//! client against a local mock server.

mod common;

mod integration {
    pub mod backend;
    pub mod lobby;
}
