//! Shared test helpers for `skylark-core` integration tests.
//!
//! In-memory fakes for the core ports plus builders for raw boards, so the
//! pipeline tests can focus on behaviour instead of fixture plumbing.

#![allow(dead_code)]

pub mod backends;
pub mod boards;
