//! Contracts shared by the frontend and the processing service boundary.
//!
//! Everything here is plain data and pure rules: no DOM, no network, so the
//! whole crate is testable on the host.

pub mod usecases;
