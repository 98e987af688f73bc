//! Task management for taskboard.
//!
//! This module implements the task resource end to end behind the HTTP
//! boundary: creating tasks, updating their descriptive fields, toggling the
//! completion state, and searching with pagination. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Input payloads in [`forms`]
//! - Form validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod forms;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
