//! Unit and behavioural tests for the task module.

mod service_tests;
mod validation_tests;
