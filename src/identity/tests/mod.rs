//! Unit tests for the identity context.

mod service_tests;
