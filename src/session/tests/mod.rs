//! Unit tests for the session context.

mod issuer_tests;
