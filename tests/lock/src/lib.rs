//! Shared support for the lock test suite.

pub mod bundle_test_helpers;
