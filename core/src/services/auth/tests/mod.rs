//! Tests for the authentication facade.


mod service_tests;
