//! Tests for the token validator.
