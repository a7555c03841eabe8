//! Tests for oriented asset derivation
