//! Property-based tests

mod query_proptest;
