//! Integration tests for the vehicle store (status index + radius queries).

mod concurrency;
mod support;
