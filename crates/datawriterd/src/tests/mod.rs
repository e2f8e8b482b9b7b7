//! Test suites for the writer daemon.

pub(crate) mod support;
