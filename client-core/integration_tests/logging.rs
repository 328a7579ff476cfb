//! Logger bootstrap tests.
//!
//! The logger installs a process-global dispatcher, so everything that
//! touches initialization lives in this one test.

use client_core::logger;

use std::fs;

#[test]
fn given_log_directory_when_initialized_then_records_reach_the_file() {
    let log_dir = tempfile::tempdir().expect("temp dir is creatable");

    logger::initialize(Some(log_dir.path())).unwrap();
    log::info!("voucher batch reconciled");

    // Repeated initialization is a warning, not an error.
    logger::initialize(Some(log_dir.path())).unwrap();

    let contents = fs::read_to_string(log_dir.path().join("broker-client.log")).unwrap();
    assert!(contents.contains("voucher batch reconciled"));
}
