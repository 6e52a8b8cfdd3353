use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    cargo_bin_cmd!("sobjgen")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate faux Apex classes"))
        .stdout(predicate::str::contains("--instance-url"))
        .stdout(predicate::str::contains("--category"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("sobjgen")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sobjgen"));
}

// ============================================================================
// Argument Validation Tests
// ============================================================================

#[test]
fn test_missing_connection_flags_fail() {
    cargo_bin_cmd!("sobjgen")
        .env_remove("SOBJGEN_INSTANCE_URL")
        .env_remove("SOBJGEN_ACCESS_TOKEN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--instance-url"));
}

#[test]
fn test_invalid_category_rejected() {
    cargo_bin_cmd!("sobjgen")
        .args([
            "--instance-url",
            "https://example.my.salesforce.com",
            "--access-token",
            "t0ken",
            "--category",
            "bogus",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_help_lists_category_values() {
    cargo_bin_cmd!("sobjgen")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("all"))
        .stdout(predicate::str::contains("custom"))
        .stdout(predicate::str::contains("standard"));
}
