//! Integration tests for the EvmVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.  The
//! password is always passed with `-p` so no interactive prompt is shown,
//! and each test writes a `.evmvault.toml` with cheap Argon2 settings.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the evmvault binary.
fn evmvault() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("evmvault").expect("binary should exist");
    cmd.env_remove("EVMVAULT_PASSWORD");
    cmd
}

/// Helper: a temp project dir with fast KDF settings.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    tmp.child(".evmvault.toml")
        .write_str("argon2_memory_kib = 8192\nargon2_iterations = 1\nargon2_parallelism = 1\n")
        .unwrap();
    tmp
}

#[test]
fn help_flag_shows_usage() {
    evmvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password-protected vault"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("read"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn version_flag_shows_version() {
    evmvault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("evmvault"));
}

#[test]
fn no_args_shows_help() {
    evmvault()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn read_requires_query() {
    evmvault().args(["read", "-p", "pw"]).assert().failure();
}

#[test]
fn create_then_read_list_and_delete() {
    let tmp = project();

    evmvault()
        .args(["create", "-p", "pw", "alice"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wallet created successfully"))
        .stdout(predicate::str::contains("Name: alice"))
        .stdout(predicate::str::contains("Address: 0x"));

    tmp.child("wallets.dat").assert(predicate::path::exists());

    evmvault()
        .args(["read", "-p", "pw", "ALICE"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PrivateKey:"));

    evmvault()
        .args(["readAll", "-p", "pw"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total wallets: 1"));

    evmvault()
        .args(["delete", "--force", "-p", "pw", "alice"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 wallet(s)"));

    evmvault()
        .args(["list", "-p", "pw"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No wallets found"));
}

#[test]
fn wrong_password_reports_authentication_failure() {
    let tmp = project();

    evmvault()
        .args(["create", "-p", "right"])
        .current_dir(tmp.path())
        .assert()
        .success();

    evmvault()
        .args(["list", "-p", "wrong"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid password or corrupted vault file",
        ));
}

#[test]
fn read_unknown_wallet_fails() {
    let tmp = project();

    evmvault()
        .args(["create", "-p", "pw", "alice"])
        .current_dir(tmp.path())
        .assert()
        .success();

    evmvault()
        .args(["read", "-p", "pw", "bob"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No wallet found matching 'bob'"));
}

#[test]
fn password_from_environment_and_custom_file() {
    let tmp = project();

    evmvault()
        .args(["create", "--file", "keys/main.dat", "treasury"])
        .env("EVMVAULT_PASSWORD", "env-pw")
        .current_dir(tmp.path())
        .assert()
        .success();

    tmp.child("keys/main.dat").assert(predicate::path::exists());
    tmp.child("wallets.dat").assert(predicate::path::missing());

    evmvault()
        .args(["read", "-f", "keys/main.dat", "-p", "env-pw", "treasury"])
        .current_dir(tmp.path())
        .assert()
        .success();
}

#[cfg(feature = "audit-log")]
#[test]
fn audit_lists_operations() {
    let tmp = project();

    evmvault()
        .args(["create", "-p", "pw", "alice"])
        .current_dir(tmp.path())
        .assert()
        .success();

    evmvault()
        .arg("audit")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("create"));
}

#[test]
fn completions_for_bash() {
    evmvault()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("evmvault"));
}
