#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    sync::OnceLock,
};

const FAKE_SAMBA_TOOL: &str = r#"#!/bin/sh
url= user= password=
while [ "${1#-}" != "$1" ]; do
  case "$1" in
    -H) url=$2; shift 2 ;;
    -U) user=$2; shift 2 ;;
    --password=*) password=${1#--password=}; shift ;;
    *) shift ;;
  esac
done

if [ -n "${EXPECT_CONNECTION+set}" ] && [ "$url|$user|$password" != "$EXPECT_CONNECTION" ]; then
  echo "connection mismatch: got '$url|$user|$password'" >&2
  exit 2
fi

case "$1 $2" in
  "user list")
    printf 'krbtgt\nAdministrator\nbob\nalice\n'
    ;;
  "user show")
    case "$3" in
      alice)
        printf 'dn: CN=alice,CN=Users,DC=example,DC=com\nsAMAccountName: alice\nuserAccountControl: 512\nlockoutTime: 0\n'
        ;;
      bob)
        printf 'dn: CN=bob,CN=Users,DC=example,DC=com\nsAMAccountName: bob\nuserAccountControl: 514\nlockoutTime: 133485408000000000\n'
        ;;
      *)
        echo "ERROR: Unable to find user '$3'" >&2
        exit 255
        ;;
    esac
    ;;
  "user enable") echo "Enabled user '$3'" ;;
  "user disable") echo "Disabled user '$3'" ;;
  "user unlock") echo "Unlocked user '$3'" ;;
  "user delete") echo "Deleted user '$3'" ;;
  "user getgroups") printf 'Domain Users\nDevelopers\n' ;;
  "group list") printf 'Domain Users\nDomain Admins\n' ;;
  "group show")
    if [ "$3" = "staff" ]; then
      printf 'dn: CN=staff,CN=Users,DC=example,DC=com\ncn: staff\n'
    else
      echo "ERROR: Unable to find group '$3'" >&2
      exit 255
    fi
    ;;
  "group listmembers") printf 'carol\nbob\n' ;;
  "group stats") printf 'Group memberships summary:\nTotal groups: 2\n' ;;
  *)
    echo "unexpected arguments: $*" >&2
    exit 1
    ;;
esac
"#;

/// Path to the fake samba-tool, written once before any test runs it.
///
/// Lives under cargo's per-target scratch directory, which outlives the
/// test process and is reused by the next run.
fn fake_tool() -> &'static Path {
    static TOOL: OnceLock<PathBuf> = OnceLock::new();
    TOOL.get_or_init(|| {
        let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("fake-samba-tool");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("samba-tool");
        fs::write(&path, FAKE_SAMBA_TOOL).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    })
}

fn samba_admin() -> Command {
    let mut cmd = Command::cargo_bin("samba-admin").unwrap();
    cmd.env_remove("SAMBA_URL")
        .env_remove("SAMBA_USERNAME")
        .env_remove("SAMBA_PASSWORD")
        .env_remove("EXPECT_CONNECTION")
        .env("SAMBA_TOOL", fake_tool());
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_user_list_sorted() {
    let value = stdout_json(samba_admin().args(["user", "list"]));
    assert_eq!(
        value,
        serde_json::json!(["Administrator", "alice", "bob", "krbtgt"])
    );
}

#[test]
fn test_user_list_text() {
    samba_admin()
        .args(["--format", "text", "user", "list"])
        .assert()
        .success()
        .stdout("Administrator\nalice\nbob\nkrbtgt\n");
}

#[test]
fn test_user_show_decodes_flags() {
    let value = stdout_json(samba_admin().args(["user", "show", "bob"]));

    assert_eq!(value["sAMAccountName"], "bob");
    assert_eq!(value["userAccountControl"]["ACCOUNTDISABLE"], true);
    assert_eq!(value["userAccountControl"]["NORMAL_ACCOUNT"], true);
    assert_eq!(value["userAccountControl"]["LOCKOUT"], false);
}

#[test]
fn test_user_show_missing() {
    samba_admin()
        .args(["user", "show", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User 'ghost' does not exist"));
}

#[test]
fn test_user_enable_disabled_account() {
    let value = stdout_json(samba_admin().args(["user", "enable", "bob"]));
    assert_eq!(value["result"], "changed");
    assert_eq!(value["output"], "Enabled user 'bob'");
}

#[test]
fn test_user_enable_already_enabled() {
    let value = stdout_json(samba_admin().args(["user", "enable", "alice"]));
    assert_eq!(value, serde_json::json!({"result": "unchanged"}));
}

#[test]
fn test_user_enable_missing() {
    samba_admin()
        .args(["user", "enable", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_user_disable() {
    let value = stdout_json(samba_admin().args(["user", "disable", "alice"]));
    assert_eq!(value["result"], "changed");

    let value = stdout_json(samba_admin().args(["user", "disable", "bob"]));
    assert_eq!(value["result"], "unchanged");

    let value = stdout_json(samba_admin().args(["user", "disable", "ghost"]));
    assert_eq!(value["result"], "unchanged");
}

#[test]
fn test_user_unlock() {
    let value = stdout_json(samba_admin().args(["user", "unlock", "bob"]));
    assert_eq!(value["result"], "changed");

    let value = stdout_json(samba_admin().args(["user", "unlock", "alice"]));
    assert_eq!(value["result"], "unchanged");
}

#[test]
fn test_user_delete() {
    let value = stdout_json(samba_admin().args(["user", "delete", "alice"]));
    assert_eq!(value["output"], "Deleted user 'alice'");

    let value = stdout_json(samba_admin().args(["user", "delete", "ghost"]));
    assert_eq!(value["result"], "unchanged");
}

#[test]
fn test_user_getgroups() {
    let value = stdout_json(samba_admin().args(["user", "getgroups", "bob"]));
    assert_eq!(value, serde_json::json!(["Developers", "Domain Users"]));
}

#[test]
fn test_user_unsupported_operation() {
    samba_admin()
        .args(["user", "setpassword", "bob", "--newpassword=x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Operation 'user setpassword' is not supported",
        ));
}

#[test]
fn test_group_commands() {
    let value = stdout_json(samba_admin().args(["group", "list"]));
    assert_eq!(value, serde_json::json!(["Domain Admins", "Domain Users"]));

    let value = stdout_json(samba_admin().args(["group", "show", "staff"]));
    assert_eq!(value["cn"], "staff");

    let value = stdout_json(samba_admin().args(["group", "listmembers", "staff"]));
    assert_eq!(value, serde_json::json!(["bob", "carol"]));
}

#[test]
fn test_group_members_missing_group() {
    samba_admin()
        .args(["group", "members", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Group 'nobody' does not exist"));
}

#[test]
fn test_group_stats_text() {
    samba_admin()
        .args(["--format", "text", "group", "stats"])
        .assert()
        .success()
        .stdout("Group memberships summary:\nTotal groups: 2\n");
}

#[test]
fn test_connection_options_are_passed() {
    let value = stdout_json(
        samba_admin()
            .env("EXPECT_CONNECTION", "ldap://dc1.example.com|Administrator|secret")
            .args([
                "-H",
                "ldap://dc1.example.com",
                "-U",
                "Administrator",
                "--password",
                "secret",
                "user",
                "list",
            ]),
    );
    assert_eq!(value.as_array().map(Vec::len), Some(4));
}

#[test]
fn test_connection_options_from_env() {
    let value = stdout_json(
        samba_admin()
            .env("EXPECT_CONNECTION", "ldap://dc2.example.com|svc-admin|s3cret")
            .env("SAMBA_URL", "ldap://dc2.example.com")
            .env("SAMBA_USERNAME", "svc-admin")
            .env("SAMBA_PASSWORD", "s3cret")
            .args(["group", "list"]),
    );
    assert_eq!(value, serde_json::json!(["Domain Admins", "Domain Users"]));
}

#[test]
fn test_no_connection_options_by_default() {
    let value = stdout_json(
        samba_admin()
            .env("EXPECT_CONNECTION", "||")
            .args(["user", "list"]),
    );
    assert_eq!(value.as_array().map(Vec::len), Some(4));
}

#[test]
fn test_wrong_connection_options_are_detected() {
    // `user list` tolerates tool failures, so a mismatch shows up as an
    // empty list plus the ignored stderr in the debug log.
    let output = samba_admin()
        .env("EXPECT_CONNECTION", "ldap://dc1.example.com|Administrator|secret")
        .args(["--debug", "-H", "ldap://other.example.com", "user", "list"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!([]));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("connection mismatch: got 'ldap://other.example.com||'")
    );
}

#[test]
fn test_missing_tool() {
    samba_admin()
        .env("SAMBA_TOOL", "/nonexistent/samba-tool")
        .args(["user", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Command '/nonexistent/samba-tool' cannot be found",
        ));
}

#[test]
fn test_unsupported_operation_without_tool() {
    samba_admin()
        .env("SAMBA_TOOL", "/nonexistent/samba-tool")
        .args(["user", "add", "carol", "--given-name=Carol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Operation 'user add' is not supported"))
        .stderr(predicate::str::contains("cannot be found").not());
}
