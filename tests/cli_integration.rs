//! CLI integration tests for Homepack.
//!
//! These tests exercise the full pipeline from configuration input through
//! generated files, packaging, and the exported component manifest.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// Get the homepack binary command.
fn homepack() -> Command {
    Command::cargo_bin("homepack").unwrap()
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

// ============================================================================
// homepack generate
// ============================================================================

#[test]
fn test_generate_writes_toolchain_and_manifest() {
    let tmp = temp_dir();

    homepack()
        .args(["generate", "--root"])
        .arg(tmp.path())
        .args(["-s", "build_type=Debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("build/Debug"));

    let generators = tmp.path().join("build/Debug/generators");
    assert!(generators.join("homepack_toolchain.cmake").exists());
    assert!(generators.join("requirements.json").exists());
    assert!(generators.join("homepack.fingerprint").exists());
}

#[test]
fn test_generate_sanitize_uses_sanitized_dir() {
    let tmp = temp_dir();

    homepack()
        .args(["generate", "--root"])
        .arg(tmp.path())
        .args(["-s", "build_type=Debug", "-o", "sanitize=True"])
        .assert()
        .success()
        .stdout(predicate::str::contains("build/Sanitized"));

    let script = fs::read_to_string(
        tmp.path()
            .join("build/Sanitized/generators/homepack_toolchain.cmake"),
    )
    .unwrap();
    assert!(script.contains("set(MEMORY_SANITIZER_ON \"ON\""));
    assert!(script.contains("set(CODE_COVERAGE \"OFF\""));
}

#[test]
fn test_generate_release_gates_instrumentation_off() {
    let tmp = temp_dir();

    homepack()
        .args(["generate", "--root"])
        .arg(tmp.path())
        .args(["-s", "build_type=Release", "-o", "coverage=True"])
        .assert()
        .success();

    // Coverage only changes the layout, never the Release variable set
    let script = fs::read_to_string(
        tmp.path()
            .join("build/Coverage/generators/homepack_toolchain.cmake"),
    )
    .unwrap();
    assert!(script.contains("set(CODE_COVERAGE \"OFF\""));
    assert!(script.contains("set(MEMORY_SANITIZER_ON \"OFF\""));
}

#[test]
fn test_generate_is_deterministic() {
    let tmp = temp_dir();

    for _ in 0..2 {
        homepack()
            .args(["generate", "--root"])
            .arg(tmp.path())
            .args(["-s", "build_type=Debug"])
            .assert()
            .success();
    }

    let fingerprint = tmp.path().join("build/Debug/generators/homepack.fingerprint");
    let first = fs::read_to_string(&fingerprint).unwrap();

    homepack()
        .args(["generate", "--root"])
        .arg(tmp.path())
        .args(["-s", "build_type=Debug"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&fingerprint).unwrap(), first);
}

// ============================================================================
// validation failures
// ============================================================================

#[test]
fn test_coverage_and_sanitize_conflict_fails() {
    let tmp = temp_dir();

    homepack()
        .args(["generate", "--root"])
        .arg(tmp.path())
        .args(["-o", "coverage=True", "-o", "sanitize=True"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "sanitizer does not work with code coverage",
        ));

    // Fail-fast: nothing may be written on a validation failure
    assert!(!tmp.path().join("build").exists());
}

#[test]
fn test_cppstd_below_minimum_fails() {
    let tmp = temp_dir();

    homepack()
        .args(["generate", "--root"])
        .arg(tmp.path())
        .args(["-s", "cppstd=17"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below the minimum supported (20)"));
}

#[test]
fn test_option_value_outside_domain_fails() {
    homepack()
        .args(["deps", "-o", "shared=maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value `maybe`"));
}

#[test]
fn test_unknown_option_fails() {
    homepack()
        .args(["deps", "-o", "turbo=True"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown option `turbo`"));
}

#[test]
fn test_unknown_setting_fails() {
    homepack()
        .args(["deps", "-s", "flavour=mint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("flavour"));
}

// ============================================================================
// homepack deps
// ============================================================================

#[test]
fn test_deps_lists_requirements() {
    homepack()
        .arg("deps")
        .assert()
        .success()
        .stdout(predicate::str::contains("homestore/~6.18@oss/master"))
        .stdout(predicate::str::contains("lz4/=1.9.4 (override)"))
        .stdout(predicate::str::contains("gtest/=1.14.0 (test)"));
}

#[test]
fn test_deps_json() {
    homepack()
        .args(["deps", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"iomgr\""))
        .stdout(predicate::str::contains("oss/master"));
}

// ============================================================================
// homepack package
// ============================================================================

#[test]
fn test_package_license_only_tree() {
    let tmp = temp_dir();
    fs::write(tmp.path().join("LICENSE"), "Apache-2.0").unwrap();

    homepack()
        .args(["package", "--root"])
        .arg(tmp.path())
        .args(["-s", "build_type=Debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("packaged 1 file(s)"));

    let package_dir = tmp.path().join("package");
    assert!(package_dir.join("licenses/LICENSE").exists());
    assert!(!package_dir.join("lib").exists());
    assert!(!package_dir.join("include").exists());
}

#[test]
fn test_package_flattens_libraries_and_keeps_header_paths() {
    let tmp = temp_dir();
    let build = tmp.path().join("build/Debug/src/lib/volume");
    fs::create_dir_all(&build).unwrap();
    fs::write(build.join("libhomeblocks_volume.a"), b"ar").unwrap();

    let include = tmp.path().join("src/include/homeblocks");
    fs::create_dir_all(&include).unwrap();
    fs::write(include.join("volume_mgr.hpp"), "#pragma once").unwrap();

    homepack()
        .args(["package", "--root"])
        .arg(tmp.path())
        .args(["-s", "build_type=Debug"])
        .assert()
        .success();

    let package_dir = tmp.path().join("package");
    assert!(package_dir.join("lib/libhomeblocks_volume.a").exists());
    assert!(package_dir
        .join("include/homeblocks/volume_mgr.hpp")
        .exists());
}

// ============================================================================
// homepack export
// ============================================================================

#[test]
fn test_export_component_graph() {
    homepack()
        .args(["export", "-s", "os=Linux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lib: homeblocks_volume"))
        .stdout(predicate::str::contains("requires: homestore::homestore"))
        .stdout(predicate::str::contains("system: pthread"));
}

#[test]
fn test_export_no_pthread_off_posix() {
    homepack()
        .args(["export", "-s", "os=Windows"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pthread").not());
}

#[test]
fn test_export_sanitize_link_flags() {
    homepack()
        .args(["export", "-s", "os=Linux", "-o", "sanitize=True", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-fsanitize=address"))
        .stdout(predicate::str::contains("-fsanitize=undefined"));
}

#[test]
fn test_export_writes_manifest_file() {
    let tmp = temp_dir();
    let out = tmp.path().join("components.json");

    homepack()
        .args(["export", "-s", "os=Linux", "--output"])
        .arg(&out)
        .assert()
        .success();

    let json = fs::read_to_string(&out).unwrap();
    assert!(json.contains("\"homeblocks\""));
    assert!(json.contains("\"version\": \"2.1.2\""));
}

// ============================================================================
// profiles
// ============================================================================

#[test]
fn test_profile_seeds_configuration() {
    let tmp = temp_dir();
    let profile = tmp.path().join("sanitized.toml");
    fs::write(
        &profile,
        "[settings]\nbuild_type = \"Debug\"\n\n[options]\nsanitize = true\n",
    )
    .unwrap();

    homepack()
        .args(["generate", "--root"])
        .arg(tmp.path())
        .arg("--profile")
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("build/Sanitized"));
}

#[test]
fn test_cli_flag_overrides_profile() {
    let tmp = temp_dir();
    let profile = tmp.path().join("cov.toml");
    fs::write(&profile, "[options]\ncoverage = true\n").unwrap();

    // CLI wins over the profile, so the build lands in Sanitized, and the
    // coverage value from the profile must not survive to conflict
    homepack()
        .args(["generate", "--root"])
        .arg(tmp.path())
        .arg("--profile")
        .arg(&profile)
        .args(["-o", "coverage=False", "-o", "sanitize=True"])
        .assert()
        .success()
        .stdout(predicate::str::contains("build/Sanitized"));
}
