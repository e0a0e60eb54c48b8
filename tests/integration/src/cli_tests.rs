//! CLI smoke tests for the vrc2facility binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const FACILITY_XML: &str = include_str!("../../../test-fixtures/facility.xml");
const ALIASES: &str = include_str!("../../../test-fixtures/aliases.txt");
const POF: &str = include_str!("../../../test-fixtures/positions.pof");

fn vrc2facility() -> Command {
    Command::cargo_bin("vrc2facility").unwrap()
}

fn seed_fixtures(dir: &Path) {
    fs::write(dir.join("aliases.txt"), ALIASES).unwrap();
    facility_fs::write_gzipped(&dir.join("ZOB.gz"), FACILITY_XML).unwrap();
}

#[test]
fn updates_a_facility_file() {
    let dir = tempfile::tempdir().unwrap();
    seed_fixtures(dir.path());

    vrc2facility()
        .current_dir(dir.path())
        .args(["aliases.txt", "ZOB.gz", "ZOB-new.gz", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let patched = facility_fs::read_gzipped(&dir.path().join("ZOB-new.gz")).unwrap();
    assert!(patched.contains("CENTER FREQ"));
    assert!(!patched.contains("stale content"));
}

#[test]
fn overwrites_in_place_when_paths_match() {
    let dir = tempfile::tempdir().unwrap();
    seed_fixtures(dir.path());

    vrc2facility()
        .current_dir(dir.path())
        .args(["aliases.txt", "ZOB.gz", "ZOB.gz"])
        .assert()
        .success();

    let patched = facility_fs::read_gzipped(&dir.path().join("ZOB.gz")).unwrap();
    assert!(patched.contains("CENTER FREQ"));
}

#[test]
fn imports_positions_with_pof_and_config() {
    let dir = tempfile::tempdir().unwrap();
    seed_fixtures(dir.path());
    fs::write(dir.path().join("zob.pof"), POF).unwrap();
    fs::write(dir.path().join("zob.v2xcfg"), "34\n77\n").unwrap();

    vrc2facility()
        .current_dir(dir.path())
        .args([
            "aliases.txt",
            "--pof",
            "zob.pof",
            "--config",
            "zob.v2xcfg",
            "ZOB.gz",
            "ZOB-new.gz",
            "--force",
        ])
        .assert()
        .success();

    let patched = facility_fs::read_gzipped(&dir.path().join("ZOB-new.gz")).unwrap();
    assert!(patched.contains(r#"PositionType="Adjacent" SectorName="Approach""#));
    assert!(!patched.contains("Stale Radio"));
}

#[test]
fn odd_facility_path_count_is_a_usage_failure() {
    let dir = tempfile::tempdir().unwrap();
    seed_fixtures(dir.path());

    vrc2facility()
        .current_dir(dir.path())
        .args(["aliases.txt", "ZOB.gz", "out.gz", "dangling.gz"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("pairs"));
}

#[test]
fn document_without_alias_block_fails_with_format_flag() {
    let dir = tempfile::tempdir().unwrap();
    seed_fixtures(dir.path());
    facility_fs::write_gzipped(
        &dir.path().join("noblock.gz"),
        "<FacilityFile>\n<Other />\n</FacilityFile>\n",
    )
    .unwrap();

    vrc2facility()
        .current_dir(dir.path())
        .args(["aliases.txt", "noblock.gz", "noblock-new.gz", "--force"])
        .assert()
        .failure()
        .code(64)
        .stderr(predicate::str::contains("noblock.gz"));

    assert!(!dir.path().join("noblock-new.gz").exists());
}

#[test]
fn corrupt_container_fails_with_codec_flag() {
    let dir = tempfile::tempdir().unwrap();
    seed_fixtures(dir.path());
    fs::write(dir.path().join("corrupt.gz"), "not a gzip container").unwrap();

    vrc2facility()
        .current_dir(dir.path())
        .args(["aliases.txt", "corrupt.gz", "corrupt-new.gz", "--force"])
        .assert()
        .failure()
        .code(16)
        .stderr(predicate::str::contains("corrupt.gz"));
}

#[test]
fn missing_explicit_config_fails_before_touching_documents() {
    let dir = tempfile::tempdir().unwrap();
    seed_fixtures(dir.path());

    vrc2facility()
        .current_dir(dir.path())
        .args([
            "aliases.txt",
            "--config",
            "nope.v2xcfg",
            "ZOB.gz",
            "ZOB-new.gz",
            "--force",
        ])
        .assert()
        .failure()
        .code(128)
        .stderr(predicate::str::contains("nope.v2xcfg"));

    assert!(!dir.path().join("ZOB-new.gz").exists());
}

#[test]
fn failure_on_one_document_does_not_stop_the_others() {
    let dir = tempfile::tempdir().unwrap();
    seed_fixtures(dir.path());
    facility_fs::write_gzipped(
        &dir.path().join("noblock.gz"),
        "<FacilityFile>\n<Other />\n</FacilityFile>\n",
    )
    .unwrap();

    vrc2facility()
        .current_dir(dir.path())
        .args([
            "aliases.txt",
            "noblock.gz",
            "noblock-new.gz",
            "ZOB.gz",
            "ZOB-new.gz",
            "--force",
        ])
        .assert()
        .failure()
        .code(64);

    // The bad pair produced nothing; the good pair still went through.
    assert!(!dir.path().join("noblock-new.gz").exists());
    let patched = facility_fs::read_gzipped(&dir.path().join("ZOB-new.gz")).unwrap();
    assert!(patched.contains("CENTER FREQ"));
}

#[test]
fn combined_failures_or_their_flags_together() {
    let dir = tempfile::tempdir().unwrap();
    seed_fixtures(dir.path());
    facility_fs::write_gzipped(
        &dir.path().join("noblock.gz"),
        "<FacilityFile>\n<Other />\n</FacilityFile>\n",
    )
    .unwrap();
    fs::write(dir.path().join("corrupt.gz"), "not a gzip container").unwrap();

    vrc2facility()
        .current_dir(dir.path())
        .args([
            "aliases.txt",
            "noblock.gz",
            "noblock-new.gz",
            "corrupt.gz",
            "corrupt-new.gz",
            "--force",
        ])
        .assert()
        .failure()
        .code(16 | 64);
}
