//! End-to-end pipeline tests: gzip in, patch in memory, gzip out.

use chrono::Utc;
use facility_content::{
    ClassificationConfig, build_alias_block, build_positions_block, last_imported,
};
use facility_patch::{COMMAND_ALIASES, POSITIONS, patch_document};

const FACILITY_XML: &str = include_str!("../../../test-fixtures/facility.xml");
const ALIASES: &str = include_str!("../../../test-fixtures/aliases.txt");
const POF: &str = include_str!("../../../test-fixtures/positions.pof");

#[test]
fn alias_pipeline_round_trips_through_gzip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ZOB.gz");
    let output = dir.path().join("ZOB-new.gz");
    facility_fs::write_gzipped(&input, FACILITY_XML).unwrap();

    let timestamp = last_imported(Utc::now()).unwrap();
    let block = build_alias_block(ALIASES.as_bytes(), &timestamp).unwrap();

    let document = facility_fs::read_gzipped(&input).unwrap();
    let patched = patch_document(&document, &COMMAND_ALIASES, &block).unwrap();
    facility_fs::write_gzipped(&output, &patched).unwrap();

    let final_text = facility_fs::read_gzipped(&output).unwrap();
    assert!(final_text.contains(r#"<CommandAlias Command=".CF" ReplaceWith="CENTER FREQ" />"#));
    assert!(final_text.contains(&timestamp));
    assert!(!final_text.contains("stale content"));
    // Everything outside the replaced span survives.
    assert!(final_text.contains("<Name>Cleveland ARTCC</Name>"));
    assert!(final_text.contains(r#"<VideoMap STARSId="1" Name="ZOB MAP" />"#));
    // The input container is untouched.
    assert_eq!(facility_fs::read_gzipped(&input).unwrap(), FACILITY_XML);
}

#[test]
fn positions_pass_composes_with_alias_pass() {
    let config = ClassificationConfig::parse("34\n77\n");
    let alias_block = build_alias_block(ALIASES.as_bytes(), "ts").unwrap();
    let positions_block = build_positions_block(POF.as_bytes(), &config).unwrap();

    let patched = patch_document(FACILITY_XML, &COMMAND_ALIASES, &alias_block).unwrap();
    let patched = patch_document(&patched, &POSITIONS, &positions_block).unwrap();

    assert!(patched.contains(r#"PositionType="InFacility" SectorName="Center""#));
    assert!(patched.contains(r#"PositionType="Adjacent" SectorName="Approach""#));
    assert!(patched.contains(r#"PositionType="Other" SectorName="Tower""#));
    assert!(patched.contains(r#"Frequency="28325""#));
    assert!(!patched.contains("Stale Radio"));
}

#[test]
fn bytes_outside_both_spans_are_reproduced_exactly() {
    let alias_block = build_alias_block(ALIASES.as_bytes(), "ts").unwrap();
    let patched = patch_document(FACILITY_XML, &COMMAND_ALIASES, &alias_block).unwrap();

    let (prefix, rest) = FACILITY_XML.split_once("  <CommandAliases>").unwrap();
    let (_, suffix) = rest
        .split_once("</CommandAliasesLastImported>\n")
        .unwrap();
    assert!(patched.starts_with(prefix));
    assert!(patched.ends_with(suffix));
}

#[test]
fn document_format_failure_yields_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.gz");
    let output = dir.path().join("broken-new.gz");
    facility_fs::write_gzipped(&input, "<FacilityFile>\n<CommandAliases>\nnever closed\n").unwrap();

    let alias_block = build_alias_block(ALIASES.as_bytes(), "ts").unwrap();
    let document = facility_fs::read_gzipped(&input).unwrap();
    let result = patch_document(&document, &COMMAND_ALIASES, &alias_block);

    assert!(matches!(
        result,
        Err(facility_patch::Error::UnterminatedBlock { .. })
    ));
    assert!(!output.exists());
}
