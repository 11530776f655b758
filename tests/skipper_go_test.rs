//! Go test skipper e2e tests
//!
//! Matching and toggling over whole files.
//! Fixtures: tests/fixtures/go/

mod fixtures;

use fixtures::{go_fixture_path, read_fixture};
use pretty_assertions::assert_eq;
use testskipper::skipper::{test_functions, toggle_unit, SignatureTemplate, ToggleAction};
use testskipper::source::SourceUnit;

fn parse_fixture(name: &str) -> SourceUnit {
    SourceUnit::read(&go_fixture_path(Some(name))).unwrap()
}

fn test_names(unit: &SourceUnit, template: &SignatureTemplate) -> Vec<String> {
    test_functions(template, unit.root_node(), unit.source())
        .iter()
        .map(|f| f.name().to_string())
        .collect()
}

fn toggled(name: &str, template: &SignatureTemplate, action: ToggleAction) -> String {
    let mut unit = parse_fixture(name);
    toggle_unit(&mut unit, template, action).unwrap();
    unit.into_text()
}

// =============================================================================
// calc package
// =============================================================================

#[test]
fn test_calc_skip_matches_golden() {
    let skipped = toggled(
        "calc/calc_test.go",
        &SignatureTemplate::default(),
        ToggleAction::Skip,
    );
    assert_eq!(skipped, read_fixture("golden/calc_test.go.skipped"));
}

#[test]
fn test_calc_unskip_restores_original() {
    let mut unit = SourceUnit::parse(
        "calc_test.go",
        read_fixture("golden/calc_test.go.skipped"),
    )
    .unwrap();
    let stats = toggle_unit(&mut unit, &SignatureTemplate::default(), ToggleAction::Unskip).unwrap();

    assert_eq!(stats.matched, 4);
    assert_eq!(stats.changed, 4);
    assert_eq!(unit.into_text(), read_fixture("calc/calc_test.go"));
}

#[test]
fn test_calc_unskip_without_markers_is_noop() {
    let original = read_fixture("calc/calc_test.go");
    let unskipped = toggled(
        "calc/calc_test.go",
        &SignatureTemplate::default(),
        ToggleAction::Unskip,
    );
    assert_eq!(unskipped, original);
}

#[test]
fn test_calc_non_test_file_is_unchanged() {
    let original = read_fixture("calc/calc.go");
    let skipped = toggled("calc/calc.go", &SignatureTemplate::default(), ToggleAction::Skip);
    assert_eq!(skipped, original);
}

#[test]
fn test_calc_test_names() {
    let unit = parse_fixture("calc/calc_test.go");
    assert_eq!(
        test_names(&unit, &SignatureTemplate::default()),
        vec!["TestAdd", "TestAddNegative", "TestPending", "Test"]
    );
}

// =============================================================================
// matching package
// =============================================================================

#[test]
fn test_matching_rejects_near_misses() {
    let unit = parse_fixture("matching/matching_test.go");
    assert_eq!(
        test_names(&unit, &SignatureTemplate::default()),
        vec!["TestÄrger"]
    );
}

#[test]
fn test_matching_only_changes_accepted_function() {
    let original = read_fixture("matching/matching_test.go");
    let skipped = toggled(
        "matching/matching_test.go",
        &SignatureTemplate::default(),
        ToggleAction::Skip,
    );
    let expected = original.replace(
        "\tt.Log(\"unicode upper-case after prefix\")",
        "\tt.Skip()\n\tt.Log(\"unicode upper-case after prefix\")",
    );
    assert_eq!(skipped, expected);
}

#[test]
fn test_matching_other_prefix() {
    let unit = parse_fixture("matching/matching_test.go");
    let template = SignatureTemplate::new("Benchmark", "testing");
    // BenchmarkAdd takes *testing.B, not *testing.T
    assert!(test_names(&unit, &template).is_empty());
}

// =============================================================================
// renamed import
// =============================================================================

#[test]
fn test_renamed_import_default_template() {
    let unit = parse_fixture("renamed/renamed_test.go");
    assert_eq!(
        test_names(&unit, &SignatureTemplate::default()),
        vec!["TestOldAlias"]
    );
}

#[test]
fn test_renamed_import_reconfigured_template() {
    let unit = parse_fixture("renamed/renamed_test.go");
    let template = SignatureTemplate::default().with_test_import("foobar");
    assert_eq!(test_names(&unit, &template), vec!["TestNewAlias"]);

    let skipped = toggled("renamed/renamed_test.go", &template, ToggleAction::Skip);
    assert!(skipped.contains("func TestNewAlias(t *foobar.T) {\n\tt.Skip()\n\tt.Log(\"new\")"));
    assert!(skipped.contains("func TestOldAlias(t *testing.T) {\n\tt.Log(\"old\")"));
}

// =============================================================================
// inline sources
// =============================================================================

#[test]
fn test_inline_skip_then_unskip_round_trip() {
    let src = "package main\n\nimport \"testing\"\n\nfunc TestFoo(t *testing.T) { s := \"foo\"; print(s) }\n";
    let template = SignatureTemplate::default();

    let mut unit = SourceUnit::parse("inline_test.go", src).unwrap();
    toggle_unit(&mut unit, &template, ToggleAction::Skip).unwrap();
    assert_eq!(
        unit.source(),
        "package main\n\nimport \"testing\"\n\nfunc TestFoo(t *testing.T) { t.Skip(); s := \"foo\"; print(s) }\n"
    );

    toggle_unit(&mut unit, &template, ToggleAction::Unskip).unwrap();
    assert_eq!(unit.into_text(), src);
}

#[test]
fn test_inline_nested_function_literal_is_not_a_test() {
    let src = "package main\n\nimport \"testing\"\n\nvar TestVar = func(t *testing.T) {\n\tprintln(1)\n}\n";
    let mut unit = SourceUnit::parse("inline_test.go", src).unwrap();
    let stats = toggle_unit(&mut unit, &SignatureTemplate::default(), ToggleAction::Skip).unwrap();

    assert_eq!(stats.matched, 0);
    assert_eq!(unit.into_text(), src);
}
