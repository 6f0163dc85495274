use action_wiring::analyze_for_tools;
use action_wiring::extract::ElementType;
use action_wiring::mapping::ParameterSource;
use action_wiring::parse_interactive_elements;
use action_wiring::report::{
    format_analysis_report, format_elements_report, format_validation_report,
};
use action_wiring::validate_action_mappings;

mod common;

use common::fixtures::{LOGIN_PAGE, mapping, tool, with_source};

// ============================================================================
// Element inventory report
// ============================================================================

#[test]
fn elements_report_lists_forms_with_their_fields() {
    let elements = parse_interactive_elements(LOGIN_PAGE);
    let report = format_elements_report(&elements);

    assert!(report.contains("=== Interactive Elements (3) ==="));
    assert!(report.contains("login"), "Form id must appear:\n{}", report);
    assert!(report.contains("(2 fields)"));
    assert!(report.contains("email (email, required)"));
    assert!(report.contains("password (password, required)"));
    assert!(report.contains("refresh"));
}

#[test]
fn elements_report_handles_an_empty_inventory() {
    let report = format_elements_report(&[]);
    assert!(report.contains("=== Interactive Elements (0) ==="));
}

// ============================================================================
// Validation report
// ============================================================================

#[test]
fn passing_validation_prints_a_pass_marker() {
    let html = r#"<form id="f"><input id="email" type="email"></form>"#;
    let tools = vec![tool("submit_f", "app", &[("email", "string")], &["email"])];
    let mappings = vec![with_source(
        mapping("m1", "f", ElementType::Form, "submit_f", "app"),
        "email",
        ParameterSource::Form("email".into()),
    )];

    let status = validate_action_mappings(&mappings, html, &tools, None);
    let report = format_validation_report(&status);

    assert!(report.contains("\u{2713} PASS"), "{}", report);
    assert!(report.contains("All mappings resolve cleanly."));
}

#[test]
fn failing_validation_groups_diagnostics_by_category() {
    let html = r#"<form id="f"><input id="email" type="email"></form>"#;
    let tools = vec![tool(
        "submit_f",
        "app",
        &[("email", "number")],
        &["email", "ghost"],
    )];
    let mappings = vec![with_source(
        mapping("m1", "f", ElementType::Form, "submit_f", "app"),
        "email",
        ParameterSource::Form("email".into()),
    )];

    let status = validate_action_mappings(&mappings, html, &tools, None);
    let report = format_validation_report(&status);

    assert!(report.contains("\u{2717} FAIL"), "{}", report);
    assert!(report.contains("Missing (1):"));
    assert!(report.contains("ghost"));
    assert!(report.contains("Type mismatches (1):"));
    assert!(
        report.contains("f.email: expected number, found string"),
        "{}",
        report
    );
}

#[test]
fn warnings_section_appears_without_failing_the_verdict() {
    let tools = vec![tool("submit_login", "app", &[], &[])];
    let mappings = vec![mapping(
        "m1",
        "login",
        ElementType::Form,
        "submit_login",
        "app",
    )];

    let status = validate_action_mappings(&mappings, LOGIN_PAGE, &tools, None);
    let report = format_validation_report(&status);

    assert!(report.contains("\u{2713} PASS"));
    assert!(report.contains("Warnings (2):"), "{}", report);
    assert!(report.contains("  ! "));
}

// ============================================================================
// Analysis report
// ============================================================================

#[test]
fn analysis_report_shows_tools_parameters_and_confidence() {
    let html = r#"
        <form id="signup">
          <input id="email" type="email" required>
          <input id="password" type="password" required>
        </form>
    "#;
    let result = analyze_for_tools(html);
    let report = format_analysis_report(&result);

    assert!(report.contains("=== Inferred Tools (1) ==="));
    assert!(report.contains("submit_signup"));
    assert!(report.contains("(confidence 0.9)"));
    assert!(report.contains("- email: string, required"));
    assert!(report.contains("- password: string, required"));
    assert!(report.contains("1 suggested mapping(s) ready for review"));
}

#[test]
fn analysis_report_shows_implementation_kind() {
    let result = analyze_for_tools(r#"<table id="orders"></table>"#);
    let report = format_analysis_report(&result);

    assert!(
        report.contains("fetch_orders_data [database] (confidence 0.8)"),
        "{}",
        report
    );
}
