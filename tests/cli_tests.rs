use clap::Parser;

use action_wiring::cli::commands::{load_mappings, load_tools, sanitize_filename};
use action_wiring::cli::config::{AppConfig, Cli, Commands, load_config};

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_inspect_minimal() {
    let cli = Cli::parse_from(["action-wiring", "inspect", "--html", "page.html"]);
    match cli.command {
        Commands::Inspect { html, format } => {
            assert_eq!(html, "page.html");
            assert_eq!(format, "console");
        }
        _ => panic!("Expected Inspect command"),
    }
}

#[test]
fn cli_parse_validate_all_args() {
    let cli = Cli::parse_from([
        "action-wiring",
        "validate",
        "--html",
        "page.html",
        "--mappings",
        "mappings.yaml",
        "--tools",
        "tools.yaml",
        "--placeholders-from-html",
        "true",
        "--format",
        "json",
        "--output",
        "report.json",
    ]);
    match cli.command {
        Commands::Validate {
            html,
            mappings,
            tools,
            placeholders_from_html,
            format,
            output,
        } => {
            assert_eq!(html, "page.html");
            assert_eq!(mappings, "mappings.yaml");
            assert_eq!(tools, "tools.yaml");
            assert!(placeholders_from_html);
            assert_eq!(format, "json");
            assert_eq!(output, Some("report.json".to_string()));
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn cli_parse_analyze_defaults() {
    let cli = Cli::parse_from(["action-wiring", "analyze", "--html", "page.html"]);
    match cli.command {
        Commands::Analyze {
            html,
            format,
            output_dir,
        } => {
            assert_eq!(html, "page.html");
            assert_eq!(format, "console");
            assert!(output_dir.is_none());
        }
        _ => panic!("Expected Analyze command"),
    }
}

#[test]
fn cli_parse_watch_optional_settings() {
    let cli = Cli::parse_from([
        "action-wiring",
        "watch",
        "--html",
        "page.html",
        "--mappings",
        "m.yaml",
        "--tools",
        "t.yaml",
        "--debounce-ms",
        "500",
    ]);
    match cli.command {
        Commands::Watch {
            debounce_ms, trace, ..
        } => {
            assert_eq!(debounce_ms, Some(500));
            assert!(trace.is_none());
        }
        _ => panic!("Expected Watch command"),
    }
}

#[test]
fn cli_parse_global_verbose() {
    let cli = Cli::parse_from(["action-wiring", "-v", "inspect", "--html", "p.html"]);
    assert_eq!(cli.verbose, 1);

    let cli2 = Cli::parse_from(["action-wiring", "-vv", "inspect", "--html", "p.html"]);
    assert_eq!(cli2.verbose, 2);
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn config_load_missing_file() {
    let config = load_config(Some("nonexistent_file_that_does_not_exist.yaml"));
    // Should return defaults without error
    assert_eq!(config.validate.format, "console");
    assert_eq!(config.watch.debounce_ms, 300);
    assert_eq!(config.watch.poll_ms, 100);
}

#[test]
fn config_default_values() {
    let config = AppConfig::default();
    assert_eq!(config.validate.format, "console");
    assert!(config.validate.output.is_none());
    assert_eq!(config.watch.debounce_ms, 300);
    assert!(config.watch.trace.is_none());
}

#[test]
fn config_partial_yaml() {
    let yaml = r#"
watch:
  debounce_ms: 750
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.watch.debounce_ms, 750);
    // Other watch fields get defaults
    assert_eq!(config.watch.poll_ms, 100);
    // Validate gets full defaults
    assert_eq!(config.validate.format, "console");
}

#[test]
fn config_yaml_roundtrip() {
    let config = AppConfig::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: AppConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed.watch.debounce_ms, config.watch.debounce_ms);
    assert_eq!(parsed.validate.format, config.validate.format);
}

// ============================================================================
// Input file loading
// ============================================================================

#[test]
fn load_tools_single_yaml_file_with_list() {
    use std::io::Write;

    let dir = std::env::temp_dir().join("action_wiring_cli_test_tools");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("tools.yaml");

    let yaml = r#"
- name: submit_login
  serverName: auth
  inputSchema:
    properties:
      email:
        type: string
    required:
      - email
- name: fetch_orders_data
  serverName: store
"#;
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(yaml.as_bytes()).unwrap();

    let tools = load_tools(path.to_str().unwrap()).unwrap();
    assert_eq!(tools.len(), 2);
    assert_eq!(tools[0].name, "submit_login");
    assert_eq!(tools[1].server_name, "store");

    std::fs::remove_file(&path).ok();
    std::fs::remove_dir(&dir).ok();
}

#[test]
fn load_mappings_single_json_object() {
    use std::io::Write;

    let dir = std::env::temp_dir().join("action_wiring_cli_test_mappings");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("mapping.json");

    let json = r#"{
        "id": "m1",
        "uiElementId": "login",
        "uiElementType": "form",
        "toolName": "submit_login",
        "serverName": "auth",
        "parameterSources": {
            "email": { "sourceType": "form", "sourceValue": "email" }
        }
    }"#;
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(json.as_bytes()).unwrap();

    let mappings = load_mappings(path.to_str().unwrap()).unwrap();
    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].ui_element_id, "login");
    assert_eq!(mappings[0].parameter_sources.len(), 1);

    std::fs::remove_file(&path).ok();
    std::fs::remove_dir(&dir).ok();
}

#[test]
fn load_records_from_directory_sorted_by_name() {
    use std::io::Write;

    let dir = std::env::temp_dir().join("action_wiring_cli_test_dir");
    std::fs::create_dir_all(&dir).unwrap();

    let write = |name: &str, body: &str| {
        let mut f = std::fs::File::create(dir.join(name)).unwrap();
        f.write_all(body.as_bytes()).unwrap();
    };
    write("02_second.yaml", "name: second\nserverName: s\n");
    write("01_first.yaml", "name: first\nserverName: s\n");
    write("notes.txt", "not a schema");

    let tools = load_tools(dir.to_str().unwrap()).unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["first", "second"],
        "Directory loads must be name-sorted and skip non-schema files"
    );

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_tools_missing_path_errors() {
    assert!(load_tools("no_such_file_anywhere.yaml").is_err());
}

// ============================================================================
// Helper Tests
// ============================================================================

#[test]
fn sanitize_filename_special_chars() {
    assert_eq!(sanitize_filename("map-submit_login"), "map-submit_login");
    assert_eq!(sanitize_filename("Map: weird/name"), "map__weird_name");
    assert_eq!(sanitize_filename("UPPER case"), "upper_case");
}
