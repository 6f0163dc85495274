use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::extract::extract_elements;
use crate::html;
use crate::infer::analyze;
use crate::mapping::{ActionMapping, ToolSchema, extract_template_placeholders};
use crate::report::{format_analysis_report, format_elements_report, format_validation_report};
use crate::schedule::Debouncer;
use crate::trace::{TraceEvent, TraceLogger, content_fingerprint};
use crate::validate::validate_action_mappings;

// ============================================================================
// inspect subcommand
// ============================================================================

pub fn cmd_inspect(
    html_path: &str,
    format: &str,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let html = std::fs::read_to_string(html_path)?;
    if verbose > 0 {
        eprintln!("Inspecting {} ({} bytes)...", html_path, html.len());
    }

    let doc = html::parse(&html);
    let elements = extract_elements(&doc);
    let placeholders = extract_template_placeholders(&html);

    match format {
        "json" => {
            let payload = serde_json::json!({
                "elements": elements,
                "placeholders": placeholders,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            print!("{}", format_elements_report(&elements));
            if !placeholders.is_empty() {
                println!("\nTemplate placeholders ({}):", placeholders.len());
                for name in &placeholders {
                    println!("  {{{{{}}}}}", name);
                }
            }
        }
    }

    Ok(())
}

// ============================================================================
// validate subcommand
// ============================================================================

/// Validate mappings and return whether everything passed.
pub fn cmd_validate(
    html_path: &str,
    mappings_path: &str,
    tools_path: &str,
    placeholders_from_html: bool,
    format: &str,
    output: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let html = std::fs::read_to_string(html_path)?;
    let mappings = load_mappings(mappings_path)?;
    let tools = load_tools(tools_path)?;

    if verbose > 0 {
        eprintln!(
            "Validating {} mapping(s) against {} tool(s)...",
            mappings.len(),
            tools.len()
        );
    }

    let placeholders = if placeholders_from_html {
        Some(extract_template_placeholders(&html))
    } else {
        None
    };

    let status = validate_action_mappings(&mappings, &html, &tools, placeholders.as_deref());

    let content = match format {
        "json" => serde_json::to_string_pretty(&status)?,
        _ => format_validation_report(&status),
    };
    match output {
        Some(path) => std::fs::write(path, &content)?,
        None => print!("{}", content),
    }

    Ok(status.is_valid())
}

// ============================================================================
// analyze subcommand
// ============================================================================

pub fn cmd_analyze(
    html_path: &str,
    format: &str,
    output_dir: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let html = std::fs::read_to_string(html_path)?;
    if verbose > 0 {
        eprintln!("Analyzing {} for tool candidates...", html_path);
    }

    let result = analyze(&html);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => print!("{}", format_analysis_report(&result)),
    }

    // Write each suggested mapping as YAML for human review
    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)?;
        for (i, mapping) in result.suggested_mappings.iter().enumerate() {
            let filename = format!("{:03}_{}.yaml", i + 1, sanitize_filename(&mapping.id));
            let path = Path::new(dir).join(&filename);
            let yaml = serde_yaml::to_string(mapping)?;
            std::fs::write(&path, &yaml)?;
            if verbose > 0 {
                eprintln!("  Wrote: {}", path.display());
            }
        }
        println!(
            "Wrote {} suggested mapping(s) to {}/",
            result.suggested_mappings.len(),
            dir
        );
    }

    Ok(())
}

// ============================================================================
// watch subcommand
// ============================================================================

/// Poll the HTML file and re-validate on change, debounced so a burst of
/// edits triggers a single pass.
pub fn cmd_watch(
    html_path: &str,
    mappings_path: &str,
    tools_path: &str,
    debounce_ms: u64,
    poll_ms: u64,
    trace_path: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let tracer = Arc::new(TraceLogger::new(trace_path));
    let debouncer = Debouncer::new(Duration::from_millis(debounce_ms));
    let run_counter = Arc::new(AtomicU64::new(0));

    eprintln!(
        "Watching {} (debounce {}ms, poll {}ms). Ctrl+C to stop.",
        html_path, debounce_ms, poll_ms
    );

    let mut last_fingerprint = String::new();
    let mut trigger = "initial";

    loop {
        let html = match std::fs::read_to_string(html_path) {
            Ok(content) => content,
            Err(e) => {
                if verbose > 0 {
                    eprintln!("Warning: could not read '{}': {}", html_path, e);
                }
                std::thread::sleep(Duration::from_millis(poll_ms));
                continue;
            }
        };

        let fingerprint = content_fingerprint(&html);
        if fingerprint != last_fingerprint {
            last_fingerprint = fingerprint.clone();

            // Snapshots move into the scheduled job; inputs are reloaded
            // per run so mapping/tool edits are picked up too.
            let mappings = load_mappings(mappings_path).unwrap_or_default();
            let tools = load_tools(tools_path).unwrap_or_default();
            let tracer = Arc::clone(&tracer);
            let run_counter = Arc::clone(&run_counter);
            let trigger_name = trigger.to_string();

            debouncer.schedule(move || {
                let placeholders = extract_template_placeholders(&html);
                let status =
                    validate_action_mappings(&mappings, &html, &tools, Some(&placeholders));
                let run = run_counter.fetch_add(1, Ordering::SeqCst) + 1;

                print!("{}", format_validation_report(&status));
                tracer.log(
                    &TraceEvent::now(run, &trigger_name)
                        .with_fingerprint(&fingerprint)
                        .with_status(&status),
                );
            });

            trigger = "change";
        }

        std::thread::sleep(Duration::from_millis(poll_ms));
    }
}

// ============================================================================
// Input file loading
// ============================================================================

/// Load tool schemas from a single YAML/JSON file or a directory of them.
/// A file may hold one schema or a list.
pub fn load_tools(path: &str) -> Result<Vec<ToolSchema>, Box<dyn std::error::Error>> {
    load_records(path)
}

/// Load action mappings from a single YAML/JSON file or a directory of
/// them. A file may hold one mapping or a list.
pub fn load_mappings(path: &str) -> Result<Vec<ActionMapping>, Box<dyn std::error::Error>> {
    load_records(path)
}

fn load_records<T>(path: &str) -> Result<Vec<T>, Box<dyn std::error::Error>>
where
    T: serde::de::DeserializeOwned,
{
    let metadata = std::fs::metadata(path)?;
    if metadata.is_dir() {
        let mut files: Vec<std::path::PathBuf> = std::fs::read_dir(path)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| {
                p.extension()
                    .map_or(false, |e| e == "yaml" || e == "yml" || e == "json")
            })
            .collect();
        // Sort by name for deterministic order
        files.sort();

        let mut records = Vec::new();
        for file in files {
            records.extend(parse_records_file(&file)?);
        }
        Ok(records)
    } else {
        parse_records_file(Path::new(path))
    }
}

fn parse_records_file<T>(path: &Path) -> Result<Vec<T>, Box<dyn std::error::Error>>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)?;
    let is_json = path.extension().map_or(false, |e| e == "json");

    if is_json {
        match serde_json::from_str::<Vec<T>>(&content) {
            Ok(list) => Ok(list),
            Err(_) => Ok(vec![serde_json::from_str::<T>(&content)?]),
        }
    } else {
        match serde_yaml::from_str::<Vec<T>>(&content) {
            Ok(list) => Ok(list),
            Err(_) => Ok(vec![serde_yaml::from_str::<T>(&content)?]),
        }
    }
}

/// Sanitize a mapping id into a safe filename.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .to_lowercase()
}
