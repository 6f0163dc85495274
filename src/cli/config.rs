use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "action-wiring",
    version,
    about = "Wire interactive HTML elements to backend tool calls"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: action-wiring.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the interactive elements and template placeholders in an HTML file
    Inspect {
        /// Path to the HTML file
        #[arg(long)]
        html: String,

        /// Output format: console, json
        #[arg(long, default_value = "console")]
        format: String,
    },

    /// Validate action mappings against HTML and declared tool schemas
    Validate {
        /// Path to the HTML file
        #[arg(long)]
        html: String,

        /// Path to a mapping YAML/JSON file or a directory of them
        #[arg(long)]
        mappings: String,

        /// Path to a tool schema YAML/JSON file or a directory of them
        #[arg(long)]
        tools: String,

        /// Check agent placeholders against the template's {{...}} set
        #[arg(long, default_value_t = false, action = clap::ArgAction::Set)]
        placeholders_from_html: bool,

        /// Output format: console, json
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Infer candidate tools and default mappings from HTML structure
    Analyze {
        /// Path to the HTML file
        #[arg(long)]
        html: String,

        /// Output format: console, json
        #[arg(long, default_value = "console")]
        format: String,

        /// Directory to write suggested mapping YAML files into
        #[arg(short, long)]
        output_dir: Option<String>,
    },

    /// Re-validate whenever the HTML file changes, debounced
    Watch {
        /// Path to the HTML file
        #[arg(long)]
        html: String,

        /// Path to a mapping YAML/JSON file or a directory of them
        #[arg(long)]
        mappings: String,

        /// Path to a tool schema YAML/JSON file or a directory of them
        #[arg(long)]
        tools: String,

        /// Quiet period before a change triggers re-validation
        #[arg(long)]
        debounce_ms: Option<u64>,

        /// JSONL trace file recording each validation run
        #[arg(long)]
        trace: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `action-wiring.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub validate: ValidateConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            output: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,

    pub trace: Option<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            poll_ms: 100,
            trace: None,
        }
    }
}

// Serde default helpers
fn default_console() -> String { "console".to_string() }
fn default_debounce_ms() -> u64 { 300 }
fn default_poll_ms() -> u64 { 100 }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("action-wiring.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
