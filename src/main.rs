use clap::Parser;

use action_wiring::cli::commands::{cmd_analyze, cmd_inspect, cmd_validate, cmd_watch};
use action_wiring::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Inspect { html, format } => {
            cmd_inspect(&html, &format, cli.verbose)?;
        }
        Commands::Validate {
            html,
            mappings,
            tools,
            placeholders_from_html,
            format,
            output,
        } => {
            let output = output.or(config.validate.output.clone());
            let passed = cmd_validate(
                &html,
                &mappings,
                &tools,
                placeholders_from_html,
                &format,
                output.as_deref(),
                cli.verbose,
            )?;
            if !passed {
                std::process::exit(1);
            }
        }
        Commands::Analyze {
            html,
            format,
            output_dir,
        } => {
            cmd_analyze(&html, &format, output_dir.as_deref(), cli.verbose)?;
        }
        Commands::Watch {
            html,
            mappings,
            tools,
            debounce_ms,
            trace,
        } => {
            // Resolve watch settings: CLI > config > defaults
            let debounce_ms = debounce_ms.unwrap_or(config.watch.debounce_ms);
            let trace = trace.or(config.watch.trace.clone());
            cmd_watch(
                &html,
                &mappings,
                &tools,
                debounce_ms,
                config.watch.poll_ms,
                trace.as_deref(),
                cli.verbose,
            )?;
        }
    }

    Ok(())
}
