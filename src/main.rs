//! Notion Export Cleaner - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use notion_export_cleaner::{
    cli::Args,
    config::{default_config_path, validate_config, Config},
    error::{exit_codes, Result},
    normalize::normalize_export,
    output::{
        print_banner, print_config_summary, print_error, print_info, print_plan,
        print_run_stats, print_success, print_warning, prompt_export_root,
    },
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let mut config = if args.config.is_some() {
        Config::load(&config_path)?
    } else {
        Config::load_or_default(&config_path)?
    };

    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let root = match &args.root {
        Some(root) => root.clone(),
        None => prompt_export_root()?,
    };

    print_config_summary(
        &root.display().to_string(),
        config.options.dry_run,
        config.options.rename_root,
    );

    print_info("Cleaning export...");
    let report = normalize_export(&config, &root)?;

    if config.options.rename_root && report.workspace.is_none() {
        print_warning("Workspace name not found; the export root keeps its name");
    }

    if config.options.dry_run {
        print_plan(&report);
    }

    if let Some(mapping_path) = &args.mapping {
        report.mapping.write_json(mapping_path)?;
        print_info(&format!("Mapping written to {}", mapping_path.display()));
    }

    print_run_stats(&report);

    if !config.options.dry_run {
        print_success("All tasks completed successfully.");
    }

    Ok(())
}
