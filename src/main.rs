//! bluarchive - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use bluarchive::{
    api::{BluprintApi, Credentials},
    cli::Args,
    config::{validate_config, Config, TestMode},
    download::archive,
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_stats,
        print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Unconfigured(_)
                | Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::IniParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::NotAuthenticated { .. } | Error::Api(_) | Error::TooManyPatterns { .. } => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Download(_) | Error::Remux { .. } | Error::RemuxNotFound(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration (writes a template and stops when absent)
    let config_path = args.config.clone();
    let mut config = Config::load(&config_path)?;

    args.merge_into_config(&mut config);

    // Validate configuration before any network call
    validate_config(&config)?;

    print_config_summary(
        &config.account.user_id,
        &config.output_directory().display().to_string(),
        config.options.download_patterns,
        config.options.download_materials,
        config.options.download_videos,
        &config.options.test_mode.to_string(),
    );

    if config.options.test_mode != TestMode::Off {
        print_warning(&format!(
            "Test mode ({}) is on; the archive will be incomplete",
            config.options.test_mode
        ));
    }

    if !config.options.download_patterns && !config.wants_classes() {
        print_warning("Patterns, materials and videos are all disabled; nothing to do");
        return Ok(());
    }

    let api = BluprintApi::new(&Credentials::new(
        config.account.user_id.clone(),
        config.account.token.clone(),
    ))?;

    print_info("Archiving from Bluprint...");
    let stats = archive(&api, &config).await?;

    print_run_stats(&stats);
    print_success(&format!(
        "Archive complete in {}",
        config.output_directory().display()
    ));

    Ok(())
}
