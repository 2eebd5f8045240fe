// Visitor Pass Manager - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/visitor-pass-manager
// ```
//
// Or with a custom roster:
//
// ```console
// $ ./target/release/visitor-pass-manager --employee E001:Alice --employee E002:Bob --pre-approval-limit 3 --verbose
// ```

use anyhow::{anyhow, Context};
use clap::Parser;
use std::io;
use std::process;
use tracing::{error, info};
use visitor_pass_manager::service::{FrontDesk, LoggingConfig, LoggingGuard};
use visitor_pass_manager::shell::MainMenu;
use visitor_pass_manager::types::{AppConfig, CliArgs};
use visitor_pass_manager::user::Identity;

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match AppConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Held until exit so the file writer flushes
    let _logging_guard = match init_logging(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    };

    info!("Starting Visitor Pass Manager");

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    info!("Visitor Pass Manager exited");
}

fn init_logging(args: &CliArgs) -> anyhow::Result<LoggingGuard> {
    let mut logging = LoggingConfig::for_verbosity(args.verbose, args.debug);
    if args.json_logs {
        logging = logging.with_json_format();
    }
    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_logging(dir.as_str());
    }
    logging
        .init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let dry_run = args.dry_run;

    let config = AppConfig::from_cli_args(args).context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - the desk will not be opened.");
        print_configuration_summary(&config);
        return Ok(());
    }

    print_startup_banner(&config);

    let mut desk = FrontDesk::new(&config);
    {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut menu = MainMenu::new(&mut desk, stdin.lock(), stdout.lock());
        menu.run().context("Console session failed")?;
    }

    let stats = desk.close();
    eprintln!();
    eprintln!("{}", stats);
    Ok(())
}

fn print_startup_banner(config: &AppConfig) {
    eprintln!("Visitor Pass Manager");
    eprintln!("====================");
    eprintln!("Front desk visitor registration and ePass tracking");
    eprintln!();

    print_configuration_summary(config);
}

fn print_configuration_summary(config: &AppConfig) {
    eprintln!("Configuration:");
    eprintln!("  Pre-approval Limit: {}", config.pre_approval_limit);
    eprintln!(
        "  Security Officer: {}",
        Identity::new(config.security_officer.id.as_str(), config.security_officer.name.as_str())
    );
    eprintln!(
        "  Administrator: {}",
        Identity::new(config.admin.id.as_str(), config.admin.name.as_str())
    );
    eprintln!("  Employees ({}):", config.employees.len());
    for seed in &config.employees {
        eprintln!("    {}", Identity::new(seed.id.as_str(), seed.name.as_str()));
    }
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
