mod cli;
mod config;
mod core;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands, RunArgs};
use crate::core::report::{JsonReport, print_human, print_rules};
use crate::core::{PartialProfile, run_forecast};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Forecast(args) => forecast(args),
        Commands::Rules => {
            print_rules();
            Ok(0)
        }
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `beatforecast init`; writing ./beatforecast.toml"
                );
            }

            let path = std::env::current_dir()?.join("beatforecast.toml");
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn forecast(args: RunArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let mut cfg = config::load_config(args.config.as_deref(), &cwd)?;
    cfg.general.json = args.json || cfg.general.json;
    cfg.general.strict_domain = args.strict || cfg.general.strict_domain;

    // Layering: config defaults, then the track file, then individual flags.
    let mut profile = cfg.defaults;
    if let Some(path) = &args.input {
        profile = PartialProfile::load(path)?.apply(profile);
    }
    profile = args.overrides.into_partial().apply(profile);

    let report = run_forecast(profile, &cfg)?;

    if cfg.general.json {
        println!("{}", serde_json::to_string_pretty(&JsonReport::from(&report))?);
    } else {
        print_human(&report);
    }

    if report.exit.ok { Ok(0) } else { Ok(1) }
}
