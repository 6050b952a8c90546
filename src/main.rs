use clap::Parser;
use std::path::Path;
use tracing::{info, warn};

use tdee_calc_rs::batch::{check_input, run_batch};
use tdee_calc_rs::calculator::{BmrMode, calculate, target_loss_options};
use tdee_calc_rs::cli::{CalcArgs, Cli, Command};
use tdee_calc_rs::error::Result;
use tdee_calc_rs::interface::{
    build_report, display_activity_table, display_report, display_target_options,
    prompt_activity, prompt_body_fat, prompt_target, prompt_weight, prompt_yes_no,
};
use tdee_calc_rs::logging;
use tdee_calc_rs::models::{ActivityLevel, Inputs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calc(args) => cmd_calc(args),
        Command::Activities => {
            display_activity_table();
            Ok(())
        }
        Command::Targets { weight } => {
            display_target_options(weight, &target_loss_options(weight));
            Ok(())
        }
        Command::Batch {
            input,
            output,
            legacy,
            force,
        } => cmd_batch(&input, &output, mode_for(legacy), force),
    }
}

fn mode_for(legacy: bool) -> BmrMode {
    if legacy {
        BmrMode::Legacy
    } else {
        BmrMode::Tiered
    }
}

/// Calculate from flags, prompting for whatever is missing.
fn cmd_calc(args: CalcArgs) -> Result<()> {
    let interactive = !args.is_complete();
    let mode = mode_for(args.legacy);

    let weight = match args.weight {
        Some(w) => w,
        None => prompt_weight()?,
    };
    let body_fat = match args.body_fat {
        Some(bf) => bf,
        None => prompt_body_fat()?,
    };
    let activity = match &args.activity {
        Some(text) => ActivityLevel::resolve(text)?,
        None => prompt_activity()?,
    };
    let target = match args.target {
        Some(t) => Some(t),
        None if interactive => prompt_target(weight)?,
        None => None,
    };

    info!(weight, body_fat, activity = ?activity, ?target, ?mode, "calculating");

    let inputs = Inputs::new(weight, body_fat, i64::from(activity.key()), target);
    let derived = calculate(&inputs, mode)?;

    if derived.low_intake_warning() {
        warn!(
            intake_kcal = derived.intake_kcal(),
            "recommended intake is below the safe minimum"
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&derived)?);
    } else {
        display_report(&build_report(&derived));
    }

    Ok(())
}

/// Calculate every row of a CSV file.
fn cmd_batch(input: &Path, output: &Path, mode: BmrMode, force: bool) -> Result<()> {
    check_input(input)?;

    if output.exists() && !force {
        let overwrite = prompt_yes_no(
            &format!("{} already exists. Overwrite?", output.display()),
            false,
        )?;
        if !overwrite {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let (rows, failed) = run_batch(input, output, mode)?;
    println!(
        "Wrote {} rows to {} ({} invalid).",
        rows,
        output.display(),
        failed
    );

    Ok(())
}
