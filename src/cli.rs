use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// tdee — estimate daily energy expenditure and a calorie/PFC intake plan.
#[derive(Parser, Debug)]
#[command(name = "tdee")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate TDEE and intake; prompts for any missing input.
    Calc(CalcArgs),

    /// List the activity levels and their factors.
    Activities,

    /// List selectable monthly loss targets for a body weight.
    Targets {
        /// Body weight in kg.
        #[arg(long)]
        weight: f64,
    },

    /// Calculate every row of a CSV file.
    Batch {
        /// Input CSV with weight_kg,body_fat_pct,activity,target_loss_kg_per_month.
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV path.
        #[arg(short, long, default_value = "tdee_results.csv")]
        output: PathBuf,

        /// Use the fixed 28 × LBM formula.
        #[arg(long)]
        legacy: bool,

        /// Overwrite the output file without asking.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct CalcArgs {
    /// Body weight in kg.
    #[arg(short, long, allow_negative_numbers = true)]
    pub weight: Option<f64>,

    /// Body fat percentage (0-100).
    #[arg(short, long, allow_negative_numbers = true)]
    pub body_fat: Option<f64>,

    /// Activity level: 1-5 or a name such as "sedentary".
    #[arg(short, long, allow_negative_numbers = true)]
    pub activity: Option<String>,

    /// Monthly weight-loss target in kg.
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: Option<f64>,

    /// Use the fixed 28 × LBM formula instead of the lean-mass tiers.
    #[arg(long)]
    pub legacy: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl CalcArgs {
    /// True when every required input came from flags.
    pub fn is_complete(&self) -> bool {
        self.weight.is_some() && self.body_fat.is_some() && self.activity.is_some()
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Calc(CalcArgs::default())
    }
}
