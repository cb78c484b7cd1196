use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

mod commands;
mod config;
mod error;
mod logging;
mod nutrition;
mod store;
mod templates;
mod utils;

use crate::commands::Login;
use crate::config::Config;
use crate::error::Result;
use crate::nutrition::food::{FoodItem, Nutrients, DEFAULT_SERVING_G};
use crate::nutrition::journal::MealType;
use crate::nutrition::profile::{ActivityLevel, Gender};
use crate::utils::date::{parse_date_arg, today};

const LONG_ABOUT: &str = "\
nutrack keeps a personal food journal and daily nutrition targets in plain text files.

Targets are derived from body metrics with the Mifflin-St Jeor equation and an
activity multiplier, then split into protein, carbohydrate and fat goals. Every
logged food is appended to the user's journal file; a day's consumption is
rebuilt from that file each time it is requested.

All data lives in one directory (see --data-dir): the credential list, the
shared food catalog and one journal plus one custom-food list per user.";

const AFTER_HELP: &str = "\
EXAMPLES:
    Set up a data directory with the starter food catalog:
        $ nutrack init

    Create an account:
        $ nutrack register --username ada --name \"Ada Lovelace\" --age 25 \\
              --gender female --height 170 --weight 60 --activity lightly-active

    Log 150g of chicken for lunch:
        $ nutrack add chicken --grams 150 --meal lunch -u ada

    Review the day:
        $ nutrack today -u ada
        $ nutrack recommend -u ada
        $ nutrack summary -u ada

PASSWORDS:
    Pass --password or set NUTRACK_PASSWORD. Passwords are stored as
    SHA-256 digests in users.txt, never in clear text.

CONFIGURATION:
    Settings are read from ./nutrack.toml (or --config / NUTRACK_CONFIG),
    then from NUTRACK__DATA_DIR, NUTRACK__CATALOG_FILE and NUTRACK__LOG_LEVEL.
    Set NUTRACK_LOG=debug to trace file access on stderr.";

#[derive(Parser)]
#[command(name = "nutrack")]
#[command(version)]
#[command(about = "Flat-file nutrition tracker with calorie and macro targets")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Configuration file (default: ./nutrack.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding users.txt, the food catalog and journals
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Treat this day as today (format 2025-6-12)
    #[arg(long, global = true, value_name = "Y-M-D", value_parser = parse_date_arg)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LoginArgs {
    /// Account name
    #[arg(short, long)]
    user: String,

    /// Account password
    #[arg(long, env = "NUTRACK_PASSWORD", hide_env_values = true)]
    password: String,
}

impl From<LoginArgs> for Login {
    fn from(args: LoginArgs) -> Self {
        Login {
            user: args.user,
            password: args.password,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and the starter food catalog
    #[command(
        long_about = "\
Create the data directory and the starter food catalog.

Writes the shared catalog (foods.txt by default) from the built-in list of
common foods. An existing catalog is left untouched.",
        after_help = "\
EXAMPLES:
    $ nutrack init
    $ nutrack --data-dir ~/.nutrack init"
    )]
    Init,

    /// Create an account and compute its daily targets
    #[command(
        long_about = "\
Create an account and compute its daily targets.

Stores the password digest in users.txt, writes the profile block to a new
user_<username>_data.txt journal and prints the calorie and macro targets.

Targets:
  • Calories: BMR (Mifflin-St Jeor) x activity multiplier
  • Protein:  2 g per kg body weight
  • Carbs:    55% of calories
  • Fat:      25% of calories",
        after_help = "\
EXAMPLES:
    $ nutrack register --username ada --name \"Ada Lovelace\" --age 25 \\
          --gender female --height 170 --weight 60 --activity sedentary"
    )]
    Register {
        /// Account name (letters, digits, '_', '-', '.')
        #[arg(long)]
        username: String,

        /// Account password
        #[arg(long, env = "NUTRACK_PASSWORD", hide_env_values = true)]
        password: String,

        /// Full name
        #[arg(long = "name")]
        full_name: String,

        /// Age in years
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=120))]
        age: u32,

        #[arg(long, value_enum)]
        gender: Gender,

        /// Height in centimetres (50-300)
        #[arg(long = "height")]
        height_cm: f64,

        /// Weight in kilograms
        #[arg(long = "weight")]
        weight_kg: f64,

        #[arg(long, value_enum, default_value = "sedentary")]
        activity: ActivityLevel,
    },

    /// Show the profile and daily targets
    Profile {
        #[command(flatten)]
        login: LoginArgs,
    },

    /// Search the shared and custom food catalogs
    #[command(after_help = "\
EXAMPLES:
    $ nutrack search rice -u ada

OUTPUT:
    Results:
      1. White Rice (cooked) (130 kcal/100g, P 2.7 / C 28 / F 0.3)
      2. Brown Rice (cooked) (112 kcal/100g, P 2.3 / C 24 / F 0.8)")]
    Search {
        /// Case-insensitive part of the food name
        query: String,

        #[command(flatten)]
        login: LoginArgs,
    },

    /// Log a catalog food to the journal
    #[command(
        long_about = "\
Log a catalog food to the journal.

The query is matched against the shared and custom catalogs. An exact name
match (ignoring case) or a single result is used directly; when several
foods match, choose one with --pick using the number shown by 'search'.",
        after_help = "\
EXAMPLES:
    $ nutrack add banana --grams 120 --meal breakfast -u ada
    $ nutrack add rice --grams 200 --pick 2 -u ada"
    )]
    Add {
        /// Food to log
        query: String,

        /// Amount eaten in grams
        #[arg(long, short)]
        grams: f64,

        #[arg(long, short, value_enum, default_value = "snack")]
        meal: MealType,

        /// Result number to use when the query matches several foods
        #[arg(long)]
        pick: Option<usize>,

        #[command(flatten)]
        login: LoginArgs,
    },

    /// Save a food to the personal catalog
    #[command(after_help = "\
EXAMPLES:
    $ nutrack custom --name \"Protein Bar\" --serving 60 --calories 220 \\
          --protein 20 --carbs 22 --fat 7 --log-grams 60 -u ada")]
    Custom {
        #[arg(long)]
        name: String,

        /// Reference serving in grams
        #[arg(long, default_value_t = DEFAULT_SERVING_G)]
        serving: f64,

        /// kcal per serving
        #[arg(long)]
        calories: f64,

        /// Protein grams per serving
        #[arg(long)]
        protein: f64,

        /// Carbohydrate grams per serving
        #[arg(long)]
        carbs: f64,

        /// Fat grams per serving
        #[arg(long)]
        fat: f64,

        /// Also log this many grams of the new food
        #[arg(long)]
        log_grams: Option<f64>,

        #[arg(long, short, value_enum, default_value = "custom")]
        meal: MealType,

        #[command(flatten)]
        login: LoginArgs,
    },

    /// Show the day's entries, totals and remaining targets
    Today {
        #[command(flatten)]
        login: LoginArgs,
    },

    /// Suggest foods for the remaining macro targets
    Recommend {
        #[command(flatten)]
        login: LoginArgs,
    },

    /// Compare the day's intake against the targets
    Summary {
        #[command(flatten)]
        login: LoginArgs,
    },

    /// Record a new body weight and recompute targets
    Weight {
        /// New weight in kilograms
        kg: f64,

        #[command(flatten)]
        login: LoginArgs,
    },

    /// List recorded weight updates
    History {
        #[command(flatten)]
        login: LoginArgs,
    },
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?.with_data_dir(cli.data_dir);
    logging::init_logging(&config.log_level);

    let paths = config.paths();
    let date = cli.date.unwrap_or_else(today);
    tracing::debug!(data_dir = %paths.root().display(), %date, "starting");

    match cli.command {
        Commands::Init => commands::init::run(&paths),
        Commands::Register {
            username,
            password,
            full_name,
            age,
            gender,
            height_cm,
            weight_kg,
            activity,
        } => {
            let options = commands::register::RegisterOptions {
                username,
                password,
                full_name,
                age,
                gender,
                height_cm,
                weight_kg,
                activity,
            };
            commands::register::run(&paths, options)
        }
        Commands::Profile { login } => commands::profile::run(&paths, &login.into()),
        Commands::Search { query, login } => commands::search::run(&paths, &login.into(), &query),
        Commands::Add {
            query,
            grams,
            meal,
            pick,
            login,
        } => {
            let options = commands::add::AddOptions {
                query,
                grams,
                meal,
                pick,
            };
            commands::add::run(&paths, &login.into(), options, date)
        }
        Commands::Custom {
            name,
            serving,
            calories,
            protein,
            carbs,
            fat,
            log_grams,
            meal,
            login,
        } => {
            let options = commands::custom::CustomOptions {
                food: FoodItem {
                    name: name.trim().to_string(),
                    nutrients: Nutrients {
                        calories,
                        protein,
                        carbs,
                        fat,
                    },
                    serving_size: serving,
                },
                log_grams,
                meal,
            };
            commands::custom::run(&paths, &login.into(), options, date)
        }
        Commands::Today { login } => commands::today::run(&paths, &login.into(), date),
        Commands::Recommend { login } => commands::recommend::run(&paths, &login.into(), date),
        Commands::Summary { login } => commands::summary::run(&paths, &login.into(), date),
        Commands::Weight { kg, login } => commands::weight::run(&paths, &login.into(), kg, date),
        Commands::History { login } => commands::history::run(&paths, &login.into()),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
