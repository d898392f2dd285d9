use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mood_score::config::{self, Settings};
use mood_score::output;
use mood_score::scoring::{self, Dimension, InputVector, WeightedScoreCalculator};
use mood_score::tui::{self, Theme};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CHECK_FAILED: i32 = 1;
const EXIT_RUNTIME: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive scorer (default if no subcommand)
    Tui,
    /// Score readings given in dimension order: Work, Sport, Study, Help, Social Act, Mood Factor
    Score {
        /// Up to six readings; missing trailing readings count as 0, text that isn't a number counts as 0
        #[arg(num_args = 0..=6, allow_negative_numbers = true)]
        values: Vec<String>,

        /// Show the per-dimension contributions
        #[arg(short, long)]
        breakdown: bool,

        /// Print the result as JSON
        #[arg(long, conflicts_with = "breakdown")]
        json: bool,
    },
    /// Show or change the configured weights
    #[command(subcommand)]
    Weights(WeightsCommand),
    /// Report weights that will count as 0 or are not finite
    Check,
}

#[derive(Subcommand, Debug)]
enum WeightsCommand {
    /// List the weight of every dimension
    Show,
    /// Set one weight. The text is stored as typed.
    Set {
        /// Dimension label ("social act"), position (1-6) or key (weight5)
        dimension: Dimension,
        /// New weight text
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
    /// Set every weight back to 1
    Reset,
}

#[derive(Parser, Debug)]
#[command(name = "mood-score")]
#[command(about = "Weighted mood/productivity score from six daily readings", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to settings file (defaults to ~/.config/mood-score/settings.yaml)
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    /// Color theme for the interactive scorer
    #[arg(long, global = true, value_enum, default_value_t = Theme::Auto)]
    theme: Theme,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    let settings_path = match config::resolve_settings_path(cli.settings) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Settings error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Load once at startup; missing keys fall back to defaults
    let settings = match config::load_settings(&settings_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Settings error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        if settings_path.exists() {
            eprintln!("Loaded settings from {}", settings_path.display());
        } else {
            eprintln!("No settings at {}, using defaults", settings_path.display());
        }
        if let Err(findings) = scoring::check_weights(&settings.weights()) {
            for finding in findings {
                eprintln!("  note: {}", finding);
            }
        }
    }

    let code = match command {
        Commands::Tui => {
            let theme = tui::resolve_theme(cli.theme);
            let app = tui::App::new(settings, settings_path, theme, cli.verbose);
            match tui::run_tui(app).await {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    eprintln!("Terminal error: {}", e);
                    EXIT_RUNTIME
                }
            }
        }
        Commands::Score {
            values,
            breakdown,
            json,
        } => run_score(&settings, &values, breakdown, json),
        Commands::Weights(cmd) => run_weights(settings, &settings_path, cmd, cli.verbose),
        Commands::Check => run_check(&settings),
    };

    std::process::exit(code);
}

fn run_score(settings: &Settings, values: &[String], breakdown: bool, json: bool) -> i32 {
    let calculator = WeightedScoreCalculator::with_weights(settings.weights());

    if !json && !breakdown {
        let readings: Vec<f64> = values.iter().map(|v| scoring::number_or_zero(v)).collect();
        println!(
            "{}",
            output::format_result_line(calculator.compute_slice(&readings), output::should_use_colors())
        );
        return EXIT_SUCCESS;
    }

    let result = calculator.score(&InputVector::from_texts(values));
    if json {
        match output::format_json(&result) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                return EXIT_RUNTIME;
            }
        }
    } else {
        println!(
            "{}",
            output::format_breakdown(&result, output::should_use_colors())
        );
    }

    EXIT_SUCCESS
}

fn run_weights(
    mut settings: Settings,
    settings_path: &std::path::Path,
    cmd: WeightsCommand,
    verbose: bool,
) -> i32 {
    match cmd {
        WeightsCommand::Show => {
            println!(
                "{}",
                output::format_weights(&settings, output::should_use_colors())
            );
            return EXIT_SUCCESS;
        }
        WeightsCommand::Set { dimension, value } => {
            settings.set_weight(dimension, value);
            println!(
                "{} ({}) set to {:?}",
                dimension.settings_key(),
                dimension,
                settings.weight(dimension)
            );
        }
        WeightsCommand::Reset => {
            settings.reset_weights();
            println!("All weights reset to 1");
        }
    }

    if let Err(e) = config::save_settings(settings_path, &settings) {
        eprintln!("Settings error: {:#}", e);
        return EXIT_CONFIG;
    }
    if verbose {
        eprintln!("Saved settings to {}", settings_path.display());
    }
    EXIT_SUCCESS
}

fn run_check(settings: &Settings) -> i32 {
    match scoring::check_weights(&settings.weights()) {
        Ok(()) => {
            println!("All {} weights are numbers.", Dimension::ALL.len());
            EXIT_SUCCESS
        }
        Err(findings) => {
            for finding in &findings {
                println!("{}", finding);
            }
            EXIT_CHECK_FAILED
        }
    }
}
