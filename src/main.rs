mod cli_messages;
mod config;
mod consts;
mod error_classifier;
mod events;
mod logging;
mod numerology;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::form::{DAY_MAX, DAY_MIN, MONTH_MAX, MONTH_MIN, YEAR_MIN};
use crate::numerology::{Calculator, ComputationError, InputSet, StandardCalculator};
use crate::session::{run_headless_mode, run_tui_mode};
use crate::ui::UIConfig;
use crate::ui::form::current_year;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Form inputs accepted on the command line; unset values come from the
/// config file.
#[derive(ClapArgs, Debug, Default)]
struct InputArgs {
    /// Day of birth (1-31)
    #[arg(long, value_parser = clap::value_parser!(u32).range(DAY_MIN as i64..=DAY_MAX as i64))]
    day: Option<u32>,

    /// Month of birth (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(MONTH_MIN as i64..=MONTH_MAX as i64))]
    month: Option<u32>,

    /// Year of birth (1900 to the current year)
    #[arg(long, value_parser = parse_year)]
    year: Option<i32>,

    /// First name, Hebrew or Latin letters
    #[arg(long)]
    first_name: Option<String>,

    /// Last name, Hebrew or Latin letters
    #[arg(long)]
    last_name: Option<String>,
}

impl InputArgs {
    /// Overlay the given values on `base`.
    fn merge_into(self, base: InputSet) -> InputSet {
        InputSet {
            day: self.day.unwrap_or(base.day),
            month: self.month.unwrap_or(base.month),
            year: self.year.unwrap_or(base.year),
            first_name: self.first_name.unwrap_or(base.first_name),
            last_name: self.last_name.unwrap_or(base.last_name),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive chakra and life cycle dashboard
    Start {
        #[command(flatten)]
        inputs: InputArgs,

        /// Paint the dashboard background
        #[arg(long, default_value_t = false)]
        with_background: bool,

        /// Lay the dashboard out left-to-right
        #[arg(long, default_value_t = false)]
        ltr: bool,
    },
    /// Calculate once and print the results
    Show {
        #[command(flatten)]
        inputs: InputArgs,

        /// Print the calculator output as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Save default form inputs
    SetDefaults {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Delete the saved configuration
    Reset,
}

fn parse_year(s: &str) -> Result<i32, String> {
    let year: i32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a year", s))?;
    let max = current_year();
    if (YEAR_MIN..=max).contains(&year) {
        Ok(year)
    } else {
        Err(format!("year must be between {} and {}", YEAR_MIN, max))
    }
}

/// Load the config; an invalid file is reported and replaced by defaults.
fn load_config(path: &Path) -> Config {
    match Config::load_or_default(path) {
        Ok(config) => config,
        Err(e) => {
            crate::eprint_cmd_warn!("Config", "Ignoring {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Calculation failures are printed where they occur; exit with a failure
/// status without printing them again.
fn exit_if_reported(result: Result<(), Box<dyn Error>>) -> Result<(), Box<dyn Error>> {
    match result {
        Err(e) if e.is::<ComputationError>() => std::process::exit(1),
        other => other,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            inputs,
            with_background,
            ltr,
        } => {
            let config = load_config(&config_path);
            let ui_config = UIConfig::new(
                with_background || config.with_background_color,
                config.rtl && !ltr,
                inputs.merge_into(config.input_set()),
                current_year(),
            );
            run_tui_mode(ui_config)
        }
        Command::Show { inputs, json } => {
            let config = load_config(&config_path);
            let input = inputs.merge_into(config.input_set());
            exit_if_reported(run_headless_mode(&input, json, &StandardCalculator))
        }
        Command::SetDefaults { inputs } => {
            let mut config = load_config(&config_path);
            let input = inputs.merge_into(config.input_set());
            // Refuse defaults the calculator would reject
            if let Err(e) = StandardCalculator.calculate(&input) {
                crate::print_cmd_error!("Invalid defaults", "{}", e);
                return exit_if_reported(Err(e.into()));
            }
            config.set_inputs(&input);
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            crate::print_cmd_success!(
                "Defaults saved",
                "{} {} {}/{}/{}",
                input.first_name,
                input.last_name,
                input.day,
                input.month,
                input.year
            );
            Ok(())
        }
        Command::Reset => {
            if !config_path.exists() {
                crate::print_cmd_info!("Nothing to clear", "{}", config_path.display());
                return Ok(());
            }
            Config::clear(&config_path)?;
            crate::print_cmd_success!("Configuration cleared", "{}", config_path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_bounds() {
        assert_eq!(parse_year("1976"), Ok(1976));
        assert!(parse_year("1899").is_err());
        assert!(parse_year(&(current_year() + 1).to_string()).is_err());
        assert!(parse_year("abc").is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let inputs = InputArgs {
            day: Some(3),
            first_name: Some("Dana".to_string()),
            ..InputArgs::default()
        };
        let merged = inputs.merge_into(Config::default().input_set());
        assert_eq!(merged.day, 3);
        assert_eq!(merged.month, 11);
        assert_eq!(merged.first_name, "Dana");
        assert_eq!(merged.last_name, "נוי");
    }

    #[test]
    fn test_other_errors_are_returned() {
        assert!(exit_if_reported(Ok(())).is_ok());
        let io_error: Box<dyn Error> = "disk full".into();
        assert!(exit_if_reported(Err(io_error)).is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let args = Args::try_parse_from(["chakra-map", "show", "--day", "5", "--json"]).unwrap();
        match args.command {
            Command::Show { inputs, json } => {
                assert_eq!(inputs.day, Some(5));
                assert!(json);
            }
            _ => panic!("expected show"),
        }
        assert!(Args::try_parse_from(["chakra-map", "show", "--day", "32"]).is_err());
        assert!(Args::try_parse_from(["chakra-map", "show", "--month", "0"]).is_err());
    }
}
