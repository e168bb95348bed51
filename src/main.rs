use clap::value_parser;
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use finals::language::Options;
use finals::parsing;

mod output;
mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("finals")
        .version(VERSION)
        .propagate_version(true)
        .about("Recover final examination schedules from PDF-extracted text.")
        .disable_help_subcommand(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log the decisions the parser makes to standard error."),
        )
        .subcommand(
            Command::new("parse")
                .about("Extract the exam entries from a schedule")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(["json", "text"])
                        .default_value("json")
                        .help("Which form to print the entries in."),
                )
                .arg(
                    Arg::new("crn-width")
                        .long("crn-width")
                        .value_parser(value_parser!(usize))
                        .default_value("5")
                        .help("Number of digits in a CRN, used to split CRNs that the text extraction ran together."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the text of the schedule, or '-' to read standard input."),
                ),
        )
        .subcommand(
            Command::new("classify")
                .about("Report which layout a schedule is in")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the text of the schedule, or '-' to read standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("parse", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));
            let form = submatches
                .get_one::<String>("output")
                .map(String::as_str)
                .unwrap_or("json");
            let options = Options {
                crn_width: submatches
                    .get_one::<usize>("crn-width")
                    .copied()
                    .unwrap_or(Options::default().crn_width),
            };

            debug!(?filename, form, ?options);

            let content = read(filename);

            let entries = match parsing::parse_finals_schedule_with(&content, &options) {
                Ok(entries) => entries,
                Err(error) => {
                    eprintln!("{}", problem::full_parsing_error(&error, filename));
                    std::process::exit(1);
                }
            };

            let result = match form {
                "text" => output::via_text(&entries).map_err(|e| e.to_string()),
                _ => output::via_json(&entries).map_err(|e| e.to_string()),
            };

            match result {
                Ok(rendered) => print!("{}", rendered),
                Err(error) => {
                    eprintln!("error: {}", error);
                    std::process::exit(1);
                }
            }
        }
        Some(("classify", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));

            let content = read(filename);
            let text = parsing::normalize(&content);

            match parsing::classify(&text) {
                Some(variant) => println!("{}", variant),
                None => {
                    let error = finals::ParsingError::UnrecognizedFormat;
                    eprintln!("{}", problem::concise_parsing_error(&error, filename));
                    std::process::exit(1);
                }
            }
        }
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn read(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}
