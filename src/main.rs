use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::fmt::Display;
use std::path::Path;
use tracing::{debug, Level};

use notemark::annotating::Limits;
use notemark::loading::{load, load_experiences};
use notemark::markup::parse_list;
use notemark::rendering::Renderer;
use notemark::templating::{render_details, render_experiences};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("notemark")
        .version(VERSION)
        .propagate_version(true)
        .about("Render free-form project notes as safe, highlighted HTML.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what is being done to standard error."),
        )
        .arg(
            Arg::new("classes")
                .long("classes")
                .global(true)
                .value_parser(Renderer::NAMES)
                .default_value("tailwind")
                .help("Which set of class names to put on the generated markup."),
        )
        .arg(
            Arg::new("max-keywords")
                .long("max-keywords")
                .global(true)
                .value_parser(clap::value_parser!(usize))
                .help("Ignore keywords beyond this many."),
        )
        .subcommand(
            Command::new("highlight")
                .about("Highlight a file of notes, one detail row per line")
                .arg(
                    Arg::new("keywords")
                        .short('k')
                        .long("keywords")
                        .help("Keywords to underline, separated by commas, semicolons, or newlines."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the notes, or '-' to read standard input."),
                ),
        )
        .subcommand(
            Command::new("experience")
                .about("Render a JSON file of experience entries as an HTML list")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the experience entries, or '-' to read standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match matches.subcommand() {
        Some(("highlight", submatches)) => {
            let (renderer, limits) = configuration(submatches);
            let filename = filename(submatches);
            let keywords = submatches
                .get_one::<String>("keywords")
                .map(|raw| parse_list(raw))
                .unwrap_or_default();

            debug!(?renderer, ?limits, "Highlighting {}", filename.display());

            let content = load(filename).unwrap_or_else(|error| fail(error));
            let html = render_details(&content, &keywords, &renderer, &limits)
                .unwrap_or_else(|error| fail(error));
            print!("{}", html);
        }
        Some(("experience", submatches)) => {
            let (renderer, limits) = configuration(submatches);
            let filename = filename(submatches);

            debug!(?renderer, ?limits, "Rendering {}", filename.display());

            let experiences = load_experiences(filename).unwrap_or_else(|error| fail(error));
            let html = render_experiences(&experiences, &renderer, &limits)
                .unwrap_or_else(|error| fail(error));
            print!("{}", html);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: notemark [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn configuration(submatches: &ArgMatches) -> (Renderer, Limits) {
    let renderer = submatches
        .get_one::<String>("classes")
        .and_then(|name| Renderer::lookup(name))
        .unwrap_or_default();

    let mut limits = Limits::default();
    if let Some(max) = submatches.get_one::<usize>("max-keywords") {
        limits.max_keywords = *max;
    }

    (renderer, limits)
}

fn filename(submatches: &ArgMatches) -> &Path {
    // required argument, so clap has already insisted on it
    submatches
        .get_one::<String>("filename")
        .map(Path::new)
        .unwrap_or(Path::new("-"))
}

fn fail(error: impl Display) -> ! {
    eprintln!("{}: {}", "error".bright_red(), error);
    std::process::exit(1);
}
