use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, ProblemsCommand,
    SolveCommand, TranslateCommand,
};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};
use crustground::{
    aa::AAFramework,
    io::{DebateReader, InputError, InstanceReader, InstructionReader},
};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::{BufReader, Read},
    path::PathBuf,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Crustground, a grounded semantics reasoner for debates.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(ProblemsCommand::new()),
        Box::new(SolveCommand::new()),
        Box::new(TranslateCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";
pub(crate) const ARG_INPUT_FILE: &str = "INPUT_FILE";

pub(crate) fn input_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_INPUT)
            .short("i")
            .long("input")
            .takes_value(true)
            .multiple(false)
            .help("the framework description, given on the command line")
            .conflicts_with(ARG_INPUT_FILE)
            .required(false),
        Arg::with_name(ARG_INPUT_FILE)
            .short("f")
            .empty_values(false)
            .multiple(false)
            .help("the input file that contains the framework description")
            .required(false),
    ]
}

pub(crate) const ARG_READER: &str = "READER";
pub(crate) const READER_INSTRUCTIONS: &str = "instructions";
pub(crate) const READER_DEBATE: &str = "debate";

pub(crate) fn reader_arg(default_reader: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(ARG_READER)
        .short("r")
        .long("reader")
        .empty_values(false)
        .multiple(false)
        .possible_values(&[READER_INSTRUCTIONS, READER_DEBATE])
        .default_value(default_reader)
        .help("the input format")
        .required(false)
}

const ARG_STRICT: &str = "STRICT";
const ARG_FORWARD_REFERENCES: &str = "FORWARD_REFERENCES";

pub(crate) fn reader_option_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_STRICT)
            .long("strict")
            .takes_value(false)
            .help("fail on malformed instructions and unknown arguments instead of ignoring them"),
        Arg::with_name(ARG_FORWARD_REFERENCES)
            .long("forward-references")
            .takes_value(false)
            .help("allow attacks to refer to arguments declared later (instruction reader only)"),
    ]
}

/// Builds the reader selected by the CLI arguments.
pub(crate) fn create_reader(arg_matches: &ArgMatches<'_>) -> Box<dyn InstanceReader<String>> {
    let strict = arg_matches.is_present(ARG_STRICT);
    let forward_references = arg_matches.is_present(ARG_FORWARD_REFERENCES);
    let mut reader: Box<dyn InstanceReader<String>> = match arg_matches.value_of(ARG_READER) {
        Some(READER_DEBATE) => {
            if forward_references {
                warn!("the debate reader always accepts forward references");
            }
            Box::new(DebateReader::default().with_strict_mode(strict))
        }
        _ => Box::new(
            InstructionReader::default()
                .with_strict_mode(strict)
                .with_forward_references(forward_references),
        ),
    };
    reader.add_warning_handler(Box::new(|_, msg| warn!("{}", msg)));
    reader
}

/// Reads the framework given by the CLI arguments.
///
/// `None` is returned if no input was given, or if it is blank.
pub(crate) fn read_framework(
    arg_matches: &ArgMatches<'_>,
    reader: &dyn InstanceReader<String>,
) -> Result<Option<AAFramework<String>>> {
    let read_result = if let Some(input) = arg_matches.value_of(ARG_INPUT) {
        info!("reading the framework from the command line");
        reader.read(&mut input.as_bytes())
    } else if let Some(file_path) = arg_matches.value_of(ARG_INPUT_FILE) {
        read_file_path_with(file_path, &|r| reader.read(r))
    } else {
        info!("no input was given");
        return Ok(None);
    };
    match read_result {
        Ok(af) => {
            info!(
                "the argumentation framework has {} argument(s) and {} attack(s)",
                af.n_arguments(),
                af.n_attacks(),
            );
            Ok(Some(af))
        }
        Err(e) if is_empty_input(&e) => {
            info!("the input is empty");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn is_empty_input(e: &anyhow::Error) -> bool {
    matches!(
        e.root_cause().downcast_ref::<InputError>(),
        Some(InputError::EmptyInput)
    )
}

pub(crate) fn read_file_path_with<F, R>(file_path: &str, reader: &F) -> Result<R>
where
    F: Fn(&mut dyn Read) -> Result<R>,
{
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(
        File::open(&canonicalized)
            .with_context(|| format!(r#"while opening file "{}""#, file_path))?,
    );
    (reader)(&mut file_reader)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
