use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use crustground::{
    aa::{self, AAFramework, Argument, Query},
    io::{InstructionWriter, ResponseWriter},
    solvers::{
        CredulousAcceptanceComputer, GroundedSemanticsSolver, SingleExtensionComputer,
        SkepticalAcceptanceComputer,
    },
};
use log::{info, warn};

const CMD_NAME: &str = "solve";

const ARG_PROBLEM: &str = "PROBLEM";
const ARG_ARG: &str = "ARG";
const ARG_WITH_CERTIFICATE: &str = "WITH_CERTIFICATE";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes the grounded extension of a debate, or the acceptance of one of its arguments")
            .setting(AppSettings::DisableVersion)
            .args(&common::input_args())
            .arg(common::reader_arg(common::READER_INSTRUCTIONS))
            .args(&common::reader_option_args())
            .arg(
                Arg::with_name(ARG_PROBLEM)
                    .short("p")
                    .empty_values(false)
                    .multiple(false)
                    .default_value("SE-GR")
                    .help("the problem to solve")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_ARG)
                    .short("a")
                    .empty_values(false)
                    .multiple(false)
                    .help("the argument (for DC/DS queries)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_WITH_CERTIFICATE)
                    .short("c")
                    .long("with-certificate")
                    .takes_value(false)
                    .help("print the grounded extension as a witness of the DC/DS answer"),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let query = aa::read_problem_string(arg_matches.value_of(ARG_PROBLEM).unwrap_or("SE-GR"))?;
        check_arg_definition(query, arg_matches.value_of(ARG_ARG))?;
        let reader = common::create_reader(arg_matches);
        let writer = InstructionWriter::default();
        let mut out = std::io::stdout();
        let af = match common::read_framework(arg_matches, reader.as_ref())? {
            Some(af) => af,
            None => return ResponseWriter::<String>::write_no_input(&writer, &mut out),
        };
        let arg = arg_matches
            .value_of(ARG_ARG)
            .map(|a| reader.read_arg_from_str(&af, a))
            .transpose()
            .context("while parsing the argument passed to the command line")?;
        let with_certificate = arg_matches.is_present(ARG_WITH_CERTIFICATE);
        match (query, arg) {
            (Query::SE, _) => compute_one_extension(&af, &writer),
            (Query::DC, Some(a)) => check_credulous_acceptance(&af, a, &writer, with_certificate),
            (Query::DS, Some(a)) => check_skeptical_acceptance(&af, a, &writer, with_certificate),
            (Query::DC, None) | (Query::DS, None) => unreachable!(),
        }
    }
}

fn check_arg_definition(query: Query, arg: Option<&str>) -> Result<()> {
    match (query.requires_argument(), arg) {
        (false, Some(_)) => {
            warn!(
                "unexpected argument on the command line (useless for query {})",
                query.as_ref()
            );
            Ok(())
        }
        (true, None) => Err(anyhow!(
            "missing argument on the command line (required for query {})",
            query.as_ref()
        )),
        _ => Ok(()),
    }
}

fn compute_one_extension(af: &AAFramework<String>, writer: &InstructionWriter) -> Result<()> {
    let mut solver = GroundedSemanticsSolver::new(af);
    let extension = solver
        .compute_one_extension()
        .ok_or_else(|| anyhow!("the grounded extension is always defined"))?;
    writer.write_single_extension(&mut std::io::stdout(), &extension)
}

fn check_credulous_acceptance(
    af: &AAFramework<String>,
    arg: &Argument<String>,
    writer: &InstructionWriter,
    with_certificate: bool,
) -> Result<()> {
    let mut solver = GroundedSemanticsSolver::new(af);
    let (acceptance_status, certificate) = if with_certificate {
        solver.is_credulously_accepted_with_certificate(arg)
    } else {
        (solver.is_credulously_accepted(arg), None)
    };
    info!("argument {} is credulously accepted: {}", arg, acceptance_status);
    write_acceptance_status(writer, acceptance_status, certificate)
}

fn check_skeptical_acceptance(
    af: &AAFramework<String>,
    arg: &Argument<String>,
    writer: &InstructionWriter,
    with_certificate: bool,
) -> Result<()> {
    let mut solver = GroundedSemanticsSolver::new(af);
    let (acceptance_status, certificate) = if with_certificate {
        solver.is_skeptically_accepted_with_certificate(arg)
    } else {
        (solver.is_skeptically_accepted(arg), None)
    };
    info!("argument {} is skeptically accepted: {}", arg, acceptance_status);
    write_acceptance_status(writer, acceptance_status, certificate)
}

fn write_acceptance_status(
    writer: &InstructionWriter,
    acceptance_status: bool,
    certificate: Option<Vec<&Argument<String>>>,
) -> Result<()> {
    let mut out = std::io::stdout();
    ResponseWriter::<String>::write_acceptance_status(writer, &mut out, acceptance_status)?;
    match certificate {
        Some(c) => writer.write_single_extension(&mut out, &c),
        None => Ok(()),
    }
}
