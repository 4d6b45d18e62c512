use super::{cli_manager, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use crustground::io::{InstructionWriter, ResponseWriter};

const CMD_NAME: &str = "translate";

pub(crate) struct TranslateCommand;

impl TranslateCommand {
    pub(crate) fn new() -> Self {
        TranslateCommand
    }
}

impl<'a> Command<'a> for TranslateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Translates a debate into the instruction format")
            .setting(AppSettings::DisableVersion)
            .args(&common::input_args())
            .arg(common::reader_arg(common::READER_DEBATE))
            .args(&common::reader_option_args())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let reader = common::create_reader(arg_matches);
        let writer = InstructionWriter::default();
        let mut out = std::io::stdout();
        match common::read_framework(arg_matches, reader.as_ref())? {
            Some(af) => writer.write_framework(&af, &mut out),
            None => ResponseWriter::<String>::write_no_input(&writer, &mut out),
        }
    }
}
