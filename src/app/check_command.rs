use super::{cli_manager, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use crustground::io::{InstructionWriter, ResponseWriter};
use log::info;

const CMD_NAME: &str = "check";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks a framework description for errors")
            .setting(AppSettings::DisableVersion)
            .args(&common::input_args())
            .arg(common::reader_arg(common::READER_INSTRUCTIONS))
            .args(&common::reader_option_args())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let reader = common::create_reader(arg_matches);
        match common::read_framework(arg_matches, reader.as_ref())? {
            Some(af) => {
                info!(
                    "{} self-attacking argument(s)",
                    af.iter_attacks().filter(|a| a.is_self_attack()).count()
                );
                Ok(())
            }
            None => {
                let writer = InstructionWriter::default();
                ResponseWriter::<String>::write_no_input(&writer, &mut std::io::stdout())
            }
        }
    }
}
