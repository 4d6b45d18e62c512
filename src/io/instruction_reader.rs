use super::{specs, InputError, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument};
use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::io::Read;

/// The separator between two instructions.
pub const INSTRUCTION_SEPARATOR: char = ',';

/// The separator between the attacker and the attacked argument in an attack instruction.
pub const ATTACK_SEPARATOR: char = ':';

lazy_static! {
    static ref ARG_TOKEN_PATTERN: Regex = Regex::new(r"^arg\(([^:)]*)\)$").unwrap();
    static ref ATT_TOKEN_PATTERN: Regex = Regex::new(r"^att\(([^:)]*):([^:)]*)\)$").unwrap();
}

#[derive(Debug, PartialEq, Eq)]
enum Instruction {
    Argument(String),
    Attack(String, String),
}

fn read_label(captured: &str) -> Option<String> {
    let label = captured.trim();
    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}

fn try_read_instruction(token: &str) -> Option<Instruction> {
    if let Some(c) = ARG_TOKEN_PATTERN.captures(token) {
        return read_label(&c[1]).map(Instruction::Argument);
    }
    if let Some(c) = ATT_TOKEN_PATTERN.captures(token) {
        return read_label(&c[1])
            .zip(read_label(&c[2]))
            .map(|(from, to)| Instruction::Attack(from, to));
    }
    None
}

/// A reader for the instruction format.
///
/// This object reads an [`AAFramework`] given as a single line of comma-separated instructions.
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// # Instruction format
///
/// Arguments are declared by `arg(x)` instructions, and attacks by `att(x:y)` instructions (`x` attacks `y`).
/// The following content defines a framework with three arguments labelled `a`, `b` and `c`
/// where `a` and `b` attack each other and `c` attacks `b`.
///
/// ```text
/// arg(a),arg(b),arg(c),att(a:b),att(b:a),att(c:b)
/// ```
///
/// Whitespace around instructions and labels is ignored.
/// Labels cannot contain commas, colons nor closing parentheses.
/// Instructions are processed in order: an attack must come after the declaration of its arguments.
///
/// # Lenient and strict modes
///
/// By default, the reader is lenient: malformed instructions and attacks referring to undeclared arguments are dropped,
/// and a warning is sent to the registered [`WarningHandler`]s.
/// In strict mode, such instructions make the reading fail with an [`InputError`].
/// In both modes, an empty input is an error ([`InputError::EmptyInput`]).
///
/// # Example
///
/// ```
/// # use crustground::io::InstructionReader;
/// let af = InstructionReader::default()
///     .read_str("arg(a), arg(b), att(a:b), att(a:c), foo")
///     .unwrap();
/// assert_eq!(2, af.n_arguments());
/// assert_eq!(1, af.n_attacks());
///
/// let strict_reader = InstructionReader::default().with_strict_mode(true);
/// assert!(strict_reader.read_str("arg(a), arg(b), att(a:c)").is_err());
/// ```
#[derive(Default)]
pub struct InstructionReader {
    warning_handlers: Vec<WarningHandler>,
    strict: bool,
    forward_references: bool,
}

impl InstructionReader {
    /// Sets whether malformed instructions make the reading fail.
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets whether attacks may refer to arguments declared later in the input.
    ///
    /// When set, attacks are added once all the arguments have been declared.
    pub fn with_forward_references(mut self, forward_references: bool) -> Self {
        self.forward_references = forward_references;
        self
    }

    /// Reads a framework from its textual description.
    pub fn read_str(&self, input: &str) -> Result<AAFramework<String>> {
        if input.trim().is_empty() {
            return Err(InputError::EmptyInput.into());
        }
        let mut af = AAFramework::default();
        let mut pending_attacks = vec![];
        for (i, token) in input.split(INSTRUCTION_SEPARATOR).enumerate() {
            let index = i + 1;
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match try_read_instruction(token) {
                Some(Instruction::Argument(label)) => {
                    if !af.new_argument(label) {
                        debug!("ignoring redeclared argument at index {}", index);
                    }
                }
                Some(Instruction::Attack(from, to)) if self.forward_references => {
                    pending_attacks.push((index, from, to))
                }
                Some(Instruction::Attack(from, to)) => self.add_attack(&mut af, index, &from, &to)?,
                None => self.drop_instruction(InputError::MalformedToken {
                    index,
                    token: token.to_string(),
                })?,
            }
        }
        for (index, from, to) in pending_attacks {
            self.add_attack(&mut af, index, &from, &to)?;
        }
        Ok(af)
    }

    fn add_attack(
        &self,
        af: &mut AAFramework<String>,
        index: usize,
        from: &String,
        to: &String,
    ) -> Result<()> {
        if let Some(unknown) = [from, to]
            .into_iter()
            .find(|l| !af.argument_set().contains(l))
        {
            return self.drop_instruction(InputError::UnknownArgument {
                index,
                label: unknown.to_string(),
            });
        }
        if !af.new_attack(from, to)? {
            debug!("ignoring redeclared attack at index {}", index);
        }
        Ok(())
    }

    fn drop_instruction(&self, error: InputError) -> Result<()> {
        if self.strict {
            return Err(error.into());
        }
        let index = error.index().unwrap_or_default();
        let message = format!("ignoring instruction: {}", error);
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(index, message.clone()));
        Ok(())
    }
}

impl InstanceReader<String> for InstructionReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let content = specs::read_to_string(reader)?;
        self.read_str(&content)
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        af.argument_set().get_argument(&arg.trim().to_string())
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
