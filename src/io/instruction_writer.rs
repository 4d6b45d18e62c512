use super::{
    instruction_reader::{ATTACK_SEPARATOR, INSTRUCTION_SEPARATOR},
    specs, ResponseWriter,
};
use crate::aa::{AAFramework, Argument, LabelType};
use anyhow::{anyhow, Context, Result};
use std::{fmt::Display, io::Write};

/// Turns a label into a string that can be used in an instruction.
///
/// Spaces are replaced by underscores.
/// An error is returned if the label is empty or contains a character reserved by the instruction format.
///
/// # Example
///
/// ```
/// # use crustground::io::sanitize_label;
/// assert_eq!("it_rains", sanitize_label(&"it rains").unwrap());
/// assert!(sanitize_label(&"a:b").is_err());
/// ```
pub fn sanitize_label<T>(label: &T) -> Result<String>
where
    T: Display + ?Sized,
{
    let sanitized = label.to_string().trim().replace(' ', "_");
    if sanitized.is_empty() {
        return Err(anyhow!("cannot write an empty label"));
    }
    if let Some(c) = sanitized
        .chars()
        .find(|c| *c == INSTRUCTION_SEPARATOR || *c == ATTACK_SEPARATOR || *c == ')')
    {
        return Err(anyhow!(
            r#"cannot write label "{}": it contains the reserved character '{}'"#,
            label,
            c
        ));
    }
    Ok(sanitized)
}

/// A writer for the instruction format read by [`InstructionReader`](super::InstructionReader).
///
/// Frameworks are written on a single line, with all the argument declarations first.
/// As a [`ResponseWriter`], it writes extensions as a bracketed list of labels (`[a,c]`).
///
/// # Example
///
/// ```
/// # use crustground::aa::{AAFramework, ArgumentSet};
/// # use crustground::io::InstructionWriter;
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b").unwrap();
/// let mut buffer = Vec::new();
/// InstructionWriter::default().write_framework(&af, &mut buffer).unwrap();
/// assert_eq!("arg(a),arg(b),att(a:b)\n", String::from_utf8(buffer).unwrap());
/// ```
#[derive(Default)]
pub struct InstructionWriter {}

impl InstructionWriter {
    /// Writes a framework using the instruction format to the provided writer.
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing a framework";
        let instructions = self.framework_instructions(framework)?;
        writeln!(writer, "{}", instructions).context(context)?;
        writer.flush().context(context)
    }

    /// Returns the instructions describing a framework, as a single string.
    pub fn framework_instructions<T: LabelType>(&self, framework: &AAFramework<T>) -> Result<String> {
        let arguments = framework
            .argument_set()
            .iter()
            .map(|arg| sanitize_label(arg.label()).map(|l| format!("arg({})", l)));
        let attacks = framework.iter_attacks().map(|att| -> Result<String> {
            let attacker = sanitize_label(att.attacker().label())?;
            let attacked = sanitize_label(att.attacked().label())?;
            Ok(format!("att({}{}{})", attacker, ATTACK_SEPARATOR, attacked))
        });
        let instructions = arguments.chain(attacks).collect::<Result<Vec<String>>>()?;
        Ok(instructions.join(INSTRUCTION_SEPARATOR.to_string().as_str()))
    }
}

impl<T> ResponseWriter<T> for InstructionWriter
where
    T: LabelType,
{
    fn write_no_input(&self, writer: &mut dyn Write) -> Result<()> {
        specs::write_no_input(writer)
    }

    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<T>],
    ) -> Result<()> {
        let context = "while writing an extension";
        let labels = extension
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<String>>();
        writeln!(writer, "[{}]", labels.join(",")).context(context)?;
        writer.flush().context(context)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        specs::write_acceptance_status(writer, acceptance_status)
    }
}
