//! Objects used to read and write Argumentation frameworks and answers to problems.

mod debate_reader;
pub use debate_reader::DebateReader;

mod error;
pub use error::InputError;

mod instruction_reader;
pub use instruction_reader::InstructionReader;
pub use instruction_reader::ATTACK_SEPARATOR;
pub use instruction_reader::INSTRUCTION_SEPARATOR;

mod instruction_writer;
pub use instruction_writer::sanitize_label;
pub use instruction_writer::InstructionWriter;

mod specs;
pub use specs::InstanceReader;
pub use specs::ResponseWriter;
pub use specs::WarningHandler;
