use thiserror::Error;

/// The conditions raised while reading the textual description of a framework.
///
/// Only [`InputError::EmptyInput`] is always reported to the caller.
/// The two other conditions concern single instructions: lenient readers drop the instruction and emit a warning,
/// while strict readers fail with the corresponding error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    /// No input was supplied, or the input contains only whitespace.
    #[error("no input was provided")]
    EmptyInput,
    /// A token matches neither the argument nor the attack syntax,
    /// or a debate item has an identifier that cannot be used as a label.
    #[error(r#"malformed token "{token}" at index {index}"#)]
    MalformedToken {
        /// the 1-based index of the instruction or debate item
        index: usize,
        /// the instruction, without its surrounding whitespace
        token: String,
    },
    /// An attack refers to an argument that has not been declared (yet).
    #[error(r#"the attack at index {index} refers to the undeclared argument "{label}""#)]
    UnknownArgument {
        /// the 1-based index of the instruction
        index: usize,
        /// the unknown label
        label: String,
    },
}

impl InputError {
    /// Returns the 1-based index of the instruction concerned by this error, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            InputError::EmptyInput => None,
            InputError::MalformedToken { index, .. } | InputError::UnknownArgument { index, .. } => {
                Some(*index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!("no input was provided", InputError::EmptyInput.to_string());
        assert_eq!(
            r#"malformed token "foo" at index 2"#,
            InputError::MalformedToken {
                index: 2,
                token: "foo".to_string()
            }
            .to_string()
        );
    }

    #[test]
    fn test_index() {
        assert_eq!(None, InputError::EmptyInput.index());
        assert_eq!(
            Some(3),
            InputError::UnknownArgument {
                index: 3,
                label: "a".to_string()
            }
            .index()
        );
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let e: anyhow::Error = InputError::EmptyInput.into();
        let e = e.context("while reading");
        assert_eq!(
            Some(&InputError::EmptyInput),
            e.root_cause().downcast_ref::<InputError>()
        );
    }
}
