//! Crustground is a grounded semantics reasoner for debates.
//!
//! Debates are encoded as Abstract Argumentation frameworks (see [`aa`]),
//! read from a compact instruction string or from a list of mined debate items (see [`io`]).
//! The grounded extension, i.e. the set of arguments that are unconditionally justified,
//! is then computed by iterating the characteristic function of the framework (see [`utils`] and [`solvers`]).
//!
//! # Example
//!
//! ```
//! # use crustground::io::InstructionReader;
//! # use crustground::solvers::{GroundedSemanticsSolver, SingleExtensionComputer};
//! let af = InstructionReader::default()
//!     .read_str("arg(a),arg(b),arg(c),att(a:b),att(b:c)")
//!     .unwrap();
//! let mut solver = GroundedSemanticsSolver::new(&af);
//! let ext = solver.compute_one_extension().unwrap();
//! let labels = ext.iter().map(|a| a.label().as_str()).collect::<Vec<&str>>();
//! assert_eq!(vec!["a", "c"], labels);
//! ```

#![warn(missing_docs)]

pub mod aa;

pub mod io;

pub mod solvers;

pub mod utils;
