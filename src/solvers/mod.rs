//! Solvers answering queries about the grounded extension of an argumentation framework.

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;
