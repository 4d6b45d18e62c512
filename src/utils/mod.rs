//! Miscellaneous components used in the library.

mod grounded_extension_computer;
pub use grounded_extension_computer::characteristic_function;
pub use grounded_extension_computer::grounded_extension;
pub use grounded_extension_computer::grounded_fixpoint_sequence;
