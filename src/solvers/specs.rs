use crate::aa::{Argument, LabelType};

/// Solvers returning an extension of the framework they were built for.
pub trait SingleExtensionComputer<T>
where
    T: LabelType,
{
    /// Returns an extension, as the list of its arguments.
    ///
    /// `None` means the semantics admits no extension for this framework.
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>>;
}

/// Solvers deciding whether an argument belongs to at least one extension.
pub trait CredulousAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Returns `true` iff some extension contains `arg`.
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool;

    /// Same as [`is_credulously_accepted`](Self::is_credulously_accepted),
    /// with an extension containing `arg` as a witness of a positive answer.
    ///
    /// The witness is `None` when the answer is `false`.
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>);
}

/// Solvers deciding whether an argument belongs to every extension.
pub trait SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Returns `true` iff every extension contains `arg`.
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool;

    /// Same as [`is_skeptically_accepted`](Self::is_skeptically_accepted),
    /// with an extension missing `arg` as a witness of a negative answer.
    ///
    /// The witness is `None` when the answer is `true`.
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>);
}
