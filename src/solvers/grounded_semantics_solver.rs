use super::{CredulousAcceptanceComputer, SingleExtensionComputer, SkepticalAcceptanceComputer};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    utils,
};
use log::info;

/// A solver used to solve queries for the grounded semantics.
///
/// The (unique) grounded extension is the least fixpoint of the characteristic function of the framework.
/// It is computed in time polynomial in the size of the framework, at most once per solver.
///
/// This solver implements [SingleExtensionComputer] and both [CredulousAcceptanceComputer] and [SkepticalAcceptanceComputer] interfaces.
/// In these three cases, the computation resumes to the computation of the grounded extension,
/// and credulous and skeptical acceptance coincide.
///
/// When a certificate is provided, the certificate is the grounded extension itself.
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    extension: Option<Vec<&'a Argument<T>>>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the grounded semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustground::aa::{AAFramework, LabelType};
    /// # use crustground::solvers::{SingleExtensionComputer, GroundedSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = GroundedSemanticsSolver::new(af);
    ///     let ext = solver.compute_one_extension().unwrap();
    ///     println!("found the grounded extension: {:?}", ext);
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self {
            af,
            extension: None,
        }
    }

    fn grounded_extension(&mut self) -> &[&'a Argument<T>] {
        let af = self.af;
        self.extension.get_or_insert_with(|| {
            let ext = utils::grounded_extension(af);
            info!(
                "the grounded extension has {} argument(s) out of {}",
                ext.len(),
                af.n_arguments()
            );
            ext
        })
    }

    fn is_in_grounded_extension(&mut self, arg: &Argument<T>) -> bool {
        self.grounded_extension().iter().any(|a| a.id() == arg.id())
    }
}

impl<T> SingleExtensionComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        Some(self.grounded_extension().to_vec())
    }
}

impl<T> CredulousAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.is_in_grounded_extension(arg)
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        if self.is_in_grounded_extension(arg) {
            (true, Some(self.grounded_extension().to_vec()))
        } else {
            (false, None)
        }
    }
}

impl<T> SkepticalAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.is_in_grounded_extension(arg)
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        if self.is_in_grounded_extension(arg) {
            (true, None)
        } else {
            (false, Some(self.grounded_extension().to_vec()))
        }
    }
}
