use crate::aa::{AAFramework, Argument, LabelType};
use log::debug;

/// Applies the characteristic function of an AF to a set of arguments.
///
/// The set is given as a membership vector indexed by argument ids.
/// The returned vector contains the arguments whose attackers are all attacked by a member of the set.
/// In particular, unattacked arguments always belong to the result.
///
/// # Panics
///
/// Panics if the length of `in_set` differs from the number of arguments of the framework.
pub fn characteristic_function<T>(af: &AAFramework<T>, in_set: &[bool]) -> Vec<bool>
where
    T: LabelType,
{
    assert_eq!(
        af.n_arguments(),
        in_set.len(),
        "the membership vector does not match the framework"
    );
    let mut defeated = vec![false; in_set.len()];
    in_set
        .iter()
        .enumerate()
        .filter(|(_, is_in)| **is_in)
        .for_each(|(i, _)| {
            af.attacked_ids(i)
                .iter()
                .for_each(|attacked| defeated[*attacked] = true)
        });
    (0..in_set.len())
        .map(|i| af.attacker_ids(i).iter().all(|attacker| defeated[*attacker]))
        .collect()
}

/// Returns the sequence of sets obtained by iterating the characteristic function from the empty set.
///
/// The first set is the empty set; the last one is the grounded extension.
/// Two consecutive sets are always different, and each set includes the previous one.
pub fn grounded_fixpoint_sequence<T>(af: &AAFramework<T>) -> Vec<Vec<bool>>
where
    T: LabelType,
{
    let mut sequence = vec![vec![false; af.n_arguments()]];
    iterate_to_fixpoint(af, |s| sequence.push(s.to_vec()));
    sequence
}

/// Computes the grounded extension of an AF.
///
/// The extension is the least fixpoint of the characteristic function,
/// reached by applying it repeatedly to the empty set.
/// The arguments are returned in increasing id order.
pub fn grounded_extension<T>(af: &AAFramework<T>) -> Vec<&Argument<T>>
where
    T: LabelType,
{
    let fixpoint = iterate_to_fixpoint(af, |_| {});
    fixpoint
        .iter()
        .enumerate()
        .filter(|(_, is_in)| **is_in)
        .map(|(i, _)| af.argument_set().get_argument_by_id(i))
        .collect()
}

fn iterate_to_fixpoint<T, F>(af: &AAFramework<T>, mut on_new_set: F) -> Vec<bool>
where
    T: LabelType,
    F: FnMut(&[bool]),
{
    let mut current = vec![false; af.n_arguments()];
    // the sequence strictly grows until the fixpoint, so n+1 steps are enough
    for step in 0..=af.n_arguments() {
        let next = characteristic_function(af, &current);
        if next == current {
            debug!("grounded fixpoint reached after {} step(s)", step);
            return current;
        }
        debug_assert!(current.iter().zip(next.iter()).all(|(c, n)| !c || *n));
        on_new_set(&next);
        current = next;
    }
    unreachable!("the characteristic function did not reach a fixpoint")
}
