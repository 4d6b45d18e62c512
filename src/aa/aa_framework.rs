use super::{Argument, ArgumentSet, LabelType};
use anyhow::{Context, Result};
use std::collections::HashSet;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// Both the arguments and the attacks are handled as sets:
/// adding an argument or an attack that already belongs to the framework has no effect.
#[derive(Debug, Default)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<(usize, usize)>,
    attack_set: HashSet<(usize, usize)>,
    attackers_of: Vec<Vec<usize>>,
    attacked_by: Vec<Vec<usize>>,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustground::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }

    /// Returns `true` iff the attacker and the attacked argument are the same.
    pub fn is_self_attack(&self) -> bool {
        self.0.id() == self.1.id()
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework.
    ///
    /// The set of arguments used in the framework is provided.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustground::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.n_arguments());
    /// assert_eq!(0, framework.n_attacks());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let attackers_of = (0..arguments.len()).map(|_| vec![]).collect();
        let attacked_by = (0..arguments.len()).map(|_| vec![]).collect();
        AAFramework {
            arguments,
            attacks: vec![],
            attack_set: HashSet::new(),
            attackers_of,
            attacked_by,
        }
    }

    /// Adds a new argument to this argumentation framework.
    ///
    /// Returns `true` iff the argument was not already present.
    pub fn new_argument(&mut self, label: T) -> bool {
        let added = self.arguments.new_argument(label);
        if added {
            self.attackers_of.push(Vec::new());
            self.attacked_by.push(Vec::new());
        }
        added
    }

    /// Adds a new attack given the labels of the source and destination arguments.
    ///
    /// If the provided arguments are undefined, an error is returned.
    /// If the attack already exists, nothing changes and `false` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustground::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// assert!(framework.new_attack(&labels[0], &labels[1]).unwrap());
    /// assert!(!framework.new_attack(&labels[0], &labels[1]).unwrap());
    /// assert_eq!(1, framework.n_attacks());
    /// assert!(framework.new_attack(&labels[0], &"d").is_err());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<bool> {
        let context = || format!("cannot add an attack from {:?} to {:?}", from, to);
        let attacker_id = self
            .arguments
            .get_argument_index(from)
            .with_context(context)?;
        let attacked_id = self
            .arguments
            .get_argument_index(to)
            .with_context(context)?;
        Ok(self.insert_attack(attacker_id, attacked_id))
    }

    fn insert_attack(&mut self, from: usize, to: usize) -> bool {
        if !self.attack_set.insert((from, to)) {
            return false;
        }
        self.attacks.push((from, to));
        self.attackers_of[to].push(from);
        self.attacked_by[from].push(to);
        true
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Provides an iterator to the attacks, in insertion order.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustground::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.new_attack(&"a", &"b").unwrap();
    /// let attack = framework.iter_attacks().next().unwrap();
    /// assert_eq!(&"a", attack.attacker().label());
    /// ```
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(a, b)| self.make_attack(*a, *b))
    }

    fn make_attack(&self, from: usize, to: usize) -> Attack<'_, T> {
        Attack(
            self.arguments.get_argument_by_id(from),
            self.arguments.get_argument_by_id(to),
        )
    }

    /// Returns the ids of the arguments attacking the argument with the given id.
    pub(crate) fn attacker_ids(&self, attacked_id: usize) -> &[usize] {
        &self.attackers_of[attacked_id]
    }

    /// Returns the ids of the arguments attacked by the argument with the given id.
    pub(crate) fn attacked_ids(&self, attacker_id: usize) -> &[usize] {
        &self.attacked_by[attacker_id]
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_framework() -> (Vec<String>, AAFramework<String>) {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        (arg_labels, AAFramework::new_with_argument_set(args))
    }

    #[test]
    fn test_n_args() {
        let (_, af) = abc_framework();
        assert_eq!(3, af.n_arguments());
    }

    #[test]
    fn test_new_attack_ok() {
        let (arg_labels, mut af) = abc_framework();
        assert_eq!(0, af.n_attacks());
        assert!(af.new_attack(&arg_labels[0], &arg_labels[0]).unwrap());
        assert_eq!(1, af.n_attacks());
        assert_eq!((0, 0), af.attacks[0]);
        assert!(af.iter_attacks().next().unwrap().is_self_attack());
    }

    #[test]
    fn test_new_attack_twice() {
        let (arg_labels, mut af) = abc_framework();
        assert!(af.new_attack(&arg_labels[0], &arg_labels[1]).unwrap());
        assert!(!af.new_attack(&arg_labels[0], &arg_labels[1]).unwrap());
        assert_eq!(1, af.n_attacks());
        assert_eq!(&[0], af.attacker_ids(1));
        assert_eq!(&[1], af.attacked_ids(0));
    }

    #[test]
    fn test_new_attack_unknown_label_1() {
        let (arg_labels, mut af) = abc_framework();
        af.new_attack(&"d".to_string(), &arg_labels[0]).unwrap_err();
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_new_attack_unknown_label_2() {
        let (arg_labels, mut af) = abc_framework();
        af.new_attack(&arg_labels[0], &"d".to_string()).unwrap_err();
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_new_argument() {
        let (_, mut af) = abc_framework();
        assert!(af.new_argument("d".to_string()));
        assert_eq!(4, af.n_arguments());
        assert!(!af.new_argument("d".to_string()));
        assert_eq!(4, af.n_arguments());
        af.new_attack(&"d".to_string(), &"a".to_string()).unwrap();
        assert_eq!(&[3], af.attacker_ids(0));
    }

    #[test]
    fn test_debug() {
        let (arg_labels, mut af) = abc_framework();
        af.new_attack(&arg_labels[0], &arg_labels[1]).unwrap();
        let debug = format!("{:?}", af);
        assert!(debug.contains(r#"label: "a""#));
        assert!(debug.contains("(0, 1)"));
    }
}
