use super::{sanitize_label, specs, InputError, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument};
use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::{fmt::Display, io::Read};

const ATTACK_RELATION: &str = "attack";

/// The identifier of a debate item, which may be written as a JSON string or number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ItemId {
    Text(String),
    Number(serde_json::Number),
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::Text(s) => write!(f, "{}", s),
            ItemId::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DebateItem {
    id: ItemId,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    relation: Option<String>,
    #[serde(default)]
    target_id: Option<ItemId>,
}

impl DebateItem {
    fn attack_target(&self) -> Option<&ItemId> {
        let is_attack = self
            .relation
            .as_deref()
            .map(|r| r.trim().eq_ignore_ascii_case(ATTACK_RELATION))
            .unwrap_or(false);
        match &self.target_id {
            Some(ItemId::Text(t)) if t.trim().is_empty() => None,
            Some(t) if is_attack => Some(t),
            _ => None,
        }
    }
}

/// A reader for lists of debate items, as produced by argument mining.
///
/// The input is a JSON array of objects with an `id`, an optional `content`, an optional `relation` and an optional `target_id`.
/// Each item is an argument; an item whose relation is `attack` attacks the item referenced by its `target_id`.
/// Identifiers may be strings or numbers; spaces in identifiers are replaced by underscores.
///
/// All the arguments are declared before the attacks are added, so the order of the items does not matter.
/// Items whose identifier cannot be written as an instruction label (empty, or containing `,`, `:` or `)`)
/// and attacks targeting unknown items are dropped with a warning, unless the strict mode is set.
///
/// # Example
///
/// ```
/// # use crustground::io::{DebateReader, InstanceReader};
/// let items = r#"[
///     {"id": "A", "content": "It is sunny", "relation": "none", "target_id": null},
///     {"id": "B", "content": "It is raining", "relation": "attack", "target_id": "A"},
///     {"id": "C", "content": "The forecast says sun", "relation": "attack", "target_id": "B"}
/// ]"#;
/// let af = DebateReader::default().read(&mut items.as_bytes()).unwrap();
/// assert_eq!(3, af.n_arguments());
/// assert_eq!(2, af.n_attacks());
/// ```
#[derive(Default)]
pub struct DebateReader {
    warning_handlers: Vec<WarningHandler>,
    strict: bool,
}

impl DebateReader {
    /// Sets whether attacks targeting unknown items make the reading fail.
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Reads a framework from the JSON description of the debate items.
    pub fn read_str(&self, input: &str) -> Result<AAFramework<String>> {
        if input.trim().is_empty() {
            return Err(InputError::EmptyInput.into());
        }
        let items: Vec<DebateItem> =
            serde_json::from_str(input).context("while parsing the debate items")?;
        let mut af = AAFramework::default();
        let mut labels = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let label = match sanitize_label(&item.id) {
                Ok(l) => l,
                Err(_) => {
                    self.drop_item(InputError::MalformedToken {
                        index: i + 1,
                        token: item.id.to_string(),
                    })?;
                    labels.push(None);
                    continue;
                }
            };
            debug!(
                "argument {}: {}",
                label,
                item.content.as_deref().unwrap_or_default()
            );
            af.new_argument(label.clone());
            labels.push(Some(label));
        }
        for (i, (item, attacker)) in items.iter().zip(labels.iter()).enumerate() {
            let (target, attacker) = match (item.attack_target(), attacker) {
                (Some(t), Some(a)) => (t, a),
                _ => continue,
            };
            match sanitize_label(target) {
                Ok(attacked) if af.argument_set().contains(&attacked) => {
                    af.new_attack(attacker, &attacked)?;
                }
                _ => self.drop_item(InputError::UnknownArgument {
                    index: i + 1,
                    label: target.to_string(),
                })?,
            }
        }
        Ok(af)
    }

    fn drop_item(&self, error: InputError) -> Result<()> {
        if self.strict {
            return Err(error.into());
        }
        let index = error.index().unwrap_or_default();
        let message = format!("ignoring debate item: {}", error);
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(index, message.clone()));
        Ok(())
    }
}

impl InstanceReader<String> for DebateReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let content = specs::read_to_string(reader)?;
        self.read_str(&content)
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        af.argument_set().get_argument(&sanitize_label(arg)?)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grounded_extension;
    use std::{cell::RefCell, rc::Rc};

    const WEATHER_DEBATE: &str = r#"[
        {"id": "A", "content": "It is sunny", "relation": "none", "target_id": null},
        {"id": "B", "content": "It is raining", "relation": "attack", "target_id": "A"},
        {"id": "C", "content": "The forecast says sun", "relation": "attack", "target_id": "B"}
    ]"#;

    fn str_attacks(af: &AAFramework<String>) -> Vec<String> {
        af.iter_attacks()
            .map(|a| format!("({},{})", a.attacker(), a.attacked()))
            .collect()
    }

    #[test]
    fn test_read_weather_debate() {
        let af = DebateReader::default().read_str(WEATHER_DEBATE).unwrap();
        assert_eq!(vec!["(B,A)", "(C,B)"], str_attacks(&af));
        let winners = grounded_extension(&af)
            .iter()
            .map(|a| a.label().clone())
            .collect::<Vec<String>>();
        assert_eq!(vec!["A".to_string(), "C".to_string()], winners);
    }

    #[test]
    fn test_read_attack_before_target() {
        let items = r#"[
            {"id": 1, "relation": "attack", "target_id": 2},
            {"id": 2}
        ]"#;
        let af = DebateReader::default().read_str(items).unwrap();
        assert_eq!(vec!["(1,2)"], str_attacks(&af));
    }

    #[test]
    fn test_read_sanitized_ids() {
        let items = r#"[
            {"id": "first claim"},
            {"id": "a rebuttal", "relation": "attack", "target_id": "first claim"}
        ]"#;
        let af = DebateReader::default().read_str(items).unwrap();
        assert_eq!(vec!["(a_rebuttal,first_claim)"], str_attacks(&af));
        let reader = DebateReader::default();
        assert!(reader.read_arg_from_str(&af, "first claim").is_ok());
    }

    #[test]
    fn test_read_non_attack_relations() {
        let items = r#"[
            {"id": "A"},
            {"id": "B", "relation": "support", "target_id": "A"},
            {"id": "C", "relation": "attack", "target_id": ""},
            {"id": "D", "relation": "attack"}
        ]"#;
        let af = DebateReader::default().read_str(items).unwrap();
        assert_eq!(4, af.n_arguments());
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_read_unknown_target() {
        let items = r#"[{"id": "A", "relation": "attack", "target_id": "Z"}]"#;
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let mut reader = DebateReader::default();
        reader.add_warning_handler(Box::new(move |i, w| {
            warnings_clone.borrow_mut().push((i, w))
        }));
        let af = reader.read_str(items).unwrap();
        assert_eq!(0, af.n_attacks());
        assert_eq!(1, warnings.borrow().len());
        assert_eq!(1, warnings.borrow()[0].0);
    }

    #[test]
    fn test_strict_unknown_target() {
        let items = r#"[{"id": "A", "relation": "attack", "target_id": "Z"}]"#;
        let err = DebateReader::default()
            .with_strict_mode(true)
            .read_str(items)
            .unwrap_err();
        assert_eq!(
            Some(&InputError::UnknownArgument {
                index: 1,
                label: "Z".to_string()
            }),
            err.downcast_ref::<InputError>()
        );
    }

    #[test]
    fn test_read_reserved_chars_in_ids() {
        let items = r#"[
            {"id": "a:b"},
            {"id": "C", "relation": "attack", "target_id": "a:b"},
            {"id": "D", "relation": "attack", "target_id": "C"},
            {"id": "E)", "relation": "attack", "target_id": "D"}
        ]"#;
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let mut reader = DebateReader::default();
        reader.add_warning_handler(Box::new(move |i, w| {
            warnings_clone.borrow_mut().push((i, w))
        }));
        let af = reader.read_str(items).unwrap();
        assert_eq!(2, af.n_arguments());
        assert_eq!(vec!["(D,C)"], str_attacks(&af));
        let indexes = warnings
            .borrow()
            .iter()
            .map(|(i, _)| *i)
            .collect::<Vec<usize>>();
        assert_eq!(vec![1, 4, 2], indexes);
    }

    #[test]
    fn test_strict_reserved_chars_in_ids() {
        let items = r#"[{"id": "A"}, {"id": "a,b"}]"#;
        let err = DebateReader::default()
            .with_strict_mode(true)
            .read_str(items)
            .unwrap_err();
        assert_eq!(
            Some(&InputError::MalformedToken {
                index: 2,
                token: "a,b".to_string()
            }),
            err.downcast_ref::<InputError>()
        );
    }

    #[test]
    fn test_read_empty() {
        let err = DebateReader::default().read_str(" ").unwrap_err();
        assert_eq!(
            Some(&InputError::EmptyInput),
            err.downcast_ref::<InputError>()
        );
        let af = DebateReader::default().read_str("[]").unwrap();
        assert_eq!(0, af.n_arguments());
    }

    #[test]
    fn test_read_invalid_json() {
        assert!(DebateReader::default().read_str("[{\"id\": }]").is_err());
        assert!(DebateReader::default().read_str("[{\"content\": \"x\"}]").is_err());
    }
}
