use anyhow::{anyhow, Context, Result};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// The only semantics handled by this crate, written as in ICCMA problem strings.
pub const GROUNDED_SEMANTICS: &str = "GR";

/// The query to compute.
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Query {
    /// Compute the (single) extension
    SE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl Query {
    /// Returns `true` iff the query requires an argument to be checked.
    pub fn requires_argument(&self) -> bool {
        !matches!(self, Query::SE)
    }
}

impl TryFrom<&str> for Query {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Query::iter()
            .find(|q| q.as_ref().eq_ignore_ascii_case(value))
            .ok_or_else(|| anyhow!(r#"undefined query "{}""#, value))
    }
}

/// Iterates over the problem strings handled by the reasoner (`SE-GR`, `DC-GR`, `DS-GR`).
pub fn iter_problem_strings() -> impl Iterator<Item = String> {
    Query::iter().map(|q| format!("{}-{}", q.as_ref(), GROUNDED_SEMANTICS))
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is the query, while the substring after it is the semantics.
/// Since only the grounded semantics is handled, any other semantics is an error.
///
/// # Example
///
/// ```
/// # use crustground::aa::{read_problem_string, Query};
/// assert_eq!(Query::DS, read_problem_string("DS-GR").unwrap());
/// assert!(read_problem_string("SE-PR").is_err());
/// ```
pub fn read_problem_string(problem: &str) -> Result<Query> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    match problem.find('-') {
        Some(n) => {
            let query = Query::try_from(&problem[0..n]).with_context(context)?;
            let semantics = &problem[1 + n..];
            if !semantics.eq_ignore_ascii_case(GROUNDED_SEMANTICS) {
                return Err(anyhow!(
                    r#"unsupported semantics "{}"; only {} is available"#,
                    semantics,
                    GROUNDED_SEMANTICS
                ))
                .with_context(context);
            }
            Ok(query)
        }
        None => Err(anyhow!("no hyphen in problem string")).with_context(context),
    }
}
