use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use rand::thread_rng;
use regex::Regex;
use tracing::debug;

use crate::generator::Generator;
use crate::utils::{GrammarError, OptionExt, Result};

/// Separates a non-terminal from its alternatives in a rule line
pub const RULE_SEPARATOR: &str = "::=";

/// Separates alternatives on the right-hand side of a rule line
pub const ALTERNATIVE_SEPARATOR: char = '|';

/// Splits a rule line at its first `::=`. Both sides are kept verbatim.
static RULE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.*?)::=(.*)$").expect("rule pattern is valid"));

/// An immutable context-free grammar
///
/// Maps each non-terminal name to its ordered list of raw alternatives. Whether
/// a token inside an alternative is a terminal or a non-terminal is decided at
/// expansion time by looking it up here, so a name that is never defined simply
/// behaves like a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    rules: BTreeMap<String, Vec<String>>,
}

impl Grammar {
    /// Build a grammar from rule lines of the form `NAME::=ALT1|ALT2|...`
    ///
    /// The name is used exactly as written, surrounding whitespace included.
    /// Alternatives are stored untrimmed; an empty right-hand side or a trailing
    /// `|` produces an empty alternative.
    ///
    /// Fails with [`GrammarError::InvalidGrammar`] when `rules` is empty, when a
    /// line has no `::=`, or when the same name is defined twice.
    pub fn new<I, S>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut seen_any = false;

        for line in rules {
            seen_any = true;
            let (name, alternatives) = Self::parse_rule(line.as_ref())?;

            if map.contains_key(name) {
                return Err(GrammarError::InvalidGrammar(format!(
                    "non-terminal `{}` is defined more than once",
                    name
                )));
            }
            map.insert(name.to_string(), alternatives);
        }

        if !seen_any {
            return Err(GrammarError::InvalidGrammar(
                "rules cannot be empty".to_string(),
            ));
        }

        debug!(non_terminals = map.len(), "grammar built");
        Ok(Grammar { rules: map })
    }

    /// Parse one rule line into its name and raw alternatives
    pub fn parse_rule(line: &str) -> Result<(&str, Vec<String>)> {
        let captures = RULE_REGEX.captures(line).ok_or_else(|| {
            GrammarError::InvalidGrammar(format!(
                "rule `{}` has no `{}` separator",
                line, RULE_SEPARATOR
            ))
        })?;

        // Both groups always participate in a match.
        let name = captures.get(1).map_or("", |m| m.as_str());
        let rhs = captures.get(2).map_or("", |m| m.as_str());

        let alternatives = rhs
            .split(ALTERNATIVE_SEPARATOR)
            .map(str::to_string)
            .collect();

        Ok((name, alternatives))
    }

    /// Check if `symbol` is exactly one of the grammar's non-terminals
    pub fn contains(&self, symbol: &str) -> bool {
        self.rules.contains_key(symbol)
    }

    /// All non-terminal names in sorted order
    pub fn symbols(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    /// The raw, untrimmed alternatives of a non-terminal
    pub fn alternatives(&self, non_terminal: &str) -> Result<&[String]> {
        self.rules
            .get(non_terminal)
            .map(Vec::as_slice)
            .ok_or_unknown(non_terminal)
    }

    /// Iterate over `(name, alternatives)` pairs in sorted order
    pub fn rules(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.rules
            .iter()
            .map(|(name, alts)| (name.as_str(), alts.as_slice()))
    }

    /// Number of non-terminals
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false for a successfully constructed grammar
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Generate `count` sentences from `symbol` using the thread-local RNG
    ///
    /// See [`Generator::generate`] for the error conditions.
    pub fn generate<C>(&self, symbol: &str, count: C) -> Result<Vec<String>>
    where
        C: TryInto<usize>,
    {
        Generator::with_rng(self, thread_rng()).generate(symbol, count)
    }
}

/// Renders the sorted symbol list, e.g. `[A, B, S]`
impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.symbols().join(", "))
    }
}

/// Parses a block of rule text, one rule per line
///
/// Blank lines and lines starting with `#` are skipped. Lines are otherwise
/// passed to [`Grammar::new`] untouched.
impl FromStr for Grammar {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self> {
        Grammar::new(s.lines().filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        }))
    }
}
