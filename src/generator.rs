use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::grammar::Grammar;
use crate::utils::{GrammarError, Result};

/// Configuration options for generation behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Maximum nesting of non-terminal expansions. `None` leaves expansion
    /// unguarded, so a grammar with an inescapable cycle never returns.
    pub max_recursion_depth: Option<usize>,
    /// Seed for the random source; drawn from OS entropy when absent
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Parse a configuration from JSON, e.g. `{"max_recursion_depth": 50}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Expands non-terminals of a [`Grammar`] into random sentences
///
/// Each generator owns its random source; the grammar is only borrowed, so any
/// number of generators can share one grammar.
#[derive(Debug)]
pub struct Generator<'g, R = StdRng> {
    grammar: &'g Grammar,
    rng: R,
    max_recursion_depth: Option<usize>,
}

impl<'g> Generator<'g, StdRng> {
    /// Create a generator seeded from OS entropy
    pub fn new(grammar: &'g Grammar) -> Self {
        Self::with_rng(grammar, StdRng::from_entropy())
    }

    /// Create a generator whose output is fully determined by `seed`
    pub fn seeded(grammar: &'g Grammar, seed: u64) -> Self {
        Self::with_rng(grammar, StdRng::seed_from_u64(seed))
    }

    /// Create a generator from a [`GeneratorConfig`]
    pub fn with_config(grammar: &'g Grammar, config: &GeneratorConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => Self::seeded(grammar, seed),
            None => Self::new(grammar),
        };
        Generator {
            max_recursion_depth: config.max_recursion_depth,
            ..generator
        }
    }
}

impl<'g, R: Rng> Generator<'g, R> {
    /// Create a generator drawing from the given random source
    pub fn with_rng(grammar: &'g Grammar, rng: R) -> Self {
        Generator {
            grammar,
            rng,
            max_recursion_depth: None,
        }
    }

    /// Fail with [`GrammarError::RecursionLimitExceeded`] instead of recursing
    /// past `depth` nested non-terminals
    pub fn max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = Some(depth);
        self
    }

    /// The grammar this generator expands
    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Generate `count` independent sentences derived from `symbol`
    ///
    /// Fails with [`GrammarError::InvalidArgument`] if `count` is negative or
    /// if `symbol` is not a non-terminal, before any expansion happens.
    pub fn generate<C>(&mut self, symbol: &str, count: C) -> Result<Vec<String>>
    where
        C: TryInto<usize>,
    {
        let count: usize = count.try_into().map_err(|_| {
            GrammarError::InvalidArgument("count cannot be negative".to_string())
        })?;
        if !self.grammar.contains(symbol) {
            return Err(GrammarError::InvalidArgument(
                "symbol must be a non-terminal".to_string(),
            ));
        }

        debug!(symbol, count, "generating sentences");
        (0..count).map(|_| self.expand(symbol)).collect()
    }

    /// Expand a whitespace-separated sentential form into terminals only
    ///
    /// Tokens that name a non-terminal are replaced by a random expansion of one
    /// of their alternatives; every other token is emitted as-is. Results are
    /// joined with single spaces and the whole is trimmed.
    pub fn expand(&mut self, symbols: &str) -> Result<String> {
        self.expand_at(symbols, 0)
    }

    fn expand_at(&mut self, symbols: &str, depth: usize) -> Result<String> {
        let grammar = self.grammar;
        let mut pieces = Vec::new();

        for token in symbols.split_whitespace() {
            if !grammar.contains(token) {
                pieces.push(token.to_string());
                continue;
            }

            if let Some(limit) = self.max_recursion_depth {
                if depth >= limit {
                    return Err(GrammarError::RecursionLimitExceeded {
                        symbol: token.to_string(),
                        depth,
                    });
                }
            }

            let alternatives = grammar.alternatives(token)?;
            let index = self.rng.gen_range(0..alternatives.len());
            trace!(symbol = token, index, depth, "expanding non-terminal");

            pieces.push(self.expand_at(alternatives[index].trim(), depth + 1)?);
        }

        Ok(pieces.join(" ").trim().to_string())
    }
}
