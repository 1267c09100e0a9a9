//! bnf-gen generates random sentences from simple BNF-style grammars.
//!
//! A grammar is a list of rule lines of the form `NAME::=ALT1|ALT2|...`. Each
//! alternative is a whitespace-separated list of symbols; a symbol that names a
//! rule is a non-terminal and gets expanded, anything else is emitted as-is.
//!
//! # Example
//!
//! ```rust
//! use bnf_gen::{Generator, Grammar};
//!
//! let grammar = Grammar::new([
//!     "greeting::=hello subject",
//!     "subject::=world|Rust programmers",
//! ])
//! .unwrap();
//!
//! assert_eq!(grammar.to_string(), "[greeting, subject]");
//!
//! // Seeded generators are reproducible
//! let mut generator = Generator::seeded(&grammar, 42);
//! for text in generator.generate("greeting", 3).unwrap() {
//!     assert!(text == "hello world" || text == "hello Rust programmers");
//! }
//! ```

pub mod generator;
pub mod grammar;
pub mod utils;

pub use generator::{Generator, GeneratorConfig};
pub use grammar::Grammar;
pub use utils::{GrammarError, Result};
