//! Grove - organize and navigate your local source repositories
//!
//! Grove keeps repositories under a single development root, grouped by
//! hosting service and laid out according to each service's directory
//! pattern (`github.com/owner/repo`, `dev.azure.com/org/project/repo`, and
//! so on). Its job is to turn the short names humans type - abbreviations,
//! aliases, or nothing at all - into concrete repository locations, and to
//! feed shell completion from the same rules.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the resolver)
//! - [`core`] - Domain types and configuration
//! - [`resolver`] - The name resolution engine, fuzzy matcher, and completer
//! - [`tasks`] - Actions applied to resolved repositories (git, via git2)
//!
//! # Resolution Contract
//!
//! 1. Aliases are substituted before any other interpretation
//! 2. Structural (exact) resolution always wins over fuzzy matching
//! 3. Ambiguous fuzzy matches are reported as "not found", never guessed
//! 4. A resolved repository's directory always exists at resolution time

pub mod cli;
pub mod core;
pub mod resolver;
pub mod tasks;
