//! resolver::completer
//!
//! Shell completion suggestion emission.
//!
//! # Design
//!
//! A [`Completer`] is built with the user's in-progress input as its filter
//! and an injected output sink. Candidates - fixed option lists, enumerated
//! repositories, or scratchpads - are emitted one per line whenever their
//! display form satisfies [`matches`] against the filter, in the order the
//! candidate source produced them.
//!
//! # Caching
//!
//! Repository enumeration happens at most once per completer instance: the
//! first call caches the result for all subsequent filter checks within this
//! instance's lifetime, and an enumeration failure is cached as an empty
//! list rather than re-raised (a broken dev directory should degrade
//! completions, not break the shell). The cache is per-instance; completers
//! are not meant to be shared across threads.

use std::io::Write;

use super::matcher::matches;
use super::Resolver;
use crate::core::Repo;

/// Emits completion suggestions matching a filter to an output sink.
pub struct Completer<'a, W: Write> {
    filter: String,
    resolver: &'a Resolver<'a>,
    out: W,
    repos: Option<Vec<Repo>>,
}

impl<'a, W: Write> Completer<'a, W> {
    /// Create a completer for the given in-progress input.
    pub fn new(resolver: &'a Resolver<'a>, filter: impl Into<String>, out: W) -> Self {
        Self {
            filter: filter.into(),
            resolver,
            out,
            repos: None,
        }
    }

    /// Offer a fixed list of literal options.
    pub fn fixed<S: AsRef<str>>(&mut self, options: &[S]) -> std::io::Result<()> {
        for option in options {
            self.offer(option.as_ref())?;
        }
        Ok(())
    }

    /// Offer the qualified name of every known repository.
    pub fn repos(&mut self) -> std::io::Result<()> {
        let names: Vec<String> = self
            .cached_repos()
            .iter()
            .map(Repo::qualified_name)
            .collect();
        for name in names {
            self.offer(&name)?;
        }
        Ok(())
    }

    /// Offer every known scratchpad as `scratch/<name>`.
    pub fn scratchpads(&mut self) -> std::io::Result<()> {
        let pads = self.resolver.scratchpads().unwrap_or_default();
        for pad in pads {
            self.offer(&format!("scratch/{}", pad.name()))?;
        }
        Ok(())
    }

    /// Enumerate repositories once and reuse the result for this instance.
    fn cached_repos(&mut self) -> &[Repo] {
        if self.repos.is_none() {
            self.repos = Some(self.resolver.all().unwrap_or_default());
        }
        self.repos.as_deref().unwrap_or_default()
    }

    /// Emit a single candidate if it satisfies the filter.
    ///
    /// Values containing whitespace are single-quoted so the shell treats
    /// them as one word.
    fn offer(&mut self, value: &str) -> std::io::Result<()> {
        if !matches(value, &self.filter) {
            return Ok(());
        }

        if value.contains(char::is_whitespace) {
            writeln!(self.out, "'{}'", value)
        } else {
            writeln!(self.out, "{}", value)
        }
    }
}
