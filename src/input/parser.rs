//! Command parser for verb/noun inputs.
//!
//! Examples:
//!   "  take   the mug "  -> verb="TAKE", noun="THE MUG"
//!   "n"                  -> verb="N", noun=""     (direction shortcut)
//!   "t 99"               -> verb="T", noun="99"
//!
//! Usage:
//!   let cmd = PlayerCommand::parse(raw)?;
//!   match cmd.verb.as_str() { "LOOK" | "L" => { /* inspect cmd.noun */ }, _ => {} }

use crate::models::types::Direction;

/// A parsed player instruction. Created per input line and discarded after one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    /// First token, never empty.
    pub verb: String,
    /// Everything after the first space, possibly empty.
    pub noun: String,
    /// The normalized line this command was built from.
    pub original: String,
}

impl PlayerCommand {
    /// Normalize and tokenize a raw line in one go.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::tokenize(&normalize(raw))
    }

    /// Split an already normalized line at the first space. Blank lines yield `None`.
    pub fn tokenize(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (verb, noun) = match line.split_once(' ') {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        Some(Self {
            verb: verb.to_string(),
            noun: noun.to_string(),
            original: line.to_string(),
        })
    }

    pub fn has_noun(&self) -> bool {
        !self.noun.is_empty()
    }

    /// Does the verb match one of `verbs` (case-insensitive)?
    pub fn verb_is(&self, verbs: &[&str]) -> bool {
        verbs.iter().any(|v| v.eq_ignore_ascii_case(&self.verb))
    }

    /// A single-word direction command ("N", "NORTH", ...).
    pub fn direction(&self) -> Option<Direction> {
        if self.has_noun() {
            return None;
        }
        Direction::parse(&self.verb)
    }
}

impl core::fmt::Display for PlayerCommand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.original)
    }
}

//
// ---- Normalization ----
//

/// Trim, collapse whitespace runs into one space and upper-case. Non-ASCII letters are
/// upper-cased too, so `crème` and `CRÈME` name the same thing.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_space = false;
    for ch in s.trim().chars() {
        if ch.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.extend(ch.to_uppercase());
            last_space = false;
        }
    }
    out
}
