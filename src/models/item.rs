//! The capability every in-world object implements.
//!
//! The engine only ever talks to items through [`Item`]: identity (name, description, aliases),
//! movability, and [`Item::interact`], which answers an [`InteractionEvent`] with an
//! [`InteractionResult`]. Items that do not care about a kind of interaction inherit
//! [`default_interaction`].

use crate::input::parser::PlayerCommand;
use crate::models::player::PlayerView;

/// Kinds of interaction a player can apply to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InteractionKind {
    Look,
    Get,
    Drop,
    Inspect,
    Use,
    Push,
    Pull,
    Activate,
    Deactivate,
    Open,
    Close,
    Repair,
    Destroy,
    Lock,
    Unlock,
    Consume,
    Taunt,
    Unknown,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 18] = [
        InteractionKind::Look,
        InteractionKind::Get,
        InteractionKind::Drop,
        InteractionKind::Inspect,
        InteractionKind::Use,
        InteractionKind::Push,
        InteractionKind::Pull,
        InteractionKind::Activate,
        InteractionKind::Deactivate,
        InteractionKind::Open,
        InteractionKind::Close,
        InteractionKind::Repair,
        InteractionKind::Destroy,
        InteractionKind::Lock,
        InteractionKind::Unlock,
        InteractionKind::Consume,
        InteractionKind::Taunt,
        InteractionKind::Unknown,
    ];

    /// Free-text verbs that select this kind.
    ///
    /// LOOK, GET and DROP are raised by their own handlers and have no free-text alias here.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            InteractionKind::Look | InteractionKind::Get | InteractionKind::Drop => &[],
            InteractionKind::Inspect => &["INSPECT", "EXAMINE"],
            InteractionKind::Use => &["USE"],
            InteractionKind::Push => &["PUSH"],
            InteractionKind::Pull => &["PULL"],
            InteractionKind::Activate => &["ACTIVATE", "ENABLE"],
            InteractionKind::Deactivate => &["DEACTIVATE", "DISABLE"],
            InteractionKind::Open => &["OPEN"],
            InteractionKind::Close => &["CLOSE"],
            InteractionKind::Repair => &["FIX", "REPAIR", "MEND"],
            InteractionKind::Destroy => &["BREAK", "DESTROY", "SMASH"],
            InteractionKind::Lock => &["LOCK"],
            InteractionKind::Unlock => &["UNLOCK"],
            InteractionKind::Consume => &["EAT", "DRINK", "CONSUME"],
            InteractionKind::Taunt => &["TAUNT"],
            InteractionKind::Unknown => &[],
        }
    }

    /// Resolve a verb to its interaction kind. Total: anything unmatched is `Unknown`.
    pub fn resolve(token: &str) -> InteractionKind {
        let token = token.trim();
        InteractionKind::ALL
            .into_iter()
            .find(|kind| kind.aliases().iter().any(|a| a.eq_ignore_ascii_case(token)))
            .unwrap_or(InteractionKind::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Look => "LOOK",
            InteractionKind::Get => "GET",
            InteractionKind::Drop => "DROP",
            InteractionKind::Inspect => "INSPECT",
            InteractionKind::Use => "USE",
            InteractionKind::Push => "PUSH",
            InteractionKind::Pull => "PULL",
            InteractionKind::Activate => "ACTIVATE",
            InteractionKind::Deactivate => "DEACTIVATE",
            InteractionKind::Open => "OPEN",
            InteractionKind::Close => "CLOSE",
            InteractionKind::Repair => "REPAIR",
            InteractionKind::Destroy => "DESTROY",
            InteractionKind::Lock => "LOCK",
            InteractionKind::Unlock => "UNLOCK",
            InteractionKind::Consume => "CONSUME",
            InteractionKind::Taunt => "TAUNT",
            InteractionKind::Unknown => "UNKNOWN",
        }
    }
}

impl core::fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verb applied to an item by the player. Built per interaction, never stored.
#[derive(Debug, Clone, Copy)]
pub struct InteractionEvent<'a> {
    pub kind: InteractionKind,
    pub command: &'a PlayerCommand,
    pub player: &'a PlayerView,
}

impl<'a> InteractionEvent<'a> {
    pub fn new(kind: InteractionKind, command: &'a PlayerCommand, player: &'a PlayerView) -> Self {
        Self { kind, command, player }
    }
}

/// Outcome of an interaction. A failed result forbids the caller from moving the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionResult {
    pub success: bool,
    pub message: String,
}

impl InteractionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Success without text; callers fall back to their own wording.
    pub fn ok() -> Self {
        Self::success("")
    }

    pub fn refused() -> Self {
        Self::failure("")
    }

    pub fn has_message(&self) -> bool {
        !self.message.trim().is_empty()
    }
}

/// Fallback behaviour for kinds an item does not override.
pub fn default_interaction(display_name: &str, kind: InteractionKind) -> InteractionResult {
    tracing::debug!(%kind, item = display_name, "default item interaction");
    match kind {
        InteractionKind::Get => InteractionResult::success(format!("You picked up the {display_name}")),
        InteractionKind::Drop => InteractionResult::success(format!("You dropped the {display_name}")),
        _ => InteractionResult::failure(format!("Undefined action on {display_name}.")),
    }
}

/// An in-world object that can be carried, inspected or left behind.
///
/// Aliases must not contain whitespace; the tokenizer only ever hands a single word to alias
/// lookups.
pub trait Item: Send + Sync {
    /// Short name used in listings and messages.
    fn display_name(&self) -> String;

    /// Text shown when the player looks at the item.
    fn full_description(&self) -> String;

    /// Words the player may use to refer to this item.
    fn aliases(&self) -> Vec<String>;

    /// Anchored items never leave the container they are in.
    fn is_anchored(&self) -> bool {
        false
    }

    fn interact(&mut self, event: &InteractionEvent<'_>) -> InteractionResult {
        default_interaction(&self.display_name(), event.kind)
    }

    /// Called when a successful GET could not be completed because the item never left its
    /// container. State changed on GET should be rolled back here.
    fn get_undone(&mut self) {}

    /// Case-insensitive alias match, accented letters included.
    fn answers_to(&self, noun: &str) -> bool {
        let noun = noun.trim().to_uppercase();
        !noun.is_empty() && self.aliases().iter().any(|a| a.to_uppercase() == noun)
    }
}

/// A plain item with fixed texts; also what blueprint files produce.
#[derive(Debug, Clone)]
pub struct SimpleItem {
    pub name: String,
    pub description: String,
    pub aliases: Vec<String>,
    pub anchored: bool,
}

impl SimpleItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>, aliases: &[&str]) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            anchored: false,
        }
    }

    pub fn anchored(mut self) -> Self {
        self.anchored = true;
        self
    }
}

impl Item for SimpleItem {
    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn full_description(&self) -> String {
        self.description.clone()
    }

    fn aliases(&self) -> Vec<String> {
        self.aliases.clone()
    }

    fn is_anchored(&self) -> bool {
        self.anchored
    }
}
