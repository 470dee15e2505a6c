use crate::commands::{CommandHandler, CommandResult};
use crate::input::parser::PlayerCommand;
use crate::models::item::InteractionKind;

pub struct Help;

/// Interaction kinds the player can name directly, sorted, `|`-separated.
pub fn interaction_verbs() -> String {
    let mut names: Vec<&str> = InteractionKind::ALL
        .iter()
        .filter(|k| !k.aliases().is_empty())
        .map(|k| k.as_str())
        .collect();
    names.sort_unstable();
    names.join("|")
}

pub fn help_text() -> String {
    format!(
        r#"All commands are either two words (verb noun) or a single word such as "look" or "north"

    Movement:
      N(orth) | S(outh) | E(ast) | W(est) | U(p) | D(own)

    Item Interactions:
      ( TAKE | DROP ) ( <item> | ALL )
      ({verbs}) <item>

    Room Interactions:
      SHOW ROOM        # Displays an image of the room, if available.

    Debugging:
      DEBUG ( ROOM | MAP )
      LOG ( OFF | ERROR | WARN | INFO | DEBUG | TRACE )

    Other:
      I                # ("Inventory": Show Player Inventory)
      L {{item}}         # ("Look": Show Room Description & Room Items)
      T [room id]      # ("Teleport": Jump to RoomID)
      ?                # (This List)"#,
        verbs = interaction_verbs(),
    )
}

impl CommandHandler for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn verbs(&self) -> &'static [&'static str] {
        &["HELP", "?"]
    }

    fn handle(&self, _cmd: &PlayerCommand) -> CommandResult {
        Ok(Some(help_text()))
    }
}
