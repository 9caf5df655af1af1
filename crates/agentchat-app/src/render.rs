//! Plain-text rendering of transcript entries and notices.

use agentchat_common::Notice;

use crate::app_state::{Role, Turn, TurnKind};

pub const USER_PREFIX: &str = "you> ";
pub const AGENT_PREFIX: &str = "agent> ";

pub const HELP: &str = "\
Commands:
  /new      start a new chat (new session, empty transcript)
  /history  print the transcript so far
  /help     show this help
  /quit     exit
Start a message with // to send text beginning with /.";

pub fn turn_prefix(turn: &Turn) -> &'static str {
    match turn.role {
        Role::User => USER_PREFIX,
        Role::Assistant => AGENT_PREFIX,
    }
}

/// One transcript entry as a single block of text.
pub fn format_turn(turn: &Turn) -> String {
    let marker = match turn.kind {
        TurnKind::Message => "",
        TurnKind::NoText => "(no answer) ",
        TurnKind::Error => "(failed) ",
    };
    format!("{}{}{}", turn_prefix(turn), marker, turn.text)
}

pub fn format_notice(notice: &Notice) -> String {
    format!("[{}] {}", notice.level.label(), notice.message)
}

/// Startup banner.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(title.chars().count().max(8));
    format!(
        "{title}\n{rule}\nWelcome! Type a message to chat with the agent, or /help for commands."
    )
}
