//! Interactive terminal loop: chat input, transcript, and commands.

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use agentchat_client::AgentService;
use agentchat_common::ChatError;
use agentchat_config::DisplayConfig;

use crate::app_state::{ChatController, TurnKind};
use crate::render::{self, AGENT_PREFIX};
use crate::typing::type_out;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    Message(String),
    NewChat,
    History,
    Help,
    Quit,
    Unknown(String),
}

impl Input {
    /// Messages keep the line as typed. A leading `//` sends a message
    /// that starts with a single `/`.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if !trimmed.starts_with('/') {
            return Self::Message(line.to_string());
        }
        if let Some(escaped) = trimmed.strip_prefix("//") {
            return Self::Message(format!("/{escaped}"));
        }
        match trimmed {
            "/new" => Self::NewChat,
            "/history" => Self::History,
            "/help" => Self::Help,
            "/quit" | "/exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Run the chat loop until `/quit` or end of input.
pub async fn run<S, R, W>(
    controller: &mut ChatController<S>,
    display: &DisplayConfig,
    input: R,
    out: &mut W,
) -> Result<(), ChatError>
where
    S: AgentService,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let delay = if display.typing_effect {
        Duration::from_millis(display.word_delay_ms)
    } else {
        Duration::ZERO
    };

    write_line(out, &render::banner(&display.title)).await?;

    if let Err(e) = controller.start().await {
        debug!(error = %e, "initial session failed");
    }
    show_session_status(controller, out).await?;

    let mut lines = input.lines();
    loop {
        let prompt = if controller.phase().is_blocked() {
            "(disabled) > "
        } else {
            "> "
        };
        out.write_all(prompt.as_bytes()).await?;
        out.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Input::parse(&line) {
            Input::Empty => {}
            Input::Quit => break,
            Input::Help => write_line(out, render::HELP).await?,
            Input::History => {
                for turn in controller.transcript() {
                    write_line(out, &render::format_turn(turn)).await?;
                }
            }
            Input::NewChat => {
                if let Err(e) = controller.reset().await {
                    debug!(error = %e, "reset failed");
                }
                show_session_status(controller, out).await?;
            }
            Input::Unknown(cmd) => {
                write_line(out, &format!("unknown command {cmd}, type /help")).await?;
            }
            Input::Message(text) => match controller.submit(&text).await {
                Ok(turn) => {
                    out.write_all(AGENT_PREFIX.as_bytes()).await?;
                    let pace = if turn.kind == TurnKind::Message {
                        delay
                    } else {
                        Duration::ZERO
                    };
                    type_out(out, &turn.text, pace).await?;
                }
                Err(e) => write_line(out, &format!("[error] {e}")).await?,
            },
        }
    }

    write_line(out, "bye").await?;
    Ok(())
}

async fn show_session_status<S, W>(
    controller: &mut ChatController<S>,
    out: &mut W,
) -> Result<(), ChatError>
where
    S: AgentService,
    W: AsyncWrite + Unpin,
{
    for notice in controller.drain_notices() {
        write_line(out, &render::format_notice(&notice)).await?;
    }
    if controller.phase().is_blocked() {
        write_line(
            out,
            "Chat input is disabled. Type /new to retry or /quit to exit.",
        )
        .await?;
    }
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, line: &str) -> std::io::Result<()> {
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}
