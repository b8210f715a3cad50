//! # Event Handler
//!
//! Turns [`AppEvent`]s from the input task into [`App`] calls.

use crate::app::commands::{Command, HELP};
use crate::app::{App, AppEvent};
use crate::core::error::{AppError, Result};

/// Whether the main loop keeps running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Text the shell prints besides the rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventReply {
    pub flow: Flow,
    pub output: Option<String>,
}

impl EventReply {
    fn quiet() -> Self {
        Self { flow: Flow::Continue, output: None }
    }

    fn say(text: impl Into<String>) -> Self {
        Self { flow: Flow::Continue, output: Some(text.into()) }
    }
}

impl App {
    /// Handle one event. Errors are turned into output lines; nothing is fatal.
    pub async fn handle_event(&self, event: AppEvent) -> EventReply {
        let command = match event {
            AppEvent::Command(command) => command,
            AppEvent::Invalid(usage) => return EventReply::say(usage),
            AppEvent::InputClosed => return EventReply { flow: Flow::Quit, output: None },
        };

        tracing::debug!(?command, "Handling command");
        match self.run_command(command).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::debug!(error = %e, "Command failed");
                EventReply::say(format!("error: {}", e.user_message()))
            }
        }
    }

    async fn run_command(&self, command: Command) -> Result<EventReply> {
        match command {
            Command::Login { username, password } => {
                self.login(&username, &password).await?;
            }
            Command::Logout => self.logout()?,
            Command::Trade(form) => {
                self.create_trade(form).await?;
            }
            Command::Cancel => self.cancel_trade().await?,
            Command::View(offer_sequence) => {
                self.view_offer(offer_sequence)?;
            }
            Command::Enable { currency, issuer, limit } => {
                self.enable_currency(&currency, issuer.as_deref(), limit.as_deref())
                    .await?;
            }
            Command::Send { amount, currency, destination, issuer } => {
                self.send_payment(&destination, &amount, &currency, issuer.as_deref())
                    .await?;
            }
            Command::Go(screen) => {
                let shown = self.navigate(screen);
                if shown != screen {
                    return Ok(EventReply::say(format!("{} is not available here", screen.title())));
                }
            }
            Command::Refresh => {
                let report = self
                    .refresh()
                    .await
                    .ok_or_else(|| AppError::State("Not logged in".to_string()))?;
                if !report.is_complete() {
                    return Ok(EventReply::say("refresh incomplete, see status line"));
                }
            }
            Command::Help => return Ok(EventReply::say(HELP)),
            Command::Quit => {
                return Ok(EventReply { flow: Flow::Quit, output: None });
            }
        }
        Ok(EventReply::quiet())
    }
}
