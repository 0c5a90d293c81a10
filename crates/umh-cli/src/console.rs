//! Interactive admin console
//!
//! Reads one command per line, dispatches it against the dashboard and
//! prints the outcome followed by the refreshed table. Chat messages are
//! sent to the concierge on a current-thread tokio runtime owned by the
//! console.

use anyhow::Context as _;
use std::io::{BufRead, Write};
use tokio::runtime::Runtime;
use umh_admin::{AdminDashboard, AdminIntent};
use umh_assistant::{AssistantContext, Conversation};

use crate::{parse_command, render_snapshot, Command, LineConfirm, HELP};

pub struct Console {
    dashboard: AdminDashboard,
    assistant: AssistantContext,
    conversation: Conversation,
    runtime: Runtime,
}

impl Console {
    pub fn new(dashboard: AdminDashboard, assistant: AssistantContext) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build async runtime")?;

        Ok(Self {
            dashboard,
            assistant,
            conversation: Conversation::new(),
            runtime,
        })
    }

    pub fn dashboard(&self) -> &AdminDashboard {
        &self.dashboard
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Run until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> anyhow::Result<()> {
        let provider = self.assistant.provider_metadata();
        tracing::info!(provider = %provider.name, model = %provider.model, "Console started");

        writeln!(output, "Universal Movies Hub admin console. Type 'help' for commands.")?;
        writeln!(output, "Concierge: {} ({})", provider.name, provider.model)?;
        self.show(output)?;

        let mut line = String::new();
        loop {
            write!(output, "umh> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(output, "Error: {}", err)?;
                    continue;
                }
            };

            if !self.execute(command, input, output)? {
                break;
            }
        }

        tracing::info!("Console closed");
        Ok(())
    }

    /// Execute one command. Returns `false` when the console should exit.
    ///
    /// Destructive commands read their confirmation from `input`.
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        input: &mut R,
        output: &mut W,
    ) -> anyhow::Result<bool> {
        match command {
            Command::Intent(intent) => self.dispatch(intent, input, output)?,
            Command::Edit { id, assignments } => {
                let form = self.dashboard.open_edit(&id).and_then(|mut form| {
                    for (field, value) in &assignments {
                        form.set_field(field, value)?;
                    }
                    Ok(form)
                });
                match form {
                    Ok(form) => self.dispatch(AdminIntent::EditRecord(form), input, output)?,
                    Err(err) => writeln!(output, "Error: {}", err)?,
                }
            }
            Command::Chat(text) => {
                writeln!(output, "Concierge is thinking...")?;
                output.flush()?;
                let reply = self
                    .runtime
                    .block_on(self.conversation.send(&mut self.assistant, &text))
                    .map(|message| message.text.clone());
                match reply {
                    Some(reply) => writeln!(output, "Concierge: {}", reply)?,
                    None => writeln!(output, "Type a message after 'chat'.")?,
                }
            }
            Command::Show => self.show(output)?,
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.dashboard.snapshot())?;
                writeln!(output, "{}", json)?;
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        intent: AdminIntent,
        input: &mut R,
        output: &mut W,
    ) -> anyhow::Result<()> {
        let mut confirm = LineConfirm::new(input, output);
        let result = self.dashboard.dispatch(intent, &mut confirm);

        match result {
            Ok(outcome) => {
                writeln!(output, "{}", outcome.summary())?;
                self.show(output)
            }
            Err(err) => {
                tracing::debug!("Intent rejected: {}", err);
                writeln!(output, "Error: {}", err)?;
                Ok(())
            }
        }
    }

    fn show<W: Write>(&self, output: &mut W) -> anyhow::Result<()> {
        write!(output, "{}", render_snapshot(&self.dashboard.snapshot()))?;
        Ok(())
    }
}
