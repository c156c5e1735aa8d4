use crate::{event::*, log_event, logging::*, plugin::*};
use anyhow::Result;

/// Prints debug information about interactions to stdout
pub struct PluginDebug;

#[serenity::async_trait]
impl Plugin for PluginDebug {
    fn name(&self) -> &'static str {
        "debug"
    }

    fn usage(&self) -> Option<&'static str> {
        None
    }

    fn command(&self) -> Option<CreateCommand> {
        None
    }

    async fn handle(&self, _ctx: &Context<'_>, event: &Event) -> Result<EventHandled> {
        match event {
            Event::Command {
                name,
                options,
                user_id,
            } => {
                let options = options
                    .iter()
                    .map(|(name, value)| format!(" {}={}", name, value))
                    .collect::<String>();
                log_event!(
                    "{}{} {}{}",
                    user_id.color(),
                    Glue {}.color(),
                    CommandName(name).color(),
                    options,
                );
            }
            Event::Button { custom_id, user_id } => {
                log_event!(
                    "{}{} clicked button \"{}\"",
                    user_id.color(),
                    Glue {}.color(),
                    custom_id,
                );
            }
            // Logged by the ready plugin
            Event::Ready { .. } | Event::GuildsReady { .. } => {}
        }

        Ok(EventHandled::No)
    }
}
