//! The Serenity crate we're using for the Discord API is designed around callbacks to handle
//! events.  However, this does not mesh well with our plugin framework here.  To resolve this,
//! the handler translates the callbacks into a distinct Event enum.

use crate::{context::Context, log_error, reply::Reply};
use serenity::all::{CommandDataOptionValue, Interaction, UserId};

/// A Discord event
#[derive(Clone, Debug)]
pub enum Event {
    /// Connected to the gateway
    Ready { user_name: String, guild_count: usize },
    /// Every guild the bot is in has been cached
    GuildsReady { guild_count: usize },
    /// A slash command was invoked
    Command {
        name: String,
        /// String-valued options, in the order the user gave them
        options: Vec<(String, String)>,
        user_id: UserId,
    },
    /// A message button was clicked
    Button { custom_id: String, user_id: UserId },
}

impl Event {
    /// Extract the parts of an interaction the plugins care about.  None for interaction kinds
    /// we never register, e.g. autocomplete or modals.
    pub fn from_interaction(interaction: &Interaction) -> Option<Self> {
        match interaction {
            Interaction::Command(command) => Some(Event::Command {
                name: command.data.name.clone(),
                options: command
                    .data
                    .options
                    .iter()
                    .filter_map(|option| match &option.value {
                        CommandDataOptionValue::String(value) => {
                            Some((option.name.clone(), value.clone()))
                        }
                        _ => None,
                    })
                    .collect(),
                user_id: command.user.id,
            }),
            Interaction::Component(component) => Some(Event::Button {
                custom_id: component.data.custom_id.clone(),
                user_id: component.user.id,
            }),
            _ => None,
        }
    }

    /// Whether Discord expects exactly one reply to this event.
    pub fn is_interaction(&self) -> bool {
        matches!(self, Event::Command { .. } | Event::Button { .. })
    }

    // When an event occurs, iterate over all the plugins to see if any can/should handle it.
    //
    // Returns the reply to send, if any.  A plugin that fails on an interaction still gets a
    // generic error reply out, so a claimed interaction is never left hanging.
    pub async fn handle(&self, ctx: &Context<'_>) -> Option<Reply> {
        for plugin in crate::plugin::plugins() {
            match plugin.handle(ctx, self).await {
                Ok(EventHandled::Reply(reply)) => return Some(reply),
                Ok(EventHandled::Yes) => return None,
                Ok(EventHandled::No) => continue,
                Err(err) => {
                    log_error!("Error in plugin {}: {}", plugin.name(), err);
                    return self
                        .is_interaction()
                        .then(|| Reply::embed(crate::reply::api_error_embed()).ephemeral());
                }
            }
        }
        None
    }

    // Check if an event is the named slash command.
    //
    // Returns the command's options if it is.
    pub fn is_bot_cmd(&self, cmd: &str) -> Option<&[(String, String)]> {
        match self {
            Event::Command { name, options, .. } if name == cmd => Some(options.as_slice()),
            _ => None,
        }
    }
}

pub enum EventHandled {
    /// Handled; answer the interaction with this reply.
    Reply(Reply),
    /// Handled; nothing to send.
    Yes,
    /// Let the next plugin have a go.
    No,
}
