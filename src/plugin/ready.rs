use crate::{event::*, log_event, logging::*, plugin::*};
use anyhow::Result;

const BANNER: &str = r#"
 _____               _    _____     _      _____           _
| __  |___ ___ ___ _| |  | __  |___| |_   | __  |___ ___ _| |_ _
| __ -| . |  _| -_| . |  | __ -| . |  _|  |    -| -_| .'| . | | |
|_____|___|_| |___|___|  |_____|___|_|    |__|__|___|__,|___|_  |
                                                            |___|
"#;

/// Reports the connection to Discord.
pub struct PluginReady;

#[serenity::async_trait]
impl Plugin for PluginReady {
    fn name(&self) -> &'static str {
        "ready"
    }

    fn usage(&self) -> Option<&'static str> {
        None
    }

    fn command(&self) -> Option<CreateCommand> {
        None
    }

    async fn handle(&self, _ctx: &Context<'_>, event: &Event) -> Result<EventHandled> {
        match event {
            Event::Ready {
                user_name,
                guild_count,
            } => {
                log_event!(
                    "Connected to {} as {}",
                    GuildCount(*guild_count).color(),
                    user_name
                );
                println!("{}", BANNER);
            }
            Event::GuildsReady { guild_count } => {
                log_event!(
                    "Bot currently in: {}",
                    GuildCount(*guild_count).color()
                );
            }
            _ => return Ok(EventHandled::No),
        }

        Ok(EventHandled::Yes)
    }
}
