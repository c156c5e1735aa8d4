use crate::{context::Context, event::EventHandled};
use anyhow::Result;
use serenity::all::CreateCommand;

mod about;
mod bored;
mod debug;
mod ping;
mod ready;
mod transcript;

#[serenity::async_trait]
pub trait Plugin: Sync + Send {
    /// Plugin name.  Used for debug
    fn name(&self) -> &'static str;
    /// Help line shown by `/about`.  None if the plugin has no command
    fn usage(&self) -> Option<&'static str>;
    /// Slash command to register with Discord, if any
    fn command(&self) -> Option<CreateCommand>;
    /// Potentially handle event.  Returns:
    /// - Ok(EventHandled::Reply) if the event has been handled and must be answered
    /// - Ok(EventHandled::Yes) if the event has been handled and no other plugin should attempt to
    /// handle it
    /// - Ok(EventHandled::No) if another plugin should attempt to handle the event
    /// - Err if an error occurred
    async fn handle(
        &self,
        ctx: &Context<'_>,
        event: &crate::event::Event,
    ) -> Result<EventHandled>;
}

/// Ordered list of available plugins
pub fn plugins() -> Vec<Box<dyn Plugin>> {
    vec![
        // Core bot operations
        Box::new(debug::PluginDebug),
        Box::new(ready::PluginReady),
        // Commands, in the order `/about` lists them
        Box::new(bored::PluginBored),
        Box::new(ping::PluginPing),
        Box::new(about::PluginAbout),
        // Components
        Box::new(transcript::PluginTranscript),
    ]
}

/// Every slash command to register globally.
pub fn commands() -> Vec<CreateCommand> {
    plugins().iter().filter_map(|plugin| plugin.command()).collect()
}


#[cfg(test)]
mod tests {
    use super::{testing::*, *};
    use crate::event::Event;
    use serenity::all::UserId;

    #[test]
    fn registers_three_commands() {
        let json: Vec<_> = commands()
            .into_iter()
            .map(|command| serde_json::to_value(command).unwrap())
            .collect();
        let names: Vec<_> = json.iter().map(|c| c["name"].as_str().unwrap()).collect();

        assert_eq!(names, ["bored", "ping", "about"]);
        assert_eq!(json[0]["options"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unknown_events_get_no_reply() {
        let cfg = config();
        let composer = composer(&cfg);
        let api = FakeSource::serving(activity());
        let ctx = context(&cfg, &api, &composer);

        let command = Event::Command {
            name: "nope".to_owned(),
            options: Vec::new(),
            user_id: UserId::new(1),
        };
        assert!(command.handle(&ctx).await.is_none());

        let ready = Event::GuildsReady { guild_count: 3 };
        assert!(ready.handle(&ctx).await.is_none());
        assert!(api.calls().is_empty());
    }
}
