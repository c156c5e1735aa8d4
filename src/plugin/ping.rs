use crate::{
    event::*,
    plugin::*,
    reply::{Embed, Reply, COLOR_SUCCESS},
};
use anyhow::Result;

const COMMAND: &str = "ping";

pub struct PluginPing;

#[serenity::async_trait]
impl Plugin for PluginPing {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn usage(&self) -> Option<&'static str> {
        Some("`/ping` - get the bot's latency")
    }

    fn command(&self) -> Option<CreateCommand> {
        Some(CreateCommand::new(COMMAND).description("Get bot's latency"))
    }

    async fn handle(&self, ctx: &Context<'_>, event: &Event) -> Result<EventHandled> {
        if event.is_bot_cmd(COMMAND).is_none() {
            return Ok(EventHandled::No);
        }

        // Shards report nothing until their first heartbeat is acknowledged.
        let latency = match ctx.latency {
            Some(latency) => format!("{}ms", latency.as_millis()),
            None => "unknown".to_owned(),
        };

        Ok(EventHandled::Reply(Reply::embed(Embed {
            title: format!("Pong! (Latency `{}`)", latency),
            color: COLOR_SUCCESS,
            ..Default::default()
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::{event::Event, plugin::testing::*};
    use serenity::all::UserId;
    use std::time::Duration;

    fn ping() -> Event {
        Event::Command {
            name: "ping".to_owned(),
            options: Vec::new(),
            user_id: UserId::new(7),
        }
    }

    #[tokio::test]
    async fn reports_shard_latency() {
        let cfg = config();
        let composer = composer(&cfg);
        let api = FakeSource::failing();
        let mut ctx = context(&cfg, &api, &composer);
        ctx.latency = Some(Duration::from_millis(87));

        let reply = ping().handle(&ctx).await.unwrap();

        assert_eq!(reply.embeds[0].title, "Pong! (Latency `87ms`)");
        assert!(!reply.ephemeral);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn latency_unknown_before_first_heartbeat() {
        let cfg = config();
        let composer = composer(&cfg);
        let api = FakeSource::failing();
        let ctx = context(&cfg, &api, &composer);

        let reply = ping().handle(&ctx).await.unwrap();

        assert_eq!(reply.embeds[0].title, "Pong! (Latency `unknown`)");
    }
}
