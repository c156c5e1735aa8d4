use crate::{event::*, log_error, plugin::*, reply, transcript};
use anyhow::Result;
use serenity::all::Mentionable;

/// "Show Transcript" button - re-fetch the activity by key and describe it in text
pub struct PluginTranscript;

#[serenity::async_trait]
impl Plugin for PluginTranscript {
    fn name(&self) -> &'static str {
        "transcript"
    }

    fn usage(&self) -> Option<&'static str> {
        None
    }

    fn command(&self) -> Option<CreateCommand> {
        None
    }

    async fn handle(&self, ctx: &Context<'_>, event: &Event) -> Result<EventHandled> {
        let Event::Button { custom_id, user_id } = event else {
            return Ok(EventHandled::No);
        };
        // Someone else's button
        let Ok(key) = transcript::decode(custom_id) else {
            return Ok(EventHandled::No);
        };

        let embed = match ctx.api.fetch_by_key(key).await {
            Ok(activity) if !activity.no_match() => reply::transcript_embed(&activity),
            Ok(activity) => {
                // Keys come from our own buttons, so this means the API lost the activity.
                log_error!(
                    "Transcript key `{}` matched nothing: {}",
                    key,
                    activity.error.unwrap_or_default()
                );
                reply::api_error_embed()
            }
            Err(err) => {
                log_error!("Could not get transcript activity: {}", err);
                reply::api_error_embed()
            }
        };

        Ok(EventHandled::Reply(reply::Reply {
            content: Some(user_id.mention().to_string()),
            ..reply::Reply::embed(embed).ephemeral()
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::{event::Event, plugin::testing::*, reply};
    use serenity::all::UserId;

    fn click(custom_id: &str) -> Event {
        Event::Button {
            custom_id: custom_id.to_owned(),
            user_id: UserId::new(1234),
        }
    }

    #[tokio::test]
    async fn refetches_by_key_and_mentions_user() {
        let cfg = config();
        let composer = composer(&cfg);
        let api = FakeSource::serving(activity());
        let ctx = context(&cfg, &api, &composer);

        let reply = click("bored_bot_transcript:42").handle(&ctx).await.unwrap();

        assert_eq!(api.calls(), ["key:42"]);
        assert_eq!(reply.content.as_deref(), Some("<@1234>"));
        assert_eq!(reply.embeds, [reply::transcript_embed(&activity())]);
        assert!(reply.ephemeral);
        assert!(reply.attachment.is_none());
        assert!(reply.button.is_none());
    }

    #[tokio::test]
    async fn key_keeps_embedded_colons() {
        let cfg = config();
        let composer = composer(&cfg);
        let api = FakeSource::serving(activity());
        let ctx = context(&cfg, &api, &composer);

        click("bored_bot_transcript:a:b").handle(&ctx).await.unwrap();

        assert_eq!(api.calls(), ["key:a:b"]);
    }

    #[tokio::test]
    async fn fetch_failure_gets_generic_error() {
        let cfg = config();
        let composer = composer(&cfg);
        let api = FakeSource::failing();
        let ctx = context(&cfg, &api, &composer);

        let reply = click("bored_bot_transcript:42").handle(&ctx).await.unwrap();

        assert_eq!(api.calls(), ["key:42"]);
        assert_eq!(reply.content.as_deref(), Some("<@1234>"));
        assert_eq!(reply.embeds, [reply::api_error_embed()]);
        assert!(reply.ephemeral);
        assert!(reply.attachment.is_none());
        assert!(reply.button.is_none());
    }

    #[tokio::test]
    async fn foreign_buttons_are_ignored() {
        let cfg = config();
        let composer = composer(&cfg);
        let api = FakeSource::serving(activity());
        let ctx = context(&cfg, &api, &composer);

        assert!(click("some_other_bot:42").handle(&ctx).await.is_none());
        assert!(api.calls().is_empty());
    }
}
