use crate::{
    event::*,
    log_error,
    plugin::*,
    reply::{Attachment, Embed, EmbedField, Reply, COLOR_INFO},
};
use anyhow::Result;

const COMMAND: &str = "about";
const LOGO_FILENAME: &str = "bored-bot-logo.png";

// Discord collapses trailing blank lines, so a hangul filler keeps the gap between fields.
const FIELD_SPACER: &str = "\nㅤ\n";

/// `/about` - who made the bot and how to get help
pub struct PluginAbout;

#[serenity::async_trait]
impl Plugin for PluginAbout {
    fn name(&self) -> &'static str {
        "about"
    }

    fn usage(&self) -> Option<&'static str> {
        Some("`/about` - this...")
    }

    fn command(&self) -> Option<CreateCommand> {
        Some(CreateCommand::new(COMMAND).description("About Bored Bot"))
    }

    async fn handle(&self, ctx: &Context<'_>, event: &Event) -> Result<EventHandled> {
        if event.is_bot_cmd(COMMAND).is_none() {
            return Ok(EventHandled::No);
        }

        let mut commands = String::new();
        for plugin in crate::plugin::plugins() {
            if let Some(usage) = plugin.usage() {
                commands.push_str("• ");
                commands.push_str(usage);
                commands.push('\n');
            }
        }
        commands.push_str(FIELD_SPACER);

        let mut embed = Embed {
            title: "About Bored Bot".to_owned(),
            description: Some(
                "Bored Bot is a simple-to-use Discord bot which allows you to get something to do \
                 when you're bored! [GitHub repo link.](https://github.com/TisLeo/Bored-Bot)"
                    .to_owned(),
            ),
            fields: vec![
                EmbedField {
                    name: "Commands".to_owned(),
                    value: commands,
                },
                EmbedField {
                    name: "Tech Stack".to_owned(),
                    value: format!(
                        "• [Rust](https://www.rust-lang.org/) Language\n\
                         • [Serenity](https://github.com/serenity-rs/serenity) library\n\
                         • [image](https://github.com/image-rs/image) and \
                         [imageproc](https://github.com/image-rs/imageproc) graphics libraries{}",
                        FIELD_SPACER
                    ),
                },
                EmbedField {
                    name: "Help".to_owned(),
                    value: "Use the help channel in the \
                            [support server](https://discord.gg/yx3gkv6Why)."
                        .to_owned(),
                },
            ],
            color: COLOR_INFO,
            thumbnail: None,
        };

        // The logo is decoration; the reply goes out without it.
        let attachment = match tokio::fs::read(&ctx.cfg.assets.logo).await {
            Ok(data) => {
                embed.thumbnail = Some(format!("attachment://{}", LOGO_FILENAME));
                Some(Attachment {
                    filename: LOGO_FILENAME.to_owned(),
                    data,
                })
            }
            Err(e) => {
                log_error!(
                    "Could not read logo `{}`: {}",
                    ctx.cfg.assets.logo.to_string_lossy(),
                    e
                );
                None
            }
        };

        Ok(EventHandled::Reply(Reply {
            attachment,
            ..Reply::embed(embed)
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, event::Event, plugin::testing::*};
    use serenity::all::UserId;

    fn about() -> Event {
        Event::Command {
            name: "about".to_owned(),
            options: Vec::new(),
            user_id: UserId::new(7),
        }
    }

    #[tokio::test]
    async fn missing_logo_still_replies() {
        let cfg = config();
        let composer = composer(&cfg);
        let api = FakeSource::failing();
        let ctx = context(&cfg, &api, &composer);

        let reply = about().handle(&ctx).await.unwrap();

        assert!(reply.attachment.is_none());
        assert_eq!(reply.embeds[0].title, "About Bored Bot");
        assert!(reply.embeds[0].thumbnail.is_none());
        assert!(!reply.ephemeral);
    }

    #[tokio::test]
    async fn attaches_logo_as_thumbnail() {
        let dir = tempfile::tempdir().unwrap();
        let logo = dir.path().join("logo.png");
        std::fs::write(&logo, b"\x89PNG fake").unwrap();
        let cfg = Config::parse(&format!(
            "[general]\n[assets]\nlogo = {:?}\n",
            logo.to_string_lossy()
        ))
        .unwrap();
        let composer = composer(&cfg);
        let api = FakeSource::failing();
        let ctx = context(&cfg, &api, &composer);

        let reply = about().handle(&ctx).await.unwrap();

        let attachment = reply.attachment.unwrap();
        assert_eq!(attachment.filename, "bored-bot-logo.png");
        assert_eq!(attachment.data, b"\x89PNG fake");
        assert_eq!(
            reply.embeds[0].thumbnail.as_deref(),
            Some("attachment://bored-bot-logo.png")
        );
    }

    #[tokio::test]
    async fn lists_every_command() {
        let cfg = config();
        let composer = composer(&cfg);
        let api = FakeSource::failing();
        let ctx = context(&cfg, &api, &composer);

        let reply = about().handle(&ctx).await.unwrap();
        let commands = &reply.embeds[0].fields[0].value;

        for command in ["`/bored`", "`/ping`", "`/about`"] {
            assert!(commands.contains(command), "{} missing", command);
        }
    }
}
