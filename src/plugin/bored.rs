use crate::{
    activity::{
        Activity, ActivityQuery, Category, OPTION_CATEGORY, OPTION_PARTICIPANTS, OPTION_PRICE,
    },
    error::{ApiError, AssetError},
    event::*,
    log_error,
    plugin::*,
    reply::{self, Attachment, Button, Reply},
    transcript,
};
use anyhow::Result;
use serenity::all::{CommandOptionType, CreateCommandOption};

const COMMAND: &str = "bored";
const IMAGE_FILENAME: &str = "activity.png";
pub const TRANSCRIPT_BUTTON_LABEL: &str = "Show Transcript";

// Only values the API accepts as filters are offered.
const PRICE_CHOICES: [&str; 8] = ["0", "0.1", "0.2", "0.3", "0.4", "0.5", "0.6", "0.8"];
const PARTICIPANT_CHOICES: [&str; 6] = ["1", "2", "3", "4", "5", "8"];

/// `/bored` - fetch an activity and reply with it drawn onto the template image
pub struct PluginBored;

#[serenity::async_trait]
impl Plugin for PluginBored {
    fn name(&self) -> &'static str {
        "bored"
    }

    fn usage(&self) -> Option<&'static str> {
        Some(
            "`/bored` - get something to do when you're bored. *Some options are missing because \
             they are not valid parameters for BoredAPI.* Leaving options blank returns a random \
             activity!",
        )
    }

    fn command(&self) -> Option<CreateCommand> {
        Some(
            CreateCommand::new(COMMAND)
                .description("Bored? Get something to do")
                .add_option(string_option(
                    OPTION_CATEGORY,
                    "the activity type",
                    Category::ALL.iter().map(Category::as_str),
                ))
                .add_option(string_option(
                    OPTION_PRICE,
                    "the relative price, where 0 is free",
                    PRICE_CHOICES,
                ))
                .add_option(string_option(
                    OPTION_PARTICIPANTS,
                    "the number of participants",
                    PARTICIPANT_CHOICES,
                )),
        )
    }

    async fn handle(&self, ctx: &Context<'_>, event: &Event) -> Result<EventHandled> {
        let Some(options) = event.is_bot_cmd(COMMAND) else {
            return Ok(EventHandled::No);
        };

        let query = ActivityQuery::from_options(
            options
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        )?;

        let fetched = if query.is_empty() {
            ctx.api.fetch_random().await
        } else {
            ctx.api.fetch_by_query(&query).await
        };

        Ok(EventHandled::Reply(activity_reply(ctx, fetched).await))
    }
}

fn string_option<'a>(
    name: &str,
    description: &str,
    choices: impl IntoIterator<Item = &'a str>,
) -> CreateCommandOption {
    choices.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, name, description).required(false),
        |option, choice| option.add_string_choice(choice, choice),
    )
}

async fn activity_reply(ctx: &Context<'_>, fetched: Result<Activity, ApiError>) -> Reply {
    let activity = match fetched {
        Ok(activity) if activity.no_match() => {
            return Reply::embed(reply::no_match_embed()).ephemeral();
        }
        Ok(activity) => activity,
        Err(err) => {
            log_error!("Could not get a new activity: {}", err);
            return Reply::embed(reply::api_error_embed()).ephemeral();
        }
    };

    let button = Some(Button {
        label: TRANSCRIPT_BUTTON_LABEL.to_owned(),
        custom_id: transcript::encode(&activity.key),
    });

    // Font rasterization and PNG encoding are CPU-bound.
    let composer = ctx.composer.clone();
    let rendered = tokio::task::spawn_blocking(move || composer.render(&activity))
        .await
        .unwrap_or_else(|e| Err(AssetError::Interrupted(e.to_string())));

    match rendered {
        Ok(png) => Reply {
            attachment: Some(Attachment {
                filename: IMAGE_FILENAME.to_owned(),
                data: png,
            }),
            button,
            ..Default::default()
        },
        Err(err) => {
            log_error!("Could not render activity image: {}", err);
            Reply {
                button,
                ..Reply::embed(reply::image_error_embed())
            }
            .ephemeral()
        }
    }
}
