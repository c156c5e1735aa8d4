//! Replies to interactions, kept independent of Serenity's builders until they are sent.

use crate::activity::Activity;
use serenity::all::{
    ButtonStyle, CreateActionRow, CreateAttachment, CreateButton, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

pub const COLOR_INFO: u32 = 0x4B63CF;
pub const COLOR_SUCCESS: u32 = 0x4bb84b;
pub const COLOR_ERROR: u32 = 0xc93420;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reply {
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
    pub attachment: Option<Attachment>,
    pub button: Option<Button>,
    /// Only visible to the user who triggered the interaction.
    pub ephemeral: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Embed {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<EmbedField>,
    pub color: u32,
    pub thumbnail: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub label: String,
    pub custom_id: String,
}

impl Reply {
    pub fn embed(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
            ..Default::default()
        }
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    pub fn into_response(self) -> CreateInteractionResponse {
        let mut message = CreateInteractionResponseMessage::new()
            .embeds(self.embeds.into_iter().map(Embed::into_create).collect())
            .ephemeral(self.ephemeral);

        if let Some(content) = self.content {
            message = message.content(content);
        }
        if let Some(Attachment { filename, data }) = self.attachment {
            message = message.add_file(CreateAttachment::bytes(data, filename));
        }
        if let Some(Button { label, custom_id }) = self.button {
            let button = CreateButton::new(custom_id)
                .label(label)
                .style(ButtonStyle::Primary);
            message = message.components(vec![CreateActionRow::Buttons(vec![button])]);
        }

        CreateInteractionResponse::Message(message)
    }
}

impl Embed {
    fn into_create(self) -> CreateEmbed {
        let mut embed = CreateEmbed::new().title(self.title).color(self.color);
        if let Some(description) = self.description {
            embed = embed.description(description);
        }
        for EmbedField { name, value } in self.fields {
            embed = embed.field(name, value, false);
        }
        if let Some(thumbnail) = self.thumbnail {
            embed = embed.thumbnail(thumbnail);
        }
        embed
    }
}

/// The remote API could not be reached or answered nonsense.
pub fn api_error_embed() -> Embed {
    Embed {
        title: "There was an error getting the activity.".to_owned(),
        description: Some("If this continues, contact the developer (use `/about`).".to_owned()),
        color: COLOR_ERROR,
        ..Default::default()
    }
}

pub fn image_error_embed() -> Embed {
    Embed {
        title: "There was an error generating the image.".to_owned(),
        description: Some(
            "You can still use the transcript below. If this continues, contact the developer \
             (use `/about`)."
                .to_owned(),
        ),
        color: COLOR_ERROR,
        ..Default::default()
    }
}

pub fn no_match_embed() -> Embed {
    Embed {
        title: "Oops! No activity exists with your given parameters.".to_owned(),
        description: Some(
            "Please try again with different ones. Having no luck? Leave out the options and get \
             a random activity instead! If this seems wrong, contact the developer (use `/about`)."
                .to_owned(),
        ),
        color: COLOR_ERROR,
        ..Default::default()
    }
}

/// Text version of the activity image.
pub fn transcript_embed(activity: &Activity) -> Embed {
    Embed {
        title: "BORED? Try this... [Transcript]".to_owned(),
        description: Some(format!(
            "Activity **»** *{}*\n\nType **»** *{}*\n\nRelative Price **»** *{}*\n\n\
             Participants **»** *{}*",
            activity.description,
            activity.category,
            activity.price_label(),
            activity.participant_count,
        )),
        color: COLOR_INFO,
        ..Default::default()
    }
}
