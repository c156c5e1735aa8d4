mod activity;
mod api;
mod compose;
mod config;
mod context;
mod error;
mod event;
mod handler;
mod helper;
mod logging;
mod plugin;
mod reply;
mod transcript;

use serenity::{
    all::{ActivityData, GatewayIntents},
    Client,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log_internal!("Loading Bored Bot...");
    let cfg = crate::config::Config::load().await?;
    let token = cfg.general.discord_token.clone();
    let api = crate::api::ActivityClient::new(cfg.activity_api.endpoint.as_str())?;
    let handler = handler::Handler::new(cfg, Box::new(api));

    // Slash commands and buttons arrive as interactions, which need no privileged intents.
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .activity(ActivityData::watching("Bored people"))
        .await?;

    client
        .data
        .write()
        .await
        .insert::<helper::ShardManagerContainer>(client.shard_manager.clone());

    log_internal!("Opening gateway...");
    client.start().await.map_err(Into::into)
}
