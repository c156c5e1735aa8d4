use crate::{
    api::ActivitySource, compose::Composer, config::Config, context::Context, event::Event,
    helper::ContextHelper, log_error, log_internal,
};
use serenity::all::{Command, GuildId, Interaction, Ready};
use std::time::Duration;

/// Discord event handler
pub struct Handler {
    cfg: Config,
    api: Box<dyn ActivitySource>,
    composer: Composer,
}

impl<'a> Handler {
    pub fn new(cfg: Config, api: Box<dyn ActivitySource>) -> Self {
        let composer = Composer::new(&cfg.assets.template, &cfg.assets.font);
        Self { cfg, api, composer }
    }

    fn ctx(&'a self, latency: Option<Duration>) -> Context<'a> {
        Context {
            cfg: &self.cfg,
            api: self.api.as_ref(),
            composer: &self.composer,
            latency,
        }
    }
}

#[serenity::async_trait]
impl serenity::all::EventHandler for Handler {
    async fn ready(&self, discord_ctx: serenity::all::Context, ready: Ready) {
        log_internal!("Registering slash commands...");
        match Command::set_global_commands(&discord_ctx.http, crate::plugin::commands()).await {
            Ok(commands) => log_internal!("Registered {} slash commands", commands.len()),
            Err(err) => log_error!("Could not register slash commands: {}", err),
        }

        let event = Event::Ready {
            user_name: ready.user.name.clone(),
            guild_count: ready.guilds.len(),
        };
        event.handle(&self.ctx(None)).await;
    }

    async fn cache_ready(&self, _discord_ctx: serenity::all::Context, guilds: Vec<GuildId>) {
        let event = Event::GuildsReady {
            guild_count: guilds.len(),
        };
        event.handle(&self.ctx(None)).await;
    }

    // Serenity runs each callback on its own task, so slow API calls here never hold up other
    // interactions.
    async fn interaction_create(
        &self,
        discord_ctx: serenity::all::Context,
        interaction: Interaction,
    ) {
        let Some(event) = Event::from_interaction(&interaction) else {
            return;
        };

        let latency = discord_ctx.shard_latency().await;
        let Some(reply) = event.handle(&self.ctx(latency)).await else {
            return;
        };

        let response = reply.into_response();
        let sent = match &interaction {
            Interaction::Command(command) => {
                command.create_response(&discord_ctx.http, response).await
            }
            Interaction::Component(component) => {
                component.create_response(&discord_ctx.http, response).await
            }
            _ => return,
        };

        if let Err(err) = sent {
            log_error!("Could not reply to {:?}: {}", event, err);
        }
    }
}
