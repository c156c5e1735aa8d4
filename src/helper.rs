//! Miscellaneous convenience methods

use serenity::{all::ShardManager, prelude::TypeMapKey};
use std::{sync::Arc, time::Duration};

/// Serenity crate system to make the shard manager reachable from event callbacks
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

#[serenity::async_trait]
pub trait ContextHelper {
    /// Heartbeat latency of the shard this context belongs to.
    async fn shard_latency(&self) -> Option<Duration>;
}

#[serenity::async_trait]
impl ContextHelper for serenity::all::Context {
    async fn shard_latency(&self) -> Option<Duration> {
        let data = self.data.read().await;
        let shard_manager = data.get::<ShardManagerContainer>()?;
        let runners = shard_manager.runners.lock().await;
        runners.get(&self.shard_id)?.latency
    }
}
