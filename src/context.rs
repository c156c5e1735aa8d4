use crate::{api::ActivitySource, compose::Composer, config::Config};
use std::time::Duration;

/// Collection of data that is shared across events
///
/// Everything here is read-only, so concurrent interactions never contend on it.
pub struct Context<'a> {
    pub cfg: &'a Config,
    pub api: &'a dyn ActivitySource,
    pub composer: &'a Composer,
    /// Heartbeat latency of the shard that delivered the event.  None until the first heartbeat
    /// is acknowledged.
    pub latency: Option<Duration>,
}
