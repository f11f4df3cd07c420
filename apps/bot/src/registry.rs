use std::collections::HashMap;
use std::sync::Mutex;

use serenity::all::{ChannelId, GuildId};

/// Guild -> notification channel. One channel per guild; the map only
/// grows as guilds are discovered or joined.
#[derive(Default)]
pub struct ChannelRegistry {
    inner: Mutex<HashMap<GuildId, ChannelId>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert. Returns the channel previously registered for the guild.
    pub fn register(&self, guild: GuildId, channel: ChannelId) -> Option<ChannelId> {
        self.inner
            .lock()
            .expect("channel registry poisoned")
            .insert(guild, channel)
    }

    pub fn get(&self, guild: GuildId) -> Option<ChannelId> {
        self.inner
            .lock()
            .expect("channel registry poisoned")
            .get(&guild)
            .copied()
    }

    /// Stable view for one fan-out pass. Registrations landing while a
    /// pass is running are picked up on the next pass.
    pub fn snapshot(&self) -> Vec<(GuildId, ChannelId)> {
        self.inner
            .lock()
            .expect("channel registry poisoned")
            .iter()
            .map(|(guild, channel)| (*guild, *channel))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("channel registry poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
