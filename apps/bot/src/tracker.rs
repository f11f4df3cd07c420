use std::collections::HashMap;
use std::sync::Mutex;

use garden::Category;
use serenity::all::{GuildId, MessageId};

/// Most recent stock alert per (guild, category), kept so the previous
/// message can be retracted before its replacement goes out. Single slot
/// per pair; no history.
#[derive(Default)]
pub struct MessageTracker {
    inner: Mutex<HashMap<(GuildId, Category), MessageId>>,
}

impl MessageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in the new handle, returning whatever was tracked before.
    pub fn take_and_replace(
        &self,
        guild: GuildId,
        category: Category,
        message: MessageId,
    ) -> Option<MessageId> {
        self.inner
            .lock()
            .expect("message tracker poisoned")
            .insert((guild, category), message)
    }

    /// Remove and return the tracked handle. The caller gets exactly one
    /// retraction attempt with it.
    pub fn take(&self, guild: GuildId, category: Category) -> Option<MessageId> {
        self.inner
            .lock()
            .expect("message tracker poisoned")
            .remove(&(guild, category))
    }

    pub fn get(&self, guild: GuildId, category: Category) -> Option<MessageId> {
        self.inner
            .lock()
            .expect("message tracker poisoned")
            .get(&(guild, category))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("message tracker poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
