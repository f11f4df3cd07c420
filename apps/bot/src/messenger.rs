use std::sync::Arc;

use anyhow::Result;
use serenity::all::{ChannelId, CreateEmbed, CreateMessage, Http, MessageId};
use serenity::async_trait;

use crate::alert::Alert;

/// The two destination operations the notifier needs. Kept as a trait so
/// fan-out can run against a recording fake in tests.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, channel: ChannelId, alert: &Alert) -> Result<MessageId>;
    async fn delete(&self, channel: ChannelId, message: MessageId) -> Result<()>;
}

pub struct DiscordMessenger {
    http: Arc<Http>,
}

impl DiscordMessenger {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Messenger for DiscordMessenger {
    async fn send(&self, channel: ChannelId, alert: &Alert) -> Result<MessageId> {
        let message = CreateMessage::new().embed(CreateEmbed::from(alert));
        let sent = channel.send_message(&self.http, message).await?;
        Ok(sent.id)
    }

    async fn delete(&self, channel: ChannelId, message: MessageId) -> Result<()> {
        channel.delete_message(&self.http, message).await?;
        Ok(())
    }
}
