use std::sync::Arc;

use anyhow::Result;
use serenity::all::{
    ChannelId, ChannelType, Context, CreateChannel, EventHandler, Guild, GuildId,
    PermissionOverwrite, PermissionOverwriteType, Permissions, Ready, RoleId,
};
use serenity::async_trait;
use tracing::{error, info};

use bot::Data;
use garden::Category;

/// Name of the per-guild notification channel this bot provisions.
pub const CHANNEL_NAME: &str = "🌱-grow-a-garden-stock-notifier";

pub struct Handler {
    pub data: Arc<Data>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            "{} [{}] connected successfully!",
            ready.user.name, ready.user.id
        );

        for guild in &ready.guilds {
            if let Err(e) = self.adopt_guild(&ctx, guild.id).await {
                error!(guild = %guild.id, error = ?e, "guild setup failed");
            }
        }

        self.catch_up(&ctx).await;
    }

    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        // Startup availability events arrive here too; those guilds were
        // already adopted in `ready`.
        if is_new != Some(true) {
            return;
        }

        info!(guild = %guild.id, name = %guild.name, "joined new guild");

        if let Err(e) = self.adopt_guild(&ctx, guild.id).await {
            error!(guild = %guild.id, error = ?e, "guild setup failed");
            return;
        }

        self.catch_up(&ctx).await;
    }
}

impl Handler {
    /// Find or create the notification channel and register it for
    /// fan-out. Safe to re-run: an existing channel is reused and the
    /// registry upserts.
    async fn adopt_guild(&self, ctx: &Context, guild_id: GuildId) -> Result<()> {
        let channel = ensure_channel(ctx, guild_id).await?;
        self.data.channels.register(guild_id, channel);
        Ok(())
    }

    /// Push current weather and stock to every registered channel, so a
    /// fresh guild is not left waiting for the next scheduled tick.
    async fn catch_up(&self, ctx: &Context) {
        let notifier = self.data.notifier(ctx.http.clone());

        notifier.notify_weather().await;
        for category in Category::ALL {
            notifier.notify_stock(category).await;
        }
    }
}

async fn ensure_channel(ctx: &Context, guild_id: GuildId) -> Result<ChannelId> {
    let channels = guild_id.channels(&ctx.http).await?;

    if let Some(existing) = channels
        .values()
        .find(|c| c.kind == ChannelType::Text && c.name == CHANNEL_NAME)
    {
        info!(guild = %guild_id, channel = %existing.id, "found existing notifier channel");
        return Ok(existing.id);
    }

    // Everyone may read the feed; only the bot posts into it.
    let everyone = RoleId::new(guild_id.get());
    let bot_user = ctx.cache.current_user().id;

    let builder = CreateChannel::new(CHANNEL_NAME)
        .kind(ChannelType::Text)
        .permissions(vec![
            PermissionOverwrite {
                allow: Permissions::VIEW_CHANNEL,
                deny: Permissions::SEND_MESSAGES,
                kind: PermissionOverwriteType::Role(everyone),
            },
            PermissionOverwrite {
                allow: Permissions::SEND_MESSAGES,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Member(bot_user),
            },
        ]);

    let created = guild_id.create_channel(&ctx.http, builder).await?;
    info!(guild = %guild_id, channel = %created.id, "created notifier channel");

    Ok(created.id)
}
