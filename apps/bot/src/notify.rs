use std::sync::Arc;

use garden::{Category, StockClient};
use tracing::{debug, error, instrument, warn};

use crate::alert::Alert;
use crate::messenger::Messenger;
use crate::registry::ChannelRegistry;
use crate::tracker::MessageTracker;

/// Formats fetched payloads and fans them out to every registered
/// channel. A failure at any single destination is logged with the guild
/// id and never stops the rest of the pass.
pub struct Notifier {
    messenger: Arc<dyn Messenger>,
    stock_api: Arc<StockClient>,
    channels: Arc<ChannelRegistry>,
    last_messages: Arc<MessageTracker>,
}

impl Notifier {
    pub fn new(
        messenger: Arc<dyn Messenger>,
        stock_api: Arc<StockClient>,
        channels: Arc<ChannelRegistry>,
        last_messages: Arc<MessageTracker>,
    ) -> Self {
        Self {
            messenger,
            stock_api,
            channels,
            last_messages,
        }
    }

    /// Weather updates are fresh posts every time, never retracted.
    #[instrument(name = "notify_weather", skip(self))]
    pub async fn notify_weather(&self) {
        let weather = match self.stock_api.fetch_weather().await {
            Ok(w) => w,
            Err(e) => {
                error!(error = ?e, "weather fetch failed");
                return;
            }
        };

        let alert = Alert::weather(&weather);

        for (guild, channel) in self.channels.snapshot() {
            if let Err(e) = self.messenger.send(channel, &alert).await {
                warn!(guild = %guild, error = ?e, "failed to send weather update");
            }
        }
    }

    /// Stock alerts supersede the previous one per (guild, category):
    /// the old message gets one best-effort retraction, then the new one
    /// is sent and its handle tracked.
    #[instrument(name = "notify_stock", skip(self), fields(category = %category))]
    pub async fn notify_stock(&self, category: Category) {
        let stock = match self.stock_api.fetch_stock(category).await {
            Ok(s) => s,
            Err(e) => {
                error!(error = ?e, "stock fetch failed");
                return;
            }
        };

        // An empty list is not news, and not an error either.
        if stock.items.is_empty() {
            debug!("nothing in stock");
            return;
        }

        let alert = Alert::stock(category, &stock);

        for (guild, channel) in self.channels.snapshot() {
            if let Some(previous) = self.last_messages.take(guild, category) {
                if let Err(e) = self.messenger.delete(channel, previous).await {
                    debug!(guild = %guild, error = ?e, "could not retract previous alert");
                }
            }

            match self.messenger.send(channel, &alert).await {
                Ok(sent) => {
                    self.last_messages.take_and_replace(guild, category, sent);
                }
                Err(e) => {
                    warn!(guild = %guild, error = ?e, "failed to send stock alert");
                }
            }
        }
    }
}
