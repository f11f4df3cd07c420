use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use garden::Category;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::info_span;
use tracing_futures::Instrument;

use crate::notify::Notifier;

pub const WEATHER_INTERVAL: Duration = Duration::from_secs(2 * 60);

/// Fire `action` immediately, then every `period`, for the life of the
/// process. Each cadence owns its task: a slow or stalled action delays
/// only its own next tick, never another cadence's.
pub fn spawn_recurring<F, Fut>(label: &'static str, period: Duration, action: F) -> JoinHandle<()>
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    tokio::spawn(async move {
        let mut tick = time::interval(period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tick.tick().await;
            action().instrument(info_span!("tick", task = label)).await;
        }
    })
}

/// Arm the weather cadence and one cadence per stock category.
pub fn start(notifier: Arc<Notifier>) -> Vec<JoinHandle<()>> {
    let mut handles = Vec::with_capacity(Category::ALL.len() + 1);

    let weather = Arc::clone(&notifier);
    handles.push(spawn_recurring("weather", WEATHER_INTERVAL, move || {
        let notifier = Arc::clone(&weather);
        async move { notifier.notify_weather().await }
    }));

    for category in Category::ALL {
        let notifier = Arc::clone(&notifier);
        handles.push(spawn_recurring(
            category.as_str(),
            category.poll_interval(),
            move || {
                let notifier = Arc::clone(&notifier);
                async move { notifier.notify_stock(category).await }
            },
        ));
    }

    handles
}
