use garden::{Category, StockPayload, WeatherPayload};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

const STOCK_COLOR: u32 = 0x00c851;
const WEATHER_COLOR: u32 = 0x3498db;

/// Content of one notification, independent of the wire format so the
/// fan-out path can be exercised without a Discord connection.
#[derive(Debug, Clone)]
pub struct Alert {
    pub title: String,
    pub color: u32,
    pub description: Option<String>,
    /// (name, value, inline), in display order.
    pub fields: Vec<(String, String, bool)>,
    pub footer: String,
}

impl Alert {
    pub fn weather(weather: &WeatherPayload) -> Self {
        let field = |value: &Option<String>| {
            value.clone().unwrap_or_else(|| "None".to_string())
        };

        Self {
            title: "⛅ Weather Update".to_string(),
            color: WEATHER_COLOR,
            description: None,
            fields: vec![
                ("🌿 Effect".to_string(), field(&weather.effect), true),
                ("✨ Bonus".to_string(), field(&weather.bonus), true),
                ("🧬 Mutation".to_string(), field(&weather.mutation), true),
            ],
            footer: "Weather updates every 2 minutes".to_string(),
        }
    }

    pub fn stock(category: Category, stock: &StockPayload) -> Self {
        let lines: Vec<String> = stock
            .items
            .iter()
            .map(|item| format!("• **{}** is now in stock!", item.name))
            .collect();

        let next_update = stock
            .countdown
            .as_ref()
            .map(|c| c.formatted.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            title: format!("🪴 {} STOCK ALERT", category.as_str().to_uppercase()),
            color: STOCK_COLOR,
            description: Some(lines.join("\n")),
            fields: vec![("⏳ Next Update".to_string(), next_update, false)],
            footer: "Grow A Garden Stock Notifier".to_string(),
        }
    }
}

impl From<&Alert> for CreateEmbed {
    fn from(alert: &Alert) -> Self {
        let mut embed = CreateEmbed::new()
            .title(alert.title.clone())
            .color(alert.color)
            .footer(CreateEmbedFooter::new(alert.footer.clone()))
            .timestamp(Timestamp::now());

        if let Some(description) = &alert.description {
            embed = embed.description(description.clone());
        }

        for (name, value, inline) in &alert.fields {
            embed = embed.field(name.clone(), value.clone(), *inline);
        }

        embed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden::{Countdown, StockItem};

    #[test]
    fn weather_fields_default_to_none() {
        let alert = Alert::weather(&WeatherPayload::default());

        assert_eq!(alert.title, "⛅ Weather Update");
        assert_eq!(
            alert.fields,
            [
                ("🌿 Effect".to_string(), "None".to_string(), true),
                ("✨ Bonus".to_string(), "None".to_string(), true),
                ("🧬 Mutation".to_string(), "None".to_string(), true),
            ]
        );
    }

    #[test]
    fn weather_reports_present_fields_verbatim() {
        let weather = WeatherPayload {
            effect: Some("Thunderstorm".to_string()),
            bonus: Some("2x Growth".to_string()),
            mutation: None,
        };
        let alert = Alert::weather(&weather);

        assert_eq!(alert.fields[0].1, "Thunderstorm");
        assert_eq!(alert.fields[1].1, "2x Growth");
        assert_eq!(alert.fields[2].1, "None");
    }

    #[test]
    fn stock_lists_every_item_as_a_bullet_line() {
        let stock = StockPayload {
            items: vec![
                StockItem {
                    name: "Sprinkler".to_string(),
                },
                StockItem {
                    name: "Shovel".to_string(),
                },
            ],
            countdown: Some(Countdown {
                formatted: "2m 30s".to_string(),
            }),
        };
        let alert = Alert::stock(Category::Gear, &stock);

        assert_eq!(alert.title, "🪴 GEAR STOCK ALERT");
        assert_eq!(
            alert.description.as_deref(),
            Some("• **Sprinkler** is now in stock!\n• **Shovel** is now in stock!")
        );
        assert_eq!(
            alert.fields,
            [("⏳ Next Update".to_string(), "2m 30s".to_string(), false)]
        );
    }

    #[test]
    fn stock_without_countdown_shows_unknown() {
        let stock = StockPayload {
            items: vec![StockItem {
                name: "Night Egg".to_string(),
            }],
            countdown: None,
        };
        let alert = Alert::stock(Category::Egg, &stock);

        assert_eq!(alert.fields[0].1, "Unknown");
        assert_eq!(alert.footer, "Grow A Garden Stock Notifier");
    }
}
