mod category;
mod error;
mod stock_client;

pub use category::Category;
pub use error::StockApiError;
pub use stock_client::{
    Countdown, DEFAULT_BASE_URL, StockClient, StockItem, StockPayload, WeatherPayload,
};
