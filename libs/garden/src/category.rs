use std::fmt;
use std::time::Duration;

/// One tracked kind of stock. The set is fixed: each category carries its
/// own upstream path and poll cadence for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Gear,
    Seeds,
    Egg,
    Honey,
    Cosmetics,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Gear,
        Category::Seeds,
        Category::Egg,
        Category::Honey,
        Category::Cosmetics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Gear => "gear",
            Category::Seeds => "seeds",
            Category::Egg => "egg",
            Category::Honey => "honey",
            Category::Cosmetics => "cosmetics",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Category::Gear => "/api/stock/gear",
            Category::Seeds => "/api/stock/seeds",
            Category::Egg => "/api/stock/egg",
            Category::Honey => "/api/stock/honey",
            Category::Cosmetics => "/api/stock/cosmetics",
        }
    }

    /// How often this category is polled upstream.
    pub fn poll_interval(self) -> Duration {
        match self {
            Category::Gear | Category::Seeds => Duration::from_secs(5 * 60),
            Category::Egg => Duration::from_secs(30 * 60),
            Category::Honey => Duration::from_secs(60 * 60),
            Category::Cosmetics => Duration::from_secs(4 * 60 * 60),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
