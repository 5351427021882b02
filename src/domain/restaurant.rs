use crate::domain::ids::{RestaurantId, TableId};
use crate::domain::time_slot::SlotPolicy;

/// The visual character of a restaurant's microsite. Drives theme
/// resolution, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestaurantVibe {
    Luxury,
    Romantic,
    Party,
    Calm,
    Artistic,
}

/// A physical table, as referenced by staff when confirming a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub id: TableId,
    pub table_number: String,
    pub capacity: u32,
    pub location: Option<String>,
}

/// Per-restaurant color overrides layered over the vibe theme. Empty
/// strings count as absent, matching the falsy check of the original
/// storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorOverrides {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub vibe: RestaurantVibe,
    pub color_overrides: ColorOverrides,
    pub address: String,
    pub city: String,
    pub is_active: bool,
    pub tables: Vec<Table>,
    pub policy: SlotPolicy,
}

/// The set of restaurants known to the platform. Lookup surface for the
/// public microsites (by slug, active only) and the admin side (by id,
/// regardless of state).
#[derive(Debug, Clone, Default)]
pub struct RestaurantDirectory {
    restaurants: Vec<Restaurant>,
}

impl RestaurantDirectory {
    pub fn new(restaurants: Vec<Restaurant>) -> RestaurantDirectory {
        RestaurantDirectory { restaurants }
    }

    pub fn add(&mut self, restaurant: Restaurant) {
        self.restaurants.push(restaurant);
    }

    /// Microsite lookup: slugs only resolve while the restaurant is live.
    pub fn by_slug(&self, slug: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.slug == slug && r.is_active)
    }

    pub fn by_id(&self, id: &RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == *id)
    }

    pub fn active(&self) -> Vec<&Restaurant> {
        self.restaurants.iter().filter(|r| r.is_active).collect()
    }

    pub fn all(&self) -> &[Restaurant] {
        &self.restaurants
    }
}
