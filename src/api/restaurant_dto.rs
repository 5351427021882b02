use serde::{Deserialize, Serialize};

use crate::domain::restaurant::RestaurantVibe;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VibeDto {
    Luxury,
    Romantic,
    Party,
    Calm,
    Artistic,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TableDto {
    pub id: Option<String>,
    pub table_number: String,
    pub capacity: u32,
    pub location: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub vibe: VibeDto,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub address: String,
    pub city: String,
    pub is_active: bool,
    pub tables: Vec<TableDto>,

    // Slot policy. Absent fields fall back to the platform defaults
    // (hours 12-23, capacity 50).
    pub opening_hour: Option<u8>,
    pub closing_hour: Option<u8>,
    pub total_capacity: Option<u32>,
}

impl From<VibeDto> for RestaurantVibe {
    fn from(dto: VibeDto) -> Self {
        match dto {
            VibeDto::Luxury => RestaurantVibe::Luxury,
            VibeDto::Romantic => RestaurantVibe::Romantic,
            VibeDto::Party => RestaurantVibe::Party,
            VibeDto::Calm => RestaurantVibe::Calm,
            VibeDto::Artistic => RestaurantVibe::Artistic,
        }
    }
}

impl From<RestaurantVibe> for VibeDto {
    fn from(vibe: RestaurantVibe) -> Self {
        match vibe {
            RestaurantVibe::Luxury => VibeDto::Luxury,
            RestaurantVibe::Romantic => VibeDto::Romantic,
            RestaurantVibe::Party => VibeDto::Party,
            RestaurantVibe::Calm => VibeDto::Calm,
            RestaurantVibe::Artistic => VibeDto::Artistic,
        }
    }
}
