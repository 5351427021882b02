use chrono::{DateTime, Utc};

use crate::domain::clock::Clock;
use crate::domain::ids::{DishId, FeedbackId, RestaurantId};
use crate::domain::menu::Menu;
use crate::error::{Error, FieldIssue, Result};

/// Listings never return more than this many entries.
const LISTING_CAP: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantFeedback {
    pub id: FeedbackId,
    pub restaurant_id: RestaurantId,
    pub rating: u8,
    pub comment: Option<String>,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DishFeedback {
    pub id: FeedbackId,
    pub dish_id: DishId,
    pub rating: u8,
    pub comment: Option<String>,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Holds all submitted feedback and keeps the derived mean ratings.
/// Verification (matching a feedback email against a booking) never
/// happens on submission; everything enters unverified.
#[derive(Debug, Default)]
pub struct FeedbackBoard {
    restaurant_feedback: Vec<RestaurantFeedback>,
    dish_feedback: Vec<DishFeedback>,
}

impl FeedbackBoard {
    pub fn new() -> FeedbackBoard {
        FeedbackBoard::default()
    }

    /// Records feedback for a restaurant.
    ///
    /// # Returns
    /// The stored feedback together with the restaurant's recomputed mean
    /// rating over all of its feedback.
    pub fn submit_for_restaurant(
        &mut self,
        restaurant_id: &RestaurantId,
        rating: u8,
        comment: Option<String>,
        customer_name: &str,
        customer_email: Option<String>,
        clock: &dyn Clock,
    ) -> Result<(RestaurantFeedback, f64)> {
        check_submission(rating, customer_name)?;

        let feedback = RestaurantFeedback {
            id: FeedbackId::fresh(),
            restaurant_id: restaurant_id.clone(),
            rating,
            comment,
            customer_name: customer_name.to_string(),
            customer_email,
            is_verified: false,
            created_at: clock.now(),
        };

        self.restaurant_feedback.push(feedback.clone());

        let average = mean(self.restaurant_feedback.iter().filter(|f| f.restaurant_id == *restaurant_id).map(|f| f.rating));

        Ok((feedback, average))
    }

    /// Records feedback for a dish and writes the recomputed mean back
    /// into the menu's stored dish rating.
    pub fn submit_for_dish(
        &mut self,
        menu: &mut Menu,
        dish_id: &DishId,
        rating: u8,
        comment: Option<String>,
        customer_name: &str,
        customer_email: Option<String>,
        clock: &dyn Clock,
    ) -> Result<(DishFeedback, f64)> {
        check_submission(rating, customer_name)?;

        let feedback = DishFeedback {
            id: FeedbackId::fresh(),
            dish_id: dish_id.clone(),
            rating,
            comment,
            customer_name: customer_name.to_string(),
            customer_email,
            is_verified: false,
            created_at: clock.now(),
        };

        self.dish_feedback.push(feedback.clone());

        let average = mean(self.dish_feedback.iter().filter(|f| f.dish_id == *dish_id).map(|f| f.rating));
        menu.set_rating(dish_id, average);

        Ok((feedback, average))
    }

    /// Feedback for one restaurant, newest first, capped at 50 entries.
    pub fn for_restaurant(&self, restaurant_id: &RestaurantId) -> Vec<&RestaurantFeedback> {
        let mut entries: Vec<&RestaurantFeedback> = self.restaurant_feedback.iter().filter(|f| f.restaurant_id == *restaurant_id).collect();

        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(LISTING_CAP);

        entries
    }

    /// Feedback for one dish, newest first, capped at 50 entries.
    pub fn for_dish(&self, dish_id: &DishId) -> Vec<&DishFeedback> {
        let mut entries: Vec<&DishFeedback> = self.dish_feedback.iter().filter(|f| f.dish_id == *dish_id).collect();

        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(LISTING_CAP);

        entries
    }
}

fn check_submission(rating: u8, customer_name: &str) -> Result<()> {
    let mut issues = Vec::new();

    if !(1..=5).contains(&rating) {
        issues.push(FieldIssue::new("rating", "Rating must be between 1 and 5"));
    }

    if customer_name.trim().is_empty() {
        issues.push(FieldIssue::new("customerName", "Missing required fields"));
    }

    if issues.is_empty() { Ok(()) } else { Err(Error::Validation(issues)) }
}

fn mean(ratings: impl Iterator<Item = u8>) -> f64 {
    let mut sum: u64 = 0;
    let mut count: u64 = 0;

    for rating in ratings {
        sum += rating as u64;
        count += 1;
    }

    if count == 0 { 0.0 } else { sum as f64 / count as f64 }
}
