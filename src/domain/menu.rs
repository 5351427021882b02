use crate::domain::ids::{DishId, RestaurantId};

/// A dish as shown on a restaurant's menu. `price_minor` is in the
/// currency's minor unit (cents).
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub id: DishId,
    pub restaurant_id: RestaurantId,
    pub category: String,
    pub name: String,
    pub price_minor: i64,
    pub rating: f64,
    pub order_count: u32,
    pub is_best_seller: bool,
    pub is_chef_recommend: bool,
    pub is_active: bool,
}

/// Filter parameters for a menu query. All filters are optional and
/// conjunctive; inactive dishes are always excluded.
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub restaurant_id: Option<RestaurantId>,
    pub category: Option<String>,
    pub best_seller_only: bool,
    pub chef_recommend_only: bool,
}

/// The dish list holding a restaurant's menu, with the storefront query on
/// top.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    dishes: Vec<Dish>,
}

impl Menu {
    pub fn new(dishes: Vec<Dish>) -> Menu {
        Menu { dishes }
    }

    pub fn add(&mut self, dish: Dish) {
        self.dishes.push(dish);
    }

    pub fn get(&self, id: &DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == *id)
    }

    /// Overwrites a dish's stored rating, as done after new dish feedback.
    ///
    /// # Returns
    /// `false` if the dish is unknown (and an error is logged).
    pub fn set_rating(&mut self, id: &DishId, rating: f64) -> bool {
        match self.dishes.iter_mut().find(|d| d.id == *id) {
            Some(dish) => {
                dish.rating = rating;
                true
            }
            None => {
                log::error!("Rating update for dish (id: {}) was not possible, because no dish with that id exists.", id);
                false
            }
        }
    }

    /// The storefront menu query: active dishes matching the filter,
    /// ordered best-sellers first, then chef recommendations, then by
    /// order count descending. The triple ordering is stable, so dishes
    /// that tie on all three keys keep their insertion order.
    pub fn query(&self, filter: &MenuFilter) -> Vec<&Dish> {
        let mut dishes: Vec<&Dish> = self
            .dishes
            .iter()
            .filter(|d| d.is_active)
            .filter(|d| filter.restaurant_id.as_ref().is_none_or(|id| d.restaurant_id == *id))
            .filter(|d| filter.category.as_ref().is_none_or(|c| d.category == *c))
            .filter(|d| !filter.best_seller_only || d.is_best_seller)
            .filter(|d| !filter.chef_recommend_only || d.is_chef_recommend)
            .collect();

        dishes.sort_by_key(|d| (!d.is_best_seller, !d.is_chef_recommend, std::cmp::Reverse(d.order_count)));

        dishes
    }
}
