use crate::domain::dish::Dish;
use crate::domain::order::Order;
use crate::infrastructure::memory::MemoryRepository;

/// Process-wide shared state: one in-memory collection per resource.
/// Cloning shares the underlying storage.
#[derive(Clone)]
pub struct AppState {
    pub dishes: MemoryRepository<Dish>,
    pub orders: MemoryRepository<Order>,
}

const DISHES_FIXTURE: &str = include_str!("../data/dishes.json");
const ORDERS_FIXTURE: &str = include_str!("../data/orders.json");

impl AppState {
    /// Empty collections, for tests that want a clean slate.
    pub fn empty() -> Self {
        Self {
            dishes: MemoryRepository::new(),
            orders: MemoryRepository::new(),
        }
    }

    /// Collections seeded from the bundled fixtures, used at boot.
    pub fn seeded() -> Self {
        let dishes: Vec<Dish> =
            serde_json::from_str(DISHES_FIXTURE).expect("dishes fixture must parse");
        let orders: Vec<Order> =
            serde_json::from_str(ORDERS_FIXTURE).expect("orders fixture must parse");
        Self {
            dishes: MemoryRepository::with_entries(dishes),
            orders: MemoryRepository::with_entries(orders),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::Repository;

    #[test]
    fn seeded_state_exposes_the_fixture_collections() {
        let state = AppState::seeded();
        assert!(!state.dishes.all().is_empty());
        assert!(!state.orders.all().is_empty());
    }

    #[test]
    fn fixture_orders_carry_valid_statuses_and_lines() {
        let state = AppState::seeded();
        for order in state.orders.all() {
            assert!(order.status.is_some());
            assert!(!order.dishes.is_empty());
        }
    }
}
