use super::item::ShoppingListItem;
use super::model::ShoppingList;

/// Completion metrics derived from a list's items. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShoppingListStats {
    pub total_items: usize,
    pub completed_items: usize,
    /// Percentage of purchased items with one decimal place, `0.0` for an empty list.
    pub completion_rate: f64,
}

/// Counts all items and the purchased ones. No filtering by category or priority.
pub fn compute_stats(items: &[ShoppingListItem]) -> ShoppingListStats {
    let total_items = items.len();
    let completed_items = items.iter().filter(|item| item.is_purchased()).count();

    ShoppingListStats {
        total_items,
        completed_items,
        completion_rate: completion_rate(completed_items, total_items),
    }
}

/// `completed / total * 100` rounded to one decimal, ties to even.
///
/// Works on the exact ratio in tenths of a percent so that ties such as
/// 1/16 (6.25%) are detected exactly: 6.25 becomes 6.2 and 18.75 becomes 18.8.
pub fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let numerator = completed as u128 * 1000;
    let denominator = total as u128;
    let mut tenths = numerator / denominator;
    let twice_remainder = (numerator % denominator) * 2;

    if twice_remainder > denominator || (twice_remainder == denominator && tenths % 2 == 1) {
        tenths += 1;
    }

    tenths as f64 / 10.0
}

/// A list together with its stats, as shown in overviews.
#[derive(Debug, Clone)]
pub struct ShoppingListSummary {
    pub list: ShoppingList,
    pub stats: ShoppingListStats,
}

impl ShoppingListSummary {
    pub fn new(list: ShoppingList, items: &[ShoppingListItem]) -> Self {
        Self {
            list,
            stats: compute_stats(items),
        }
    }
}

/// A list with its items and stats.
#[derive(Debug, Clone)]
pub struct ShoppingListDetails {
    pub list: ShoppingList,
    pub items: Vec<ShoppingListItem>,
    pub stats: ShoppingListStats,
}

impl ShoppingListDetails {
    pub fn new(list: ShoppingList, items: Vec<ShoppingListItem>) -> Self {
        let stats = compute_stats(&items);
        Self { list, items, stats }
    }
}
