//! Keyword rules mapping note descriptions to categories and display glyphs.
//!
//! No NLU here: an ordered substring scan covers the fixed vocabulary, and
//! declaration order is priority order, so earlier keywords win on
//! multi-keyword descriptions.

/// One keyword rule: a lower-case keyword and the category it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub keyword: &'static str,
    pub category: &'static str,
    pub emoji: &'static str,
}

/// Fallback for descriptions no rule matches.
pub const DEFAULT_CATEGORY: CategoryRule = CategoryRule {
    keyword: "",
    category: "Other",
    emoji: "💸",
};

/// The classification table, scanned top to bottom.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    // Food & Dining
    CategoryRule { keyword: "pizza", category: "Food", emoji: "🍕" },
    CategoryRule { keyword: "food", category: "Food", emoji: "🍽️" },
    CategoryRule { keyword: "restaurant", category: "Food", emoji: "🍽️" },
    CategoryRule { keyword: "coffee", category: "Food", emoji: "☕" },
    CategoryRule { keyword: "lunch", category: "Food", emoji: "🥪" },
    CategoryRule { keyword: "dinner", category: "Food", emoji: "🍽️" },
    // Income
    CategoryRule { keyword: "salary", category: "Salary", emoji: "💰" },
    CategoryRule { keyword: "freelance", category: "Freelance", emoji: "💻" },
    CategoryRule { keyword: "bonus", category: "Bonus", emoji: "🎉" },
    // Transportation
    CategoryRule { keyword: "uber", category: "Transport", emoji: "🚗" },
    CategoryRule { keyword: "gas", category: "Transport", emoji: "⛽" },
    CategoryRule { keyword: "taxi", category: "Transport", emoji: "🚕" },
    // Shopping
    CategoryRule { keyword: "shopping", category: "Shopping", emoji: "🛍️" },
    CategoryRule { keyword: "clothes", category: "Shopping", emoji: "👕" },
    // Entertainment
    CategoryRule { keyword: "movie", category: "Entertainment", emoji: "🎬" },
    CategoryRule { keyword: "netflix", category: "Entertainment", emoji: "📺" },
];

/// Classify a cleaned description.
///
/// Case-insensitive substring containment, not whole-word matching: "salary
/// advance" matches the `salary` rule. Returns [`DEFAULT_CATEGORY`] when
/// nothing matches.
pub fn classify(description: &str) -> &'static CategoryRule {
    let lower = description.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| lower.contains(rule.keyword))
        .unwrap_or(&DEFAULT_CATEGORY)
}
