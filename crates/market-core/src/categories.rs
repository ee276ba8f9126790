//! Listing categories offered by the category dropdown.

pub const CATEGORIES: &[&str] = &[
    "SaaS",
    "E-commerce",
    "FinTech",
    "HealthTech",
    "EdTech",
    "AI & Machine Learning",
    "Marketplace",
    "Consumer Apps",
    "B2B Services",
    "Sustainability",
    "Media & Entertainment",
    "Other",
];

/// Accent colours cycled across grid cards.
pub const CARD_ACCENTS: &[&str] = &[
    "accent-blue",
    "accent-green",
    "accent-purple",
    "accent-yellow",
    "accent-pink",
    "accent-indigo",
];

pub fn card_accent(index: usize) -> &'static str {
    CARD_ACCENTS[index % CARD_ACCENTS.len()]
}
