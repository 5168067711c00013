//! Static page copy.

/// Text for the fixed sections of the storefront page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePage {
    pub store_name: String,
    pub tagline: String,
    pub arrivals_heading: String,
    pub about: String,
    pub social: String,
}

impl StorePage {
    /// Page copy for a store called `store_name`.
    pub fn new(store_name: impl Into<String>, tagline: impl Into<String>) -> Self {
        let store_name = store_name.into();
        Self {
            about: format!(
                "{store_name} brings bold western flair to modern fashion. We carry a curated \
                 selection of quality pieces, from everyday ranch wear to night-out sparkle."
            ),
            social: format!(
                "@{} on Instagram, Facebook, and TikTok",
                store_name.split_whitespace().collect::<String>()
            ),
            arrivals_heading: "New Arrivals".to_string(),
            tagline: tagline.into(),
            store_name,
        }
    }

    /// Footer line for the given year.
    pub fn footer(&self, year: i32) -> String {
        format!("\u{00a9} {year} {}. All rights reserved.", self.store_name)
    }

    /// Header badge text for a cart with `count` entries.
    pub fn cart_badge(&self, count: usize) -> String {
        format!("\u{1f6d2} {count}")
    }
}
