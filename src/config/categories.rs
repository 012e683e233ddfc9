//! Category list configuration.

/// Default category list: one cohort per birth year, 2011 through 2021.
pub fn default_categories() -> Vec<String> {
    (2011..=2021).map(|year| year.to_string()).collect()
}
