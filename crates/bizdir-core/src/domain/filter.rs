//! List filters for business records

use serde::Deserialize;

use super::Business;

/// Optional filters applied to a business listing. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessFilter {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// Case-insensitive exact city
    pub city: Option<String>,
    pub min_star_rating: Option<f64>,
    pub naics_code: Option<String>,
    pub year_started: Option<i32>,
}

impl BusinessFilter {
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty)
            && self.city.as_deref().map_or(true, str::is_empty)
            && self.min_star_rating.is_none()
            && self.naics_code.as_deref().map_or(true, str::is_empty)
            && self.year_started.is_none()
    }

    pub fn matches(&self, business: &Business) -> bool {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            if !business.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        if let Some(city) = self.city.as_deref().filter(|c| !c.is_empty()) {
            if !business.city.eq_ignore_ascii_case(city) {
                return false;
            }
        }

        if let Some(min) = self.min_star_rating {
            match business.star_rating {
                Some(rating) if rating >= min => {}
                _ => return false,
            }
        }

        if let Some(code) = self.naics_code.as_deref().filter(|c| !c.is_empty()) {
            if business.naics_code.as_deref() != Some(code) {
                return false;
            }
        }

        if let Some(year) = self.year_started {
            if business.year_started != Some(year) {
                return false;
            }
        }

        true
    }
}
