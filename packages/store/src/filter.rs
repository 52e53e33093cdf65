//! Filter form of the main page.
//!
//! The form keeps the raw text of each input. Price fields are corrected against the
//! fetched [`PriceRange`] once, when the field is committed (change/blur), and again
//! just before submission. Nothing runs on render.

use crate::models::{PriceRange, ServiceFilter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceField {
    Min,
    Max,
}

/// Current contents of the filter inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub title: String,
    pub price_min: String,
    pub price_max: String,
}

impl FilterForm {
    /// Prefill from a previously applied filter.
    pub fn from_filter(filter: &ServiceFilter) -> Self {
        Self {
            title: filter.title.clone().unwrap_or_default(),
            price_min: filter.price_min.map(|p| p.to_string()).unwrap_or_default(),
            price_max: filter.price_max.map(|p| p.to_string()).unwrap_or_default(),
        }
    }

    pub fn price(&self, field: PriceField) -> &str {
        match field {
            PriceField::Min => &self.price_min,
            PriceField::Max => &self.price_max,
        }
    }

    pub fn set_price(&mut self, field: PriceField, value: String) {
        match field {
            PriceField::Min => self.price_min = value,
            PriceField::Max => self.price_max = value,
        }
    }

    /// Pull an out-of-range price back to the nearest bound.
    ///
    /// A minimum below `range.price_min` is raised to it, a maximum above
    /// `range.price_max` is lowered to it. Empty and non-numeric text is left
    /// untouched. Returns whether the field changed.
    pub fn correct(&mut self, field: PriceField, range: &PriceRange) -> bool {
        let Some(entered) = parse_number(self.price(field)) else {
            return false;
        };
        let corrected = match field {
            PriceField::Min if entered < f64::from(range.price_min) => range.price_min,
            PriceField::Max if entered > f64::from(range.price_max) => range.price_max,
            _ => return false,
        };
        tracing::debug!(?field, entered, corrected, "price corrected to range");
        self.set_price(field, corrected.to_string());
        true
    }

    pub fn correct_all(&mut self, range: &PriceRange) {
        self.correct(PriceField::Min, range);
        self.correct(PriceField::Max, range);
    }

    /// Query parameters for the current values.
    ///
    /// Blank title and blank or non-integer prices are left unset.
    pub fn to_filter(&self) -> ServiceFilter {
        let title = self.title.trim();
        ServiceFilter {
            title: (!title.is_empty()).then(|| title.to_string()),
            price_min: self.price_min.trim().parse().ok(),
            price_max: self.price_max.trim().parse().ok(),
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}
