//! Beer Entities
//!
//! Catalog items as the frontend renders them, already decorated with
//! cosmetic fields.

use serde::{Deserialize, Serialize};

/// Brewer reference attached to a beer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brewer {
    pub id: String,
    pub name: String,
}

/// A catalog beer. `id` is the only equality key that matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub id: String,
    pub name: String,
    pub style: Option<String>,
    pub description: Option<String>,
    /// Alcohol by volume, percent
    pub abv: Option<f64>,
    /// Bitterness
    pub ibu: Option<f64>,
    /// Color
    pub ebc: Option<f64>,
    pub tagline: Option<String>,
    pub image_url: Option<String>,
    pub brewer: Option<Brewer>,
}

impl Beer {
    /// Placeholder shown in place of a list that failed to load
    pub fn error_placeholder() -> Self {
        Self {
            id: "error-1".to_string(),
            name: "Error Loading Beers".to_string(),
            style: Some("Unknown".to_string()),
            description: None,
            abv: Some(0.0),
            ibu: Some(0.0),
            ebc: Some(0.0),
            tagline: Some("Please check console for details".to_string()),
            image_url: None,
            brewer: None,
        }
    }
}

/// A beer with the fields only the single-item endpoint returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerDetail {
    #[serde(flatten)]
    pub beer: Beer,
    pub first_brewed: Option<String>,
    pub food_pairing: Option<Vec<String>>,
    pub contributed_by: Option<String>,
}

impl BeerDetail {
    pub fn id(&self) -> &str {
        &self.beer.id
    }
}

/// One page of the catalog listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BeerPage {
    pub beers: Vec<Beer>,
    /// Continuation token; always `None` once `has_more` is false
    pub cursor: Option<String>,
    pub has_more: bool,
}

impl BeerPage {
    /// Single placeholder item, nothing further to load
    pub fn error_page() -> Self {
        Self {
            beers: vec![Beer::error_placeholder()],
            cursor: None,
            has_more: false,
        }
    }
}
