//! Upstream Payloads
//!
//! The parse step between raw JSON and the domain types. The list endpoint
//! answers either with an envelope (`{ data, next_cursor, has_more }`) or with
//! a bare array; both normalize into [`RawPage`], anything else is rejected.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::cosmetics::cosmetics_at;
use crate::domain::{ApiError, Beer, BeerDetail, BeerPage, Brewer};

/// Ids arrive as strings, but tolerate numeric ids
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Clone, Deserialize)]
struct RawBrewer {
    #[serde(deserialize_with = "id_string")]
    id: String,
    name: String,
}

/// A beer exactly as the catalog sends it
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawBeer {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub style: Option<String>,
    pub abv: Option<f64>,
    pub ibu: Option<f64>,
    pub ebc: Option<f64>,
    brewer: Option<RawBrewer>,
    first_brewed: Option<String>,
    food_pairing: Option<Vec<String>>,
    contributed_by: Option<String>,
}

impl RawBeer {
    /// Decorate with the cosmetics of `position`
    pub fn into_beer(self, position: usize) -> Beer {
        self.into_detail(position).beer
    }

    pub fn into_detail(self, position: usize) -> BeerDetail {
        let cosmetics = cosmetics_at(position);
        BeerDetail {
            beer: Beer {
                id: self.id,
                name: self.name,
                style: self.style,
                description: Some(cosmetics.description.to_string()),
                abv: self.abv,
                ibu: self.ibu,
                ebc: self.ebc,
                tagline: Some(cosmetics.tagline.to_string()),
                image_url: Some(cosmetics.image_url.to_string()),
                brewer: self.brewer.map(|b| Brewer { id: b.id, name: b.name }),
            },
            first_brewed: self.first_brewed,
            food_pairing: self.food_pairing,
            contributed_by: self.contributed_by,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload {
    Envelope {
        data: Vec<RawBeer>,
        next_cursor: Option<String>,
        has_more: Option<bool>,
    },
    Bare(Vec<RawBeer>),
}

/// A listing before decoration
#[derive(Debug, Clone)]
pub(crate) struct RawPage {
    pub items: Vec<RawBeer>,
    pub cursor: Option<String>,
    pub has_more: bool,
}

impl RawPage {
    /// Position of `id` in this listing, 0 when absent
    pub fn position_of(&self, id: &str) -> usize {
        self.items.iter().position(|b| b.id == id).unwrap_or(0)
    }

    /// Keep at most `limit` items and decorate them by array position
    pub fn into_page(self, limit: usize) -> BeerPage {
        let beers = self
            .items
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(position, raw)| raw.into_beer(position))
            .collect();

        BeerPage {
            beers,
            cursor: if self.has_more { self.cursor } else { None },
            has_more: self.has_more,
        }
    }
}

pub(crate) fn parse_list(value: Value) -> Result<RawPage, ApiError> {
    let payload: ListPayload = serde_json::from_value(value)
        .map_err(|e| ApiError::Malformed(format!("unexpected list payload: {}", e)))?;

    Ok(match payload {
        ListPayload::Envelope {
            data,
            next_cursor,
            has_more,
        } => RawPage {
            items: data,
            cursor: next_cursor,
            has_more: has_more.unwrap_or(false),
        },
        ListPayload::Bare(items) => RawPage {
            items,
            cursor: None,
            has_more: false,
        },
    })
}

pub(crate) fn parse_detail(value: Value) -> Result<RawBeer, ApiError> {
    Ok(serde_json::from_value(value)?)
}
