//! Client-side Search
//!
//! The catalog has no search endpoint; matching happens on whatever beers
//! are already in hand.

use crate::domain::Beer;

/// Case-insensitive substring match against name, style and tagline.
/// Missing style or tagline simply does not match.
pub fn matches_query(beer: &Beer, query: &str) -> bool {
    let needle = query.to_lowercase();
    let hit = |field: &str| field.to_lowercase().contains(&needle);

    hit(&beer.name)
        || beer.style.as_deref().is_some_and(hit)
        || beer.tagline.as_deref().is_some_and(hit)
}

/// Beers matching `query`, in input order. A blank query keeps everything.
pub fn filter_beers(beers: &[Beer], query: &str) -> Vec<Beer> {
    if query.trim().is_empty() {
        return beers.to_vec();
    }
    beers
        .iter()
        .filter(|beer| matches_query(beer, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer(id: &str, name: &str, style: Option<&str>, tagline: Option<&str>) -> Beer {
        Beer {
            id: id.to_string(),
            name: name.to_string(),
            style: style.map(str::to_string),
            description: None,
            abv: None,
            ibu: None,
            ebc: None,
            tagline: tagline.map(str::to_string),
            image_url: None,
            brewer: None,
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let b = beer("1", "Pale Ale", None, None);
        assert!(matches_query(&b, "PALE"));
        assert!(matches_query(&b, "e a"));
        assert!(!matches_query(&b, "stout"));
    }

    #[test]
    fn test_match_checks_style_and_tagline() {
        let b = beer("1", "Punk", Some("IPA"), Some("Post Modern Classic"));
        assert!(matches_query(&b, "ipa"));
        assert!(matches_query(&b, "modern"));
    }

    #[test]
    fn test_missing_fields_do_not_match() {
        let b = beer("1", "Punk", None, None);
        assert!(!matches_query(&b, "ipa"));
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let beers = vec![beer("1", "A", None, None), beer("2", "B", None, None)];
        assert_eq!(filter_beers(&beers, "   "), beers);
        assert_eq!(filter_beers(&beers, "b").len(), 1);
    }
}
