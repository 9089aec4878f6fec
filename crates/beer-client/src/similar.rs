//! Similar Beers
//!
//! Picks "you might also like" candidates out of an already loaded pool.

use std::collections::HashSet;

use crate::domain::Beer;

/// How many similar beers the detail view shows
pub const SIMILAR_LIMIT: usize = 3;

/// Up to `max` beers from `pool` for `target`.
///
/// Same-style beers come first in pool order, then any other beers backfill
/// the remaining slots. The target itself and repeated ids are skipped.
/// A target without a style gets no suggestions.
pub fn select_similar(target: &Beer, pool: &[Beer], max: usize) -> Vec<Beer> {
    let Some(style) = target.style.as_deref() else {
        return Vec::new();
    };

    let mut seen: HashSet<&str> = HashSet::from([target.id.as_str()]);
    let mut picks = Vec::with_capacity(max);

    let same_style = pool.iter().filter(|b| b.style.as_deref() == Some(style));
    for beer in same_style.chain(pool.iter()) {
        if picks.len() >= max {
            break;
        }
        if seen.insert(beer.id.as_str()) {
            picks.push(beer.clone());
        }
    }

    picks
}
