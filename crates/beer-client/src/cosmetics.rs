//! Cosmetic Lookup Table
//!
//! Placeholder descriptions, taglines and images. The upstream catalog has
//! none of these, so every fetched beer borrows them by its position in the
//! response array. The same beer can get different cosmetics on different
//! pages; callers only ever go through [`cosmetics_at`].

const DESCRIPTIONS: &[&str] = &[
    "A crisp, golden brew with a clean malt backbone and a gentle floral hop finish.",
    "Deep and roasty, with notes of dark chocolate, coffee and a hint of smoke.",
    "Bright citrus and tropical fruit aromas over a light, biscuity body.",
    "Rich caramel sweetness balanced by earthy hops and a dry, lingering finish.",
    "Hazy and soft, bursting with juicy stone fruit and a pillowy mouthfeel.",
];

const TAGLINES: &[&str] = &[
    "A Real Bitter Experience.",
    "Spiking the Punch Since Forever.",
    "Brewed for the Long Evenings.",
    "Hops, Sunshine and Nothing Else.",
    "Dark, Bold and Unapologetic.",
    "Small Batch, Big Flavour.",
];

const IMAGES: &[&str] = &[
    "/images/beer-placeholder-1.svg",
    "/images/beer-placeholder-2.svg",
    "/images/beer-placeholder-3.svg",
    "/images/beer-placeholder-4.svg",
    "/images/beer-placeholder-5.svg",
];

/// Presentation fields chosen for one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cosmetics {
    pub description: &'static str,
    pub tagline: &'static str,
    pub image_url: &'static str,
}

/// Cosmetics for the item at `position` of a response array.
/// Each list wraps around independently.
pub fn cosmetics_at(position: usize) -> Cosmetics {
    Cosmetics {
        description: DESCRIPTIONS[position % DESCRIPTIONS.len()],
        tagline: TAGLINES[position % TAGLINES.len()],
        image_url: IMAGES[position % IMAGES.len()],
    }
}

/// Images the detail view may fall back to when a beer has none
pub fn placeholder_images() -> &'static [&'static str] {
    IMAGES
}
