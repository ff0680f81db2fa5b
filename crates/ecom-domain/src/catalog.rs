//! Catalog field rules.

use rust_decimal::Decimal;

/// Image extensions accepted for billboard and product images.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "avif", "gif"];

/// Maximum fractional digits of a price.
pub const PRICE_SCALE: u32 = 2;

/// True when the URL path ends in a known image extension (case-insensitive).
/// Query strings and fragments are ignored.
pub fn is_image_url(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    path.rsplit_once('.')
        .map(|(stem, ext)| {
            !stem.is_empty()
                && IMAGE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// `#` followed by 3 or 6 hex digits.
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Positive with at most two decimal places.
pub fn is_valid_price(price: Decimal) -> bool {
    price > Decimal::ZERO && price.normalize().scale() <= PRICE_SCALE
}

/// Pad a validated price to exactly two decimal places (`12.5` becomes `12.50`).
pub fn to_price_scale(price: Decimal) -> Decimal {
    let mut scaled = price;
    scaled.rescale(PRICE_SCALE);
    scaled
}
