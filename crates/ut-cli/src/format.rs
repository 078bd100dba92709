//! Number and banner formatting helpers for the report.

/// Scientific notation with `precision` decimals and a signed, at least
/// two-digit exponent: `1.38e+10`, `3.17e-11`.
pub fn sci(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        // inf / NaN carry no exponent
        return raw;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// Inner width of the report banners, in characters.
pub const BANNER_WIDTH: usize = 64;

pub fn banner_top() -> String {
    format!("╔{}╗", "═".repeat(BANNER_WIDTH))
}

pub fn banner_bottom() -> String {
    format!("╚{}╝", "═".repeat(BANNER_WIDTH))
}

/// A banner row with `text` centered between the box edges.
pub fn banner_line(text: &str) -> String {
    let len = text.chars().count().min(BANNER_WIDTH);
    let left = (BANNER_WIDTH - len) / 2;
    let right = BANNER_WIDTH - len - left;
    format!("║{}{text}{}║", " ".repeat(left), " ".repeat(right))
}
