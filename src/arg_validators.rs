use color::{AlphaColor, ParseError};
use image::Rgba;

use crate::color_ops;

pub(crate) fn validate_tolerance(value: &str) -> Result<f32, String> {
    let num = value
        .parse::<f32>()
        .map_err(|_| "Not a valid floating point number".to_string())?;
    if !(0.0..=1.0).contains(&num) {
        return Err("Number must be between 0 and 1".to_string());
    }
    Ok(num)
}

/// Accept either a #RRGGBB-style color or the loose rgba(r,g,b,a) notation
///
/// The loose notation never fails (missing numbers default to 0), so only
/// hex strings can reject here.
pub(crate) fn validate_color(value: &str) -> Result<Rgba<u8>, String> {
    if value.starts_with('#') {
        return parse_hex_color(value).map_err(|e| e.to_string());
    }
    Ok(color_ops::parse_color(value))
}

/// Parse a string into a color, with format like this #RRGGBB
fn parse_hex_color(value: &str) -> Result<Rgba<u8>, ParseError> {
    let parsed = color::parse_color(value)?;
    let parsed: AlphaColor<color::Srgb> = parsed.to_alpha_color();
    Ok(Rgba(parsed.to_rgba8().to_u8_array()))
}
