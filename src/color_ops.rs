use image::Rgba;
use palette::Srgb;

/// Parse a loose rgba()-style string into a color, like "rgba(12, 34, 56, 0.5)"
///
/// The first four numbers found in the string are taken as red, green and
/// blue (integers 0-255) and alpha (a real number 0-1). Alpha is scaled to
/// a 0-255 channel value. Missing numbers default to 0, so malformed input
/// degrades to fully transparent black instead of failing.
///
/// All channel values are rounded half away from zero and clamped to 0-255.
pub fn parse_color(text: &str) -> Rgba<u8> {
    let mut numbers = extract_numbers(text).into_iter();
    let red = channel_value(numbers.next().unwrap_or(0.0));
    let green = channel_value(numbers.next().unwrap_or(0.0));
    let blue = channel_value(numbers.next().unwrap_or(0.0));
    let alpha = channel_value(numbers.next().unwrap_or(0.0) * 255.0);
    Rgba([red, green, blue, alpha])
}

/// Extract maximal digit runs from a string, in left-to-right order
///
/// A run may contain a single decimal point after at least one digit, so
/// "rgba(1, 2.5, 3, 0.25)" yields [1.0, 2.5, 3.0, 0.25]. Runs that do not
/// parse as a number are skipped.
fn extract_numbers(text: &str) -> Vec<f32> {
    let mut numbers = Vec::new();
    let mut run = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() || (c == '.' && !run.is_empty() && !run.contains('.')) {
            run.push(c);
            continue;
        }
        if !run.is_empty() {
            if let Ok(number) = run.parse::<f32>() {
                numbers.push(number);
            }
            run.clear();
        }
    }
    if !run.is_empty()
        && let Ok(number) = run.parse::<f32>()
    {
        numbers.push(number);
    }
    numbers
}

/// Round and saturate a channel value to 8-bit storage
fn channel_value(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Figure out how far apart two colors are based on euclidean distance in the RGB unit cube
///
/// The distance is normalized to 0-1 (the cube diagonal is sqrt(3)), so a
/// tolerance value is comparable no matter which channels differ. Black vs
/// white is exactly 1.0.
pub fn color_distance(a: &Srgb<f32>, b: &Srgb<f32>) -> f32 {
    let dr = a.red - b.red;
    let dg = a.green - b.green;
    let db = a.blue - b.blue;
    ((dr * dr + dg * dg + db * db) / 3.0).sqrt()
}

/// Convert from image::Rgba color to palette::Srgb color
pub(crate) fn image_rgba_to_palette_srgb(color: &Rgba<u8>) -> Srgb<f32> {
    Srgb::new(
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
    )
}
