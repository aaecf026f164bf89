use image::ImageBuffer;
use image::Rgba;

use crate::color_ops;

/// Produce a new image where every pixel close enough to the target color
/// has its rgb channels replaced with the replacement color
///
/// `tolerance` is a normalized 0-1 threshold on color distance: 0 replaces
/// exact matches only, 1 replaces every pixel. Alpha never participates in
/// matching and is always copied through unchanged. `None` in means `None`
/// out, which is the designed behavior for "nothing loaded yet" rather than
/// an error.
///
/// The source image is never mutated; the result is a freshly allocated
/// image of the same dimensions, so repeated swaps can start over from the
/// same original.
pub fn swap_color(
    source: Option<&ImageBuffer<Rgba<u8>, Vec<u8>>>,
    target_color: Rgba<u8>,
    replacement_color: Rgba<u8>,
    tolerance: f32,
    preserve_shades: bool,
) -> Option<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    let source = source?;
    let target_srgb = color_ops::image_rgba_to_palette_srgb(&target_color);
    let mut output = ImageBuffer::new(source.width(), source.height());
    for (x, y, pixel) in source.enumerate_pixels() {
        let current_srgb = color_ops::image_rgba_to_palette_srgb(pixel);
        let new_pixel = if color_ops::color_distance(&current_srgb, &target_srgb) <= tolerance {
            replace_pixel(pixel, &target_color, &replacement_color, preserve_shades)
        } else {
            *pixel
        };
        output.put_pixel(x, y, new_pixel);
    }
    Some(output)
}

/// Replace the rgb channels of a matched pixel, keeping its alpha
fn replace_pixel(
    pixel: &Rgba<u8>,
    target_color: &Rgba<u8>,
    replacement_color: &Rgba<u8>,
    preserve_shades: bool,
) -> Rgba<u8> {
    if !preserve_shades {
        return Rgba([
            replacement_color[0],
            replacement_color[1],
            replacement_color[2],
            pixel[3],
        ]);
    }
    Rgba([
        scale_channel(replacement_color[0], pixel[0], target_color[0]),
        scale_channel(replacement_color[1], pixel[1], target_color[1]),
        scale_channel(replacement_color[2], pixel[2], target_color[2]),
        pixel[3],
    ])
}

/// Scale a replacement channel by the matched pixel's brightness relative to the target
///
/// A zero target channel forces the ratio to 0 instead of dividing by zero,
/// so that output channel is always 0 even on bright variants of the matched
/// region. Known limitation of the shading model, not a bug.
fn scale_channel(replacement: u8, pixel: u8, target: u8) -> u8 {
    if target == 0 {
        return 0;
    }
    let ratio = pixel as f32 / target as f32;
    (replacement as f32 * ratio).round().clamp(0.0, 255.0) as u8
}
