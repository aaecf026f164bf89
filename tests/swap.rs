use color_switcher::{parse_color, swap_color};
use image::{ImageBuffer, Rgba};

/// Horizontal gradient of the base color scaled from black to full brightness
fn gradient_image(width: u32, base: Rgba<u8>) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    ImageBuffer::from_fn(width, 1, |x, _y| {
        let scale = x as f32 / (width - 1) as f32;
        Rgba([
            (base[0] as f32 * scale).round() as u8,
            (base[1] as f32 * scale).round() as u8,
            (base[2] as f32 * scale).round() as u8,
            255,
        ])
    })
}

#[test]
fn parsed_colors_drive_a_full_swap() {
    let target = parse_color("rgba(100, 100, 100, 1)");
    let replacement = parse_color("rgba(200, 0, 0, 1)");
    assert_eq!(target, Rgba([100, 100, 100, 255]));
    assert_eq!(replacement, Rgba([200, 0, 0, 255]));

    let source = gradient_image(5, Rgba([100, 100, 100, 255]));
    let output = swap_color(Some(&source), target, replacement, 1.0, true).unwrap();

    assert_eq!(output.dimensions(), source.dimensions());
    // Every gray level maps to the replacement hue scaled by its brightness
    for (x, _y, pixel) in output.enumerate_pixels() {
        let original = source.get_pixel(x, 0);
        let expected = (200.0 * (original[0] as f32 / 100.0)).round().min(255.0) as u8;
        assert_eq!(*pixel, Rgba([expected, 0, 0, 255]));
    }
    // And the original is still intact for another attempt
    assert_eq!(*source.get_pixel(4, 0), Rgba([100, 100, 100, 255]));
}

#[test]
fn tolerance_splits_a_two_color_image() {
    let mut source = ImageBuffer::from_pixel(4, 2, Rgba([30, 90, 60, 255]));
    source.put_pixel(3, 1, Rgba([240, 240, 240, 255]));

    let output = swap_color(
        Some(&source),
        Rgba([30, 90, 60, 255]),
        Rgba([10, 10, 200, 255]),
        0.05,
        false,
    )
    .unwrap();

    assert_eq!(*output.get_pixel(0, 0), Rgba([10, 10, 200, 255]));
    assert_eq!(*output.get_pixel(3, 1), Rgba([240, 240, 240, 255]));
}
