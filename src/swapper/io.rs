use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::path::PathBuf;

use image::DynamicImage;
use image::ImageBuffer;
use image::Rgba;

use crate::Result;

/// Pixel density in inches
#[derive(Debug)]
pub struct Dpi {
    pub(crate) x: u32,
    pub(crate) y: u32,
}

impl Dpi {
    /// Create instance from single value in inches
    pub fn new<T: Copy + Into<u32>>(v: T) -> Dpi {
        Dpi {
            x: v.into(),
            y: v.into(),
        }
    }

    /// Horizontal resolution in meters
    pub fn x_in_meters(&self) -> u32 {
        // 1 inch = 39.37 cm
        (self.x as f32 * 39.37) as u32
    }
    /// Vertical resolution in meters
    pub fn y_in_meters(&self) -> u32 {
        // 1 inch = 39.37 cm
        (self.y as f32 * 39.37) as u32
    }
}

impl From<&Dpi> for png::PixelDimensions {
    fn from(dpi: &Dpi) -> Self {
        // https://www.w3.org/TR/2003/REC-PNG-20031110/#11pHYs
        png::PixelDimensions {
            xppu: dpi.x_in_meters(),
            yppu: dpi.y_in_meters(),
            unit: png::Unit::Meter,
        }
    }
}

/// Open and decode an image file, guessing the format from its content
pub(crate) fn open_image(file: &Path) -> Result<DynamicImage> {
    let image = image::ImageReader::open(file)?
        .with_guessed_format()?
        .decode()?;
    Ok(image)
}

/// Helper to avoid having to specify common information for saving images over and over again
pub struct ImageSaver {
    base_path: PathBuf,
    dpi: Dpi,
}

impl ImageSaver {
    /// Construct a new ImageSaver with the specified base path and DPI
    pub fn new(base_path: &Path, dpi: Dpi) -> Self {
        Self {
            base_path: base_path.to_owned(),
            dpi,
        }
    }

    /// Save RGBA image to PNG file with suffix appended before extension (includes pixel density header)
    pub fn save_rgba_image_as(
        &self,
        img: &ImageBuffer<Rgba<u8>, Vec<u8>>,
        suffix: &str,
    ) -> Result<()> {
        let filename = self.compute_path(suffix);
        let file = File::create(&filename)?;
        let mut encoder = png::Encoder::new(BufWriter::new(file), img.width(), img.height());

        // Set image metadata
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some((&self.dpi).into()));

        encoder
            .write_header()?
            .write_image_data(img.as_raw())?;

        println!("{}: saved", filename.display());
        Ok(())
    }

    /// Compute full file path from base path and suffix
    pub fn compute_path(&self, suffix: &str) -> PathBuf {
        format!("{}-{suffix}.png", self.base_path.display()).into()
    }
}
