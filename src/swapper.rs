use std::path::PathBuf;

use image::Rgba;

use crate::{Args, Result};

use self::io::{Dpi, ImageSaver};

pub mod engine;
mod io;

/// Runs the swap pipeline for a single input file: decode, recolor, encode
pub struct ColorSwapper {
    file: PathBuf,
    base_path: PathBuf,
    input_color: Rgba<u8>,
    output_color: Rgba<u8>,
    tolerance: f32,
    preserve_shades: bool,
    suffix: String,
    dpi: u32,
    pub verbose: bool,
}

impl ColorSwapper {
    pub fn new(file: PathBuf, args: &Args) -> Self {
        let base_path = file.parent().unwrap().join(file.file_stem().unwrap());
        Self {
            file,
            base_path,
            input_color: args.input_color,
            output_color: args.output_color,
            tolerance: args.tolerance,
            preserve_shades: args.preserve_shades,
            suffix: args.suffix.to_owned(),
            dpi: args.dpi,
            verbose: args.verbose,
        }
    }

    pub fn process(self) -> Result<()> {
        let image = io::open_image(&self.file)?;
        println!("{}: {}x{}", self.file.display(), image.width(), image.height());
        if self.verbose {
            println!(
                "{}: replacing {:?} with {:?} (tolerance {}, preserve shades {})",
                self.file.display(),
                self.input_color,
                self.output_color,
                self.tolerance,
                self.preserve_shades,
            );
        }

        let image_rgba = image.to_rgba8();
        let swapped = engine::swap_color(
            Some(&image_rgba),
            self.input_color,
            self.output_color,
            self.tolerance,
            self.preserve_shades,
        );
        // A decoded image always yields a buffer
        let Some(swapped) = swapped else {
            return Ok(());
        };

        let saver = ImageSaver::new(&self.base_path, Dpi::new(self.dpi));
        saver.save_rgba_image_as(&swapped, &self.suffix)?;
        Ok(())
    }
}
