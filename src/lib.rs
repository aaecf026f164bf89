pub use self::color_ops::parse_color;
pub use self::error::{Error, Result};
pub use self::swapper::engine::swap_color;

use clap::Parser;
use image::Rgba;
use wild::ArgsOs;

use swapper::ColorSwapper;

mod arg_validators;
pub mod color_ops;
mod error;
pub mod swapper;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Input image files or glob patterns
    #[arg(required(true))]
    files: Vec<String>,
    /// Color to replace, as "rgba(r,g,b,a)" or #RRGGBB
    #[arg(short('c'), long, value_parser = arg_validators::validate_color)]
    input_color: Rgba<u8>,
    /// Replacement color, as "rgba(r,g,b,a)" or #RRGGBB
    #[arg(short('o'), long, value_parser = arg_validators::validate_color)]
    output_color: Rgba<u8>,
    /// Color match tolerance (0 = exact match only, 1 = match everything)
    #[arg(short('t'), long, default_value_t = 0.1, value_parser = arg_validators::validate_tolerance)]
    tolerance: f32,
    /// Keep the relative shading of matched pixels
    #[arg(short('p'), long, default_value_t = false)]
    preserve_shades: bool,
    /// Output filename suffix
    #[arg(short('s'), long, default_value = "swapped")]
    suffix: String,
    /// Output image pixel density in inches
    #[arg(short('d'), long, default_value_t = 150)]
    dpi: u32,
    /// Verbose messages
    #[arg(short('v'), long, default_value_t = false)]
    verbose: bool,
}

pub fn run(args: ArgsOs) -> Result<()> {
    let args = Args::parse_from(args);
    for file_pattern in &args.files {
        for file_glob_result in glob::glob(file_pattern)? {
            let file = file_glob_result?;
            let color_swapper = ColorSwapper::new(file, &args);
            color_swapper.process()?;
        }
    }
    Ok(())
}
