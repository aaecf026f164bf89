use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
    // -- Externals
    #[from]
    Io(std::io::Error),
    #[from]
    Image(image::error::ImageError),
    #[from]
    Png(png::EncodingError),
    #[from]
    GlobPattern(glob::PatternError),
    #[from]
    Glob(glob::GlobError),
}
