use crate::target::Dimensions;
use crate::{Error, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::path::{Path, PathBuf};

/// Decoded master image, resized once per target.
pub struct Scaler {
    img: DynamicImage,
    path: PathBuf,
    filter: FilterType,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let img = ImageReader::open(&path)?
            .with_guessed_format()?
            .decode()
            .map_err(|source| Error::Image {
                path: path.clone(),
                source,
            })?;
        let (width, height) = img.dimensions();
        if width != height {
            tracing::warn!(
                "{} is {}x{}, generated icons will be cropped",
                path.display(),
                width,
                height
            );
        }
        Ok(Self {
            img,
            path,
            filter: FilterType::Lanczos3,
        })
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Resizes to exactly `dims`, cropping any aspect ratio excess from the
    /// centre, and writes a png to `out`.
    pub fn write<P: AsRef<Path>>(&self, out: P, dims: Dimensions) -> Result<()> {
        let out = out.as_ref();
        tracing::debug!("resizing {} to {} -> {}", self.path.display(), dims, out.display());
        self.img
            .resize_to_fill(dims.width, dims.height, self.filter)
            .save_with_format(out, ImageFormat::Png)
            .map_err(|source| Error::Image {
                path: out.to_path_buf(),
                source,
            })
    }
}
