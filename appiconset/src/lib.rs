//! Regenerates the images of ios `.appiconset` directories from the single
//! 1024x1024 image their `Contents.json` names.

mod contents;
mod discover;
mod error;
mod process;
mod scaler;
mod target;

pub use contents::{
    has_master_entry, load_master_image, Contents, ImageEntry, Info, MasterImage, CONTENTS_JSON,
};
pub use discover::{find_appiconsets, is_appiconset, is_xcassets, APPICONSET_EXT, XCASSETS_EXT};
pub use error::{Error, Result};
pub use image::imageops::FilterType;
pub use process::AppIconSet;
pub use scaler::Scaler;
pub use target::{Dimensions, TargetSpec, MASTER_SIZE, TARGET_IMAGES};
