use crate::contents::{load_master_image, Contents, ImageEntry, CONTENTS_JSON};
use crate::scaler::Scaler;
use crate::target::TARGET_IMAGES;
use crate::Result;
use image::imageops::FilterType;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Regenerates the images of a single `.appiconset` directory.
pub struct AppIconSet {
    dir: PathBuf,
    filter: FilterType,
}

impl AppIconSet {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            filter: FilterType::Lanczos3,
        }
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes one image per target, rewrites `Contents.json` and removes
    /// every file the new manifest does not reference.
    ///
    /// Nothing is written if the master image can't be located. A failure
    /// while resizing leaves the already written images in place and the
    /// old manifest untouched.
    pub fn process(&self) -> Result<Contents> {
        let master = load_master_image(&self.dir)?;
        let scaler = Scaler::open(&master.path)?.with_filter(self.filter);

        let mut images = Vec::with_capacity(TARGET_IMAGES.len());
        for spec in &TARGET_IMAGES {
            let filename = if spec.is_master() {
                master.filename.clone()
            } else {
                let filename = spec.filename();
                if filename == master.filename {
                    tracing::warn!(
                        "{} is the master image, not overwriting it with a {} icon",
                        master.path.display(),
                        spec.dimensions()
                    );
                } else {
                    scaler.write(self.dir.join(&filename), spec.dimensions())?;
                }
                filename
            };
            images.push(ImageEntry::new(spec, filename));
        }

        let contents = Contents::new(images);
        contents.write(&self.dir.join(CONTENTS_JSON))?;
        self.remove_orphans(&contents)?;
        tracing::info!("updated {}", self.dir.display());
        Ok(contents)
    }

    fn remove_orphans(&self, contents: &Contents) -> Result<()> {
        let used: HashSet<&str> = contents.filenames().collect();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name == CONTENTS_JSON || used.contains(&*name) {
                continue;
            }
            tracing::debug!("removing {}", entry.path().display());
            std::fs::remove_file(entry.path())?;
        }
        Ok(())
    }
}
