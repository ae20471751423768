use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Contents.json file not found in {}", .0.display())]
    ManifestMissing(PathBuf),
    #[error("no entry with size=1024x1024 found in {}", .0.display())]
    NoMasterEntry(PathBuf),
    #[error("entry with size=1024x1024 in {} does not contain a filename", .0.display())]
    MissingFilename(PathBuf),
    #[error("original 1024x1024 icon file not found: {}", .0.display())]
    SourceFileMissing(PathBuf),
    #[error("failed to resize {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
