//! Managed image directory.
//!
//! Uploaded images are copied into a single folder before their path is
//! persisted. Files are named after the uploaded file and an import with the
//! same name replaces the previous copy. Nothing here ever deletes a file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// File extensions accepted for participant images (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// What a stored image path points at when it is read back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStatus {
    /// The record has no image
    NotSelected,
    /// The record references a file that is no longer on disk
    Missing(PathBuf),
    /// The managed copy exists
    Available(PathBuf),
}

impl ImageStatus {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ImageStatus::Available(p) => Some(p),
            _ => None,
        }
    }

    /// Short label for display next to the form
    pub fn label(&self) -> String {
        match self {
            ImageStatus::NotSelected => "No image selected".to_string(),
            ImageStatus::Missing(_) => "Image not found".to_string(),
            ImageStatus::Available(p) => p.display().to_string(),
        }
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the managed directory if it does not exist yet
    pub fn ensure_dir(&self) -> AppResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::StorageFailure(format!(
                "Failed to create image directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        debug!(path = %self.dir.display(), "image directory ready");
        Ok(())
    }

    /// Copy `source` into the managed directory and return the managed path
    ///
    /// An existing file with the same name is overwritten.
    pub fn import(&self, source: &Path) -> AppResult<PathBuf> {
        if !is_supported_image(source) {
            return Err(AppError::UnsupportedImage(source.display().to_string()));
        }

        let file_name = source.file_name().ok_or_else(|| {
            AppError::ImageCopyFailure(format!("{} has no file name", source.display()))
        })?;
        // Stored paths are text, so a name that is not UTF-8 could never be read back.
        if file_name.to_str().is_none() {
            return Err(AppError::ImageCopyFailure(format!(
                "{} has a file name that is not valid UTF-8",
                source.display()
            )));
        }

        self.ensure_dir()?;
        let destination = self.dir.join(file_name);

        // Copying a file onto itself would truncate it.
        if Self::same_file(source, &destination) {
            debug!(path = %destination.display(), "image already in managed directory");
            return Ok(destination);
        }

        fs::copy(source, &destination).map_err(|e| {
            AppError::ImageCopyFailure(format!(
                "{} -> {}: {}",
                source.display(),
                destination.display(),
                e
            ))
        })?;

        info!(
            source = %source.display(),
            path = %destination.display(),
            "image imported"
        );
        Ok(destination)
    }

    /// Check that an already stored image path lies in the managed directory
    ///
    /// The file itself may have gone missing; only its location and extension
    /// are checked.
    pub fn verify_managed(&self, image_path: &str) -> AppResult<PathBuf> {
        let path = PathBuf::from(image_path);
        if !is_supported_image(&path) {
            return Err(AppError::UnsupportedImage(image_path.to_string()));
        }

        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let inside = match (fs::canonicalize(parent), fs::canonicalize(&self.dir)) {
            (Ok(parent), Ok(dir)) => parent == dir,
            _ => false,
        };
        if !inside {
            return Err(AppError::ImageCopyFailure(format!(
                "{} is outside the managed image directory {}",
                image_path,
                self.dir.display()
            )));
        }

        Ok(path)
    }

    /// Resolve a stored image path, treating a missing file as "no image"
    pub fn resolve(&self, image_path: Option<&str>) -> ImageStatus {
        match image_path.map(str::trim).filter(|p| !p.is_empty()) {
            None => ImageStatus::NotSelected,
            Some(p) => {
                let path = PathBuf::from(p);
                if path.is_file() {
                    ImageStatus::Available(path)
                } else {
                    warn!(path = %path.display(), "stored image is missing");
                    ImageStatus::Missing(path)
                }
            }
        }
    }

    fn same_file(a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image(Path::new("photo.jpg")));
        assert!(is_supported_image(Path::new("photo.JPEG")));
        assert!(is_supported_image(Path::new("/tmp/a/b.Png")));
        assert!(is_supported_image(Path::new("anim.gif")));
        assert!(!is_supported_image(Path::new("doc.pdf")));
        assert!(!is_supported_image(Path::new("noext")));
        assert!(!is_supported_image(Path::new("image.bmp")));
    }

    #[test]
    fn test_ensure_dir_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(tmp.path().join("a").join("images"));
        store.ensure_dir().unwrap();
        assert!(store.dir().is_dir());
        // Idempotent
        store.ensure_dir().unwrap();
    }

    #[test]
    fn test_import_copies_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let uploads = tmp.path().join("uploads");
        fs::create_dir_all(&uploads).unwrap();
        let source = uploads.join("robot.png");
        fs::write(&source, b"first").unwrap();

        let store = ImageStore::new(tmp.path().join("images"));
        let managed = store.import(&source).unwrap();
        assert_eq!(managed, store.dir().join("robot.png"));
        assert_eq!(fs::read(&managed).unwrap(), b"first");

        fs::write(&source, b"second").unwrap();
        let again = store.import(&source).unwrap();
        assert_eq!(again, managed);
        assert_eq!(fs::read(&managed).unwrap(), b"second");
        // Original upload stays where it was
        assert!(source.exists());
    }

    #[test]
    fn test_import_rejects_unsupported_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("notes.txt");
        fs::write(&source, b"text").unwrap();

        let store = ImageStore::new(tmp.path().join("images"));
        assert!(matches!(
            store.import(&source),
            Err(AppError::UnsupportedImage(_))
        ));
    }

    #[test]
    fn test_import_missing_source_is_copy_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(tmp.path().join("images"));
        assert!(matches!(
            store.import(&tmp.path().join("ghost.jpg")),
            Err(AppError::ImageCopyFailure(_))
        ));
    }

    #[test]
    fn test_import_file_already_in_managed_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(tmp.path().join("images"));
        store.ensure_dir().unwrap();
        let inside = store.dir().join("poster.gif");
        fs::write(&inside, b"gif").unwrap();

        let managed = store.import(&inside).unwrap();
        assert_eq!(fs::read(managed).unwrap(), b"gif");
    }

    #[cfg(unix)]
    #[test]
    fn test_import_rejects_non_utf8_file_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join(OsStr::from_bytes(b"caf\xe9.png"));
        fs::write(&source, b"png").unwrap();

        let store = ImageStore::new(tmp.path().join("images"));
        assert!(matches!(
            store.import(&source),
            Err(AppError::ImageCopyFailure(_))
        ));
        assert!(!store.dir().exists());
    }

    #[test]
    fn test_verify_managed() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(tmp.path().join("images"));
        store.ensure_dir().unwrap();

        let inside = store.dir().join("robot.png");
        fs::write(&inside, b"png").unwrap();
        assert_eq!(store.verify_managed(inside.to_str().unwrap()).unwrap(), inside);

        // A managed copy that has since been deleted is still a managed path
        let gone = store.dir().join("gone.jpg");
        assert!(store.verify_managed(gone.to_str().unwrap()).is_ok());

        let outside = tmp.path().join("outside.png");
        fs::write(&outside, b"png").unwrap();
        assert!(matches!(
            store.verify_managed(outside.to_str().unwrap()),
            Err(AppError::ImageCopyFailure(_))
        ));

        let pdf = store.dir().join("notes.pdf");
        assert!(matches!(
            store.verify_managed(pdf.to_str().unwrap()),
            Err(AppError::UnsupportedImage(_))
        ));
    }

    #[test]
    fn test_resolve() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(tmp.path());
        let present = tmp.path().join("here.jpg");
        fs::write(&present, b"jpg").unwrap();
        let absent = tmp.path().join("gone.jpg");

        assert_eq!(store.resolve(None), ImageStatus::NotSelected);
        assert_eq!(store.resolve(Some("")), ImageStatus::NotSelected);
        assert_eq!(
            store.resolve(present.to_str()),
            ImageStatus::Available(present.clone())
        );
        assert_eq!(
            store.resolve(absent.to_str()),
            ImageStatus::Missing(absent.clone())
        );
        assert_eq!(store.resolve(absent.to_str()).path(), None);
        assert_eq!(store.resolve(absent.to_str()).label(), "Image not found");
    }
}
