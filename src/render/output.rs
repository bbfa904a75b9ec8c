use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::info;

use crate::error::{RenderError, Result};
use crate::operations::fractal::Depth;

/// Returns `snowflake_d<depth>.png`.
#[must_use]
pub fn default_output_path(depth: Depth) -> PathBuf {
    PathBuf::from(format!("snowflake_d{depth}.png"))
}

/// Writes `image` to `path`, creating missing parent directories. The format
/// is chosen from the file extension.
///
/// # Errors
///
/// Returns `RenderError::Io` if a directory cannot be created, and
/// `RenderError::Image` if encoding or writing the file fails.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| RenderError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }
    image.save(path).map_err(RenderError::from)?;
    info!(path = %path.display(), "saved image");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use image::Rgb;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn default_path_names_the_depth() {
        let path = default_output_path(Depth::new(5).unwrap());
        assert_eq!(path, PathBuf::from("snowflake_d5.png"));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.png");
        let image = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));
        save_image(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(*loaded.get_pixel(0, 0), Rgb([1, 2, 3]));
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.not-an-image-format");
        let image = RgbImage::new(2, 2);
        assert!(save_image(&image, &path).is_err());
    }

    #[test]
    fn parent_that_is_a_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();
        let image = RgbImage::new(2, 2);
        let err = save_image(&image, &blocker.join("out.png")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::KochError::Render(RenderError::Io { .. })
        ));
    }
}
