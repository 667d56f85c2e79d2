/// Writing the background image set to disk.
use super::config::{HEIGHT, WIDTH};
use super::render::{render_default_diagonal_grid, render_default_random_opacity_grid, render_grid};
use crate::annotate::GridPattern;
use crate::common::Result;
use image::{ImageFormat, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the diagonal variant.
pub const DIAGONAL_FILE_NAME: &str = "grid_diagonal.png";

/// File name of the jittered-opacity variant.
pub const RANDOM_FILE_NAME: &str = "grid_random.png";

/// Canvas size used for generated images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

/// Render every background at full size into `dir`.
///
/// See [`generate_backgrounds_sized`].
pub fn generate_backgrounds<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    generate_backgrounds_sized(dir, CanvasSize::default())
}

/// Render every background into `dir`, creating it if needed.
///
/// Writes one PNG per [`GridPattern`] (named by
/// [`GridPattern::background_file_name`]), then the diagonal and the
/// jittered-opacity variants. Returns the written paths in that order.
pub fn generate_backgrounds_sized<P: AsRef<Path>>(
    dir: P,
    size: CanvasSize,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(GridPattern::ALL.len() + 2);
    for pattern in GridPattern::ALL {
        let img = render_grid(size.width, size.height, pattern.grid_config());
        written.push(save_png(&img, &dir.join(pattern.background_file_name()))?);
    }

    let img = render_default_diagonal_grid(size.width, size.height);
    written.push(save_png(&img, &dir.join(DIAGONAL_FILE_NAME))?);

    let img = render_default_random_opacity_grid(size.width, size.height, &mut rand::rng());
    written.push(save_png(&img, &dir.join(RANDOM_FILE_NAME))?);

    Ok(written)
}

fn save_png(img: &RgbImage, path: &Path) -> Result<PathBuf> {
    img.save_with_format(path, ImageFormat::Png)?;
    tracing::info!(path = %path.display(), "wrote background image");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backgrounds::config::DARK_BG;
    use tempfile::tempdir;

    const SMALL: CanvasSize = CanvasSize {
        width: 96,
        height: 54,
    };

    #[test]
    fn test_generates_full_set() {
        let dir = tempdir().expect("create temp dir");
        let out = dir.path().join("backgrounds");

        let written = generate_backgrounds_sized(&out, SMALL).expect("generate");

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            [
                "grid_dense.png",
                "grid_fine.png",
                "grid_medium.png",
                "grid_coarse.png",
                "grid_sparse.png",
                "grid_none.png",
                "grid_diagonal.png",
                "grid_random.png",
            ]
        );
        for path in &written {
            assert!(path.is_file(), "{}", path.display());
        }
    }

    #[test]
    fn test_written_png_decodes() {
        let dir = tempdir().expect("create temp dir");
        let written = generate_backgrounds_sized(dir.path(), SMALL).expect("generate");

        let none = dir.path().join(GridPattern::None.background_file_name());
        assert!(written.contains(&none));
        let img = image::open(&none).expect("decode png").to_rgb8();
        assert_eq!(img.dimensions(), (SMALL.width, SMALL.height));
        assert!(img.pixels().all(|p| *p == DARK_BG));
    }

    #[test]
    fn test_every_assigned_pattern_has_a_background() {
        let dir = tempdir().expect("create temp dir");
        generate_backgrounds_sized(dir.path(), SMALL).expect("generate");
        for pattern in GridPattern::ALL {
            assert!(dir.path().join(pattern.background_file_name()).is_file());
        }
    }
}
