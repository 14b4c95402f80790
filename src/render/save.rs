//! Writing identicons to image files.
//!
//! Targets must be bare filenames with a png, jpg or jpeg extension, and are
//! never overwritten.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::error::{IdenticonError, Result};

use super::RasterImage;

/// Extensions accepted for save targets (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Save an identicon into the current directory.
pub fn save(image: &RasterImage, filename: &str) -> Result<PathBuf> {
    save_in(image, Path::new("."), filename)
}

/// Save an identicon as `dir/filename`.
///
/// Returns the path written. The file is created exclusively, so an existing
/// file is reported as [`IdenticonError::InvalidFilename`] rather than
/// replaced. If encoding fails the partial file is removed.
pub fn save_in(image: &RasterImage, dir: &Path, filename: &str) -> Result<PathBuf> {
    let format = validate_filename(filename)?;
    let path = dir.join(filename);

    if path.exists() {
        return Err(already_exists(filename));
    }

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => already_exists(filename),
            _ => IdenticonError::Io {
                path: path.clone(),
                message: format!("Failed to create file: {}", e),
            },
        })?;

    if let Err(e) = encode(image, file, format) {
        let _ = fs::remove_file(&path);
        return Err(IdenticonError::Io {
            path,
            message: format!("Failed to write image: {}", e),
        });
    }

    Ok(path)
}

/// Check a save target and pick its image format.
pub fn validate_filename(filename: &str) -> Result<ImageFormat> {
    let path = Path::new(filename);

    let has_dir = path
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty());
    if has_dir || path.file_name().is_none() {
        return Err(IdenticonError::InvalidFilename {
            message: format!("{} is not a bare filename", filename),
            help: Some("Provide only a filename without a directory".to_string()),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => Ok(ImageFormat::Png),
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        _ => Err(IdenticonError::InvalidFilename {
            message: format!("unsupported extension in {}", filename),
            help: Some(format!("Allowed extensions are {}", SUPPORTED_EXTENSIONS.join(", "))),
        }),
    }
}

fn already_exists(filename: &str) -> IdenticonError {
    IdenticonError::InvalidFilename {
        message: format!("{} already exists", filename),
        help: Some("Choose another filename or remove the existing file".to_string()),
    }
}

fn encode(image: &RasterImage, file: File, format: ImageFormat) -> std::result::Result<(), String> {
    let mut writer = BufWriter::new(file);
    let rgba = image.as_rgba_image();

    let written = match format {
        // JPEG has no alpha channel
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(rgba.clone())
            .to_rgb8()
            .write_to(&mut writer, format),
        _ => rgba.write_to(&mut writer, format),
    };
    written.map_err(|e| e.to_string())?;
    writer.flush().map_err(|e| e.to_string())
}
