use std::fs;
use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::AssetError;

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_lowercase()
}

/// EXIF orientation tag of a JPEG, 1 when absent or unreadable.
fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            debug!(?path, "no EXIF data: {e}");
            1
        }
    }
}

/// Load an image file, bake its EXIF rotation in, and upload it.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = extension_of(path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(path, &bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes).map_err(|e| {
        AssetError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; flips are left alone
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(?path, orientation, "applied EXIF rotation");
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| AssetError::Texture {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Load `path`, or a flat `fallback` placeholder when it can't be read.
pub fn load_or_placeholder(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
    fallback: Color,
) -> Option<Texture2D> {
    match load_texture_with_exif_rotation(rl, thread, path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!("{e}; using placeholder");
            let image = Image::gen_image_color(16, 16, fallback); // Stretched by draw_cover anyway
            rl.load_texture_from_image(thread, &image)
                .inspect_err(|e| warn!(?path, "placeholder upload failed: {e}"))
                .ok()
        }
    }
}
