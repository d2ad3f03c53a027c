//! Profile picture handling.
//!
//! Uploaded bytes are sniffed and test-decoded, then stored as a
//! `data:<mime>;base64,...` URL. For display the URL is decoded back into
//! an RGBA buffer, downscaled so egui textures stay small.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Longest edge of the decoded thumbnail.
pub const MAX_EDGE: u32 = 256;

/// Decoded image data (RGBA).
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug)]
pub enum ProfileImageError {
    /// Bytes are not in any supported image format.
    NotAnImage,
    /// Format recognised, pixels unreadable.
    Decode(String),
    /// String is not a base64 `data:image/...` URL.
    BadDataUrl,
}

impl std::fmt::Display for ProfileImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileImageError::NotAnImage => write!(f, "file is not a supported image"),
            ProfileImageError::Decode(e) => write!(f, "image could not be decoded: {}", e),
            ProfileImageError::BadDataUrl => write!(f, "not a base64 image data URL"),
        }
    }
}

impl std::error::Error for ProfileImageError {}

/// Validate uploaded bytes and encode them as a data URL.
pub fn to_data_url(bytes: &[u8]) -> Result<String, ProfileImageError> {
    let format = image::guess_format(bytes).map_err(|_| ProfileImageError::NotAnImage)?;
    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| ProfileImageError::Decode(e.to_string()))?;

    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(bytes)
    ))
}

/// Decode a stored data URL into a display-sized RGBA buffer.
pub fn decode_data_url(url: &str) -> Result<ImageData, ProfileImageError> {
    let rest = url.strip_prefix("data:").ok_or(ProfileImageError::BadDataUrl)?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or(ProfileImageError::BadDataUrl)?;
    if !mime.starts_with("image/") {
        return Err(ProfileImageError::BadDataUrl);
    }

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|_| ProfileImageError::BadDataUrl)?;
    let img = image::load_from_memory(&bytes).map_err(|e| ProfileImageError::Decode(e.to_string()))?;

    let img = if img.width() > MAX_EDGE || img.height() > MAX_EDGE {
        img.thumbnail(MAX_EDGE, MAX_EDGE)
    } else {
        img
    };
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(ImageData {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
pub(crate) fn tiny_png(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([102, 126, 234, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_roundtrip_through_data_url() {
        let url = to_data_url(&tiny_png(4, 3)).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        let data = decode_data_url(&url).unwrap();
        assert_eq!((data.width, data.height), (4, 3));
        assert_eq!(data.rgba.len(), 4 * 3 * 4);
    }

    #[test]
    fn rejects_non_images() {
        assert!(matches!(
            to_data_url(b"hello, not an image"),
            Err(ProfileImageError::NotAnImage)
        ));
    }

    #[test]
    fn large_images_are_downscaled() {
        let url = to_data_url(&tiny_png(1024, 512)).unwrap();
        let data = decode_data_url(&url).unwrap();
        assert_eq!(data.width, MAX_EDGE);
        assert!(data.height <= MAX_EDGE);
    }

    #[test]
    fn bad_urls() {
        assert!(decode_data_url("https://example.com/a.png").is_err());
        assert!(decode_data_url("data:text/plain;base64,AAAA").is_err());
        assert!(decode_data_url("data:image/png;base64,!!!").is_err());
    }
}
