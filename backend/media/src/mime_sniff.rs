//! Content-based MIME sniffing for input images.
//!
//! Reads the file header and maps the declared format tag to the MIME
//! string the remote API expects.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use caderno_core::CadernoError;

/// PNG file signature.
const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Sniff the MIME type of an image file from its header bytes.
///
/// Fails with `ImageNotFound` if the path does not exist, and with
/// `ImageUnreadable` if the file cannot be read or is empty. Only the
/// header is inspected; the image is never decoded.
pub fn sniff_mime(path: &Path) -> Result<&'static str, CadernoError> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CadernoError::ImageNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(CadernoError::ImageUnreadable(e.to_string())),
    };

    let mut header = [0u8; 16];
    let n = file
        .read(&mut header)
        .map_err(|e| CadernoError::ImageUnreadable(e.to_string()))?;
    sniff_bytes(&header[..n])
}

/// Sniff from raw header bytes (the first 12 decide every precise match).
pub fn sniff_bytes(data: &[u8]) -> Result<&'static str, CadernoError> {
    if data.is_empty() {
        return Err(CadernoError::ImageUnreadable("empty file".to_string()));
    }

    if data.starts_with(PNG_MAGIC) {
        return Ok("image/png");
    }
    if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        return Ok("image/webp");
    }
    if data.len() >= 12 && &data[4..8] == b"ftyp" {
        match &data[8..12] {
            b"heic" | b"heix" | b"hevc" | b"hevx" => return Ok("image/heic"),
            b"heif" | b"mif1" | b"msf1" => return Ok("image/heif"),
            _ => {}
        }
    }

    // Declared fallback, not a precise sniff.
    Ok("image/jpeg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn detects_png() {
        let f = write_temp(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0]);
        assert_eq!(sniff_mime(f.path()).unwrap(), "image/png");
    }

    #[test]
    fn detects_webp() {
        let f = write_temp(b"RIFF\x24\x00\x00\x00WEBPVP8 ");
        assert_eq!(sniff_mime(f.path()).unwrap(), "image/webp");
    }

    #[test]
    fn detects_heic_brand() {
        let f = write_temp(b"\x00\x00\x00\x18ftypheic\x00\x00\x00\x00");
        assert_eq!(sniff_mime(f.path()).unwrap(), "image/heic");
    }

    #[test]
    fn detects_heif_brand() {
        let f = write_temp(b"\x00\x00\x00\x18ftypmif1\x00\x00\x00\x00");
        assert_eq!(sniff_mime(f.path()).unwrap(), "image/heif");
    }

    #[test]
    fn jpeg_is_the_fallback() {
        let f = write_temp(&[0xFF, 0xD8, 0xFF, 0xE0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(sniff_mime(f.path()).unwrap(), "image/jpeg");
        assert_eq!(sniff_bytes(b"definitely not an image").unwrap(), "image/jpeg");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = sniff_mime(Path::new("/nonexistent/page.png")).unwrap_err();
        assert!(matches!(err, CadernoError::ImageNotFound(_)));
    }

    #[test]
    fn empty_file_is_unreadable() {
        let f = write_temp(&[]);
        let err = sniff_mime(f.path()).unwrap_err();
        assert!(matches!(err, CadernoError::ImageUnreadable(_)));
    }
}
