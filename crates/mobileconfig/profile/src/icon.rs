//! Icon re-encoding capability.
//!
//! Web-clip icons are embedded as PNG regardless of the input format. The
//! capability is feature-gated (`icons`, on by default); when it is
//! unavailable or the input cannot be decoded, icon embedding is skipped —
//! never an error.

/// Whether icon embedding is available in this build.
pub fn available() -> bool {
    cfg!(feature = "icons")
}

/// Re-encode arbitrary image bytes to PNG in memory.
///
/// Returns `None` when the capability is unavailable or the bytes do not
/// decode; callers treat `None` as "omit the icon".
#[cfg(feature = "icons")]
pub fn encode_png(bytes: &[u8]) -> Option<Vec<u8>> {
    use std::io::Cursor;

    use tracing::warn;

    let img = match image::load_from_memory(bytes) {
        Ok(img) => img,
        Err(err) => {
            warn!(error = %err, "icon decode failed, skipping icon");
            return None;
        }
    };
    let mut buf = Cursor::new(Vec::new());
    match img.write_to(&mut buf, image::ImageFormat::Png) {
        Ok(()) => Some(buf.into_inner()),
        Err(err) => {
            warn!(error = %err, "icon re-encode failed, skipping icon");
            None
        }
    }
}

#[cfg(not(feature = "icons"))]
pub fn encode_png(_bytes: &[u8]) -> Option<Vec<u8>> {
    tracing::debug!("icon support not compiled in, skipping icon");
    None
}
