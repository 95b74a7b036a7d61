// SPDX-License-Identifier: MPL-2.0
//! Self-contained `data:` URLs for image payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image_rs::ImageFormat;
use std::fmt;
use std::path::Path;

/// MIME type used when neither the bytes nor the file name identify a format.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// A `data:<mime>;base64,<payload>` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl(String);

impl DataUrl {
    /// Encodes `bytes` under the given MIME type.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }

    /// Encodes PNG bytes.
    pub fn png(bytes: &[u8]) -> Self {
        Self::from_bytes(ImageFormat::Png.to_mime_type(), bytes)
    }

    /// Encodes a file's contents, picking the MIME type from the bytes first
    /// and the file extension second.
    pub fn from_file_contents(path: &Path, bytes: &[u8]) -> Self {
        Self::from_bytes(sniff_mime(path, bytes), bytes)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the MIME type between `data:` and `;base64`.
    #[must_use]
    pub fn mime(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or_default()
    }

    /// Decodes the base64 payload back to raw bytes.
    pub fn decode(&self) -> Option<Vec<u8>> {
        let (_, payload) = self.0.split_once(";base64,")?;
        STANDARD.decode(payload).ok()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn sniff_mime(path: &Path, bytes: &[u8]) -> &'static str {
    image_rs::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}
