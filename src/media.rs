//! Local media helpers for the file-sending endpoints.
//!
//! Pure, facade-local transformations: reading a file and turning it into
//! the base64 body the server expects happens before any network call, and
//! fails with [`crate::Error::Io`] independently of the pipeline.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use crate::Result;

/// File reference accepted by the media-sending endpoints.
///
/// Either a URL the server fetches itself, or inline base64 content with
/// an explicit MIME type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MediaFile {
    Url {
        url: String,
    },
    Base64 {
        data: String,
        mimetype: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
    },
}

impl MediaFile {
    /// Reference a file by URL; the server downloads it.
    pub fn url(url: impl Into<String>) -> Self {
        MediaFile::Url { url: url.into() }
    }

    /// Inline base64 content with an explicit MIME type.
    pub fn base64(data: impl Into<String>, mimetype: impl Into<String>) -> Self {
        MediaFile::Base64 {
            data: data.into(),
            mimetype: mimetype.into(),
            filename: None,
        }
    }

    /// Attach a filename to inline content. No effect on URL references.
    pub fn with_filename(mut self, name: impl Into<String>) -> Self {
        if let MediaFile::Base64 { filename, .. } = &mut self {
            *filename = Some(name.into());
        }
        self
    }

    /// Read an image file; unknown extensions default to `image/jpeg`.
    pub fn image_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path(path.as_ref(), "image/jpeg")
    }

    /// Read a video file; unknown extensions default to `video/mp4`.
    pub fn video_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path(path.as_ref(), "video/mp4")
    }

    /// Read a voice note; unknown extensions default to opus-in-ogg.
    pub fn voice_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path(path.as_ref(), "audio/ogg; codecs=opus")
    }

    /// Read an arbitrary document; unknown extensions default to
    /// `application/octet-stream`.
    pub fn document_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path(path.as_ref(), "application/octet-stream")
    }

    fn from_path(path: &Path, default_mime: &str) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let mimetype = guess_media_type(path).unwrap_or(default_mime).to_string();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned);
        Ok(MediaFile::Base64 {
            data: STANDARD.encode(bytes),
            mimetype,
            filename,
        })
    }
}

fn guess_media_type(path: &Path) -> Option<&'static str> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let mt = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "mp4" => "video/mp4",
        "3gp" => "video/3gpp",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "opus" => "audio/ogg; codecs=opus",
        "m4a" => "audio/mp4",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => return None,
    };
    Some(mt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_path_encodes_and_guesses_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"\x89PNG\r\n\x1a\n")
            .unwrap();

        let file = MediaFile::image_from_path(&path).unwrap();
        match file {
            MediaFile::Base64 {
                data,
                mimetype,
                filename,
            } => {
                assert_eq!(data, STANDARD.encode(b"\x89PNG\r\n\x1a\n"));
                assert_eq!(mimetype, "image/png");
                assert_eq!(filename.as_deref(), Some("pixel.png"));
            }
            MediaFile::Url { .. } => panic!("expected inline content"),
        }
    }

    #[test]
    fn unknown_extension_uses_per_kind_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.xyz");
        std::fs::write(&path, b"data").unwrap();

        let voice = MediaFile::voice_from_path(&path).unwrap();
        assert!(matches!(
            voice,
            MediaFile::Base64 { ref mimetype, .. } if mimetype == "audio/ogg; codecs=opus"
        ));

        let doc = MediaFile::document_from_path(&path).unwrap();
        assert!(matches!(
            doc,
            MediaFile::Base64 { ref mimetype, .. } if mimetype == "application/octet-stream"
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = MediaFile::image_from_path("/nonexistent/file.png").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn url_variant_serializes_flat() {
        let value = serde_json::to_value(MediaFile::url("https://example.test/a.png")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"url": "https://example.test/a.png"})
        );
    }

    #[test]
    fn filename_is_omitted_when_absent() {
        let value = serde_json::to_value(MediaFile::base64("aGk=", "text/plain")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"data": "aGk=", "mimetype": "text/plain"})
        );
    }
}
