//! File attachments for outbound mail.

use crate::error::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// OData type discriminator Graph requires on every file attachment.
const FILE_ATTACHMENT_TYPE: &str = "#microsoft.graph.fileAttachment";

/// A file attachment, base64-encoded and ready for the `sendMail` payload.
#[derive(Debug, Clone, Serialize)]
pub struct FileAttachment {
    #[serde(rename = "@odata.type")]
    odata_type: &'static str,
    /// File name shown in the recipient's mail client.
    pub name: String,
    /// MIME content type.
    #[serde(rename = "contentType")]
    pub content_type: String,
    /// Base64-encoded file content.
    #[serde(rename = "contentBytes")]
    pub content_bytes: String,
}

impl FileAttachment {
    /// Reads a file from disk and encodes it as an attachment.
    ///
    /// The attachment name is the file name portion of the path, and the
    /// MIME type is guessed from the extension, falling back to
    /// `application/octet-stream`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        let content_type = mime_guess::from_path(path).first_or_octet_stream().to_string();
        let bytes = fs::read(path)?;
        Ok(Self::from_bytes(name, content_type, &bytes))
    }

    /// Creates an attachment from in-memory bytes.
    #[must_use]
    pub fn from_bytes(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: &[u8],
    ) -> Self {
        Self {
            odata_type: FILE_ATTACHMENT_TYPE,
            name: name.into(),
            content_type: content_type.into(),
            content_bytes: STANDARD.encode(bytes),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_encodes_base64() {
        let attachment = FileAttachment::from_bytes("hello.txt", "text/plain", b"Hello, World!");
        assert_eq!(attachment.name, "hello.txt");
        assert_eq!(attachment.content_type, "text/plain");
        assert_eq!(attachment.content_bytes, "SGVsbG8sIFdvcmxkIQ==");
    }

    #[test]
    fn test_serialized_shape() {
        let attachment = FileAttachment::from_bytes("r.pdf", "application/pdf", b"PDF");
        let value = serde_json::to_value(&attachment).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "@odata.type": "#microsoft.graph.fileAttachment",
                "name": "r.pdf",
                "contentType": "application/pdf",
                "contentBytes": "UERG"
            })
        );
    }

    #[test]
    fn test_from_path_guesses_mime_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        fs::write(&path, b"%PDF-1.7").unwrap();

        let attachment = FileAttachment::from_path(&path).unwrap();
        assert_eq!(attachment.name, "report.pdf");
        assert_eq!(attachment.content_type, "application/pdf");
        assert_eq!(attachment.content_bytes, STANDARD.encode(b"%PDF-1.7"));
    }

    #[test]
    fn test_from_path_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.zzz");
        fs::write(&path, b"\x00\x01").unwrap();

        let attachment = FileAttachment::from_path(&path).unwrap();
        assert_eq!(attachment.content_type, "application/octet-stream");
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = FileAttachment::from_path("/nonexistent/report.pdf");
        assert!(result.is_err());
    }
}
