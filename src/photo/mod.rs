// SPDX-License-Identifier: MPL-2.0
//! Profile photo persistence.
//!
//! A single binary file at a fixed path under the app data directory holds
//! the captured photo. Reads and writes are whole-file and asynchronous so
//! startup hydration never blocks the first render; base64 transcoding
//! happens only at this boundary.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the persisted profile photo inside the app data directory.
pub const PROFILE_PHOTO_FILE: &str = "profilePic.png";

/// MIME type reported for photos loaded from or written to disk.
const PNG_MIME: &str = "image/png";

/// A `data:<mime>;base64,<payload>` reference over image bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    mime: String,
    payload: String,
}

impl DataUri {
    /// Wraps an already base64-encoded payload.
    pub fn new(mime: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            payload: payload.into(),
        }
    }

    /// Encodes raw bytes into a data URI with the given MIME type.
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        Self::new(mime, BASE64.encode(bytes))
    }

    /// Parses a `data:<mime>;base64,<payload>` string, stripping the prefix.
    pub fn parse(input: &str) -> Result<Self> {
        let rest = input
            .strip_prefix("data:")
            .ok_or_else(|| Error::DataUri(format!("not a data URI: {input:.32}")))?;
        let (mime, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| Error::DataUri("missing base64 marker".into()))?;
        Ok(Self::new(mime, payload))
    }

    /// Decodes the base64 payload back into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(BASE64.decode(&self.payload)?)
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The same payload re-labelled as PNG. The persisted file is always
    /// `profilePic.png`, so reloaded and freshly saved photos both report a
    /// png prefix regardless of the capture source format.
    pub fn to_png(&self) -> Self {
        Self::new(PNG_MIME, self.payload.clone())
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, self.payload)
    }
}

/// Absolute path of the profile photo file under `data_dir`.
pub fn photo_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PROFILE_PHOTO_FILE)
}

/// Loads the persisted photo, if one exists.
///
/// A missing file is the expected first-run case and yields `Ok(None)`; an
/// I/O failure after the existence probe is reported as an error for the
/// caller to log. Nothing here touches UI state.
pub async fn load(path: PathBuf) -> Result<Option<DataUri>> {
    if !tokio::fs::try_exists(&path).await? {
        return Ok(None);
    }
    let bytes = tokio::fs::read(&path).await?;
    Ok(Some(DataUri::encode(PNG_MIME, &bytes)))
}

/// Persists a captured photo, overwriting any previous one.
///
/// The payload is decoded and written as raw bytes (full overwrite). On
/// success the returned URI is the one to publish: same payload, png prefix.
pub async fn save(path: PathBuf, captured: DataUri) -> Result<DataUri> {
    let bytes = captured.decode()?;
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, &bytes).await?;
    Ok(captured.to_png())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_splits_mime_and_payload() {
        let uri = DataUri::parse("data:image/jpeg;base64,QUJD").expect("parse");
        assert_eq!(uri.mime(), "image/jpeg");
        assert_eq!(uri.payload(), "QUJD");
    }

    #[test]
    fn parse_rejects_plain_strings() {
        assert!(DataUri::parse("/tmp/some/file.png").is_err());
        assert!(DataUri::parse("data:image/png,unencoded").is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let uri = DataUri::new("image/png", "QUJD");
        let parsed = DataUri::parse(&uri.to_string()).expect("parse");
        assert_eq!(parsed, uri);
    }

    #[test]
    fn decode_returns_original_bytes() {
        let uri = DataUri::encode("image/png", b"ABC");
        assert_eq!(uri.payload(), "QUJD");
        assert_eq!(uri.decode().expect("decode"), b"ABC");
    }

    #[test]
    fn decode_rejects_invalid_payload() {
        let uri = DataUri::new("image/png", "not base64!");
        assert!(uri.decode().is_err());
    }

    #[test]
    fn to_png_relabels_without_touching_payload() {
        let jpeg = DataUri::new("image/jpeg", "QUJD");
        let png = jpeg.to_png();
        assert_eq!(png.mime(), "image/png");
        assert_eq!(png.payload(), "QUJD");
    }

    #[test]
    fn photo_path_appends_fixed_file_name() {
        let path = photo_path(Path::new("/data/IcedDeck"));
        assert!(path.ends_with(PROFILE_PHOTO_FILE));
    }

    #[tokio::test]
    async fn load_returns_none_for_missing_file() {
        let dir = tempdir().expect("temp dir");
        let result = load(photo_path(dir.path())).await.expect("load");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn load_encodes_file_bytes_as_png_uri() {
        let dir = tempdir().expect("temp dir");
        let path = photo_path(dir.path());
        tokio::fs::write(&path, b"ABC").await.expect("write");

        let uri = load(path).await.expect("load").expect("present");
        assert!(uri.to_string().starts_with("data:image/png;base64,"));
        assert_eq!(uri.payload(), "QUJD");
    }

    #[tokio::test]
    async fn save_writes_decoded_bytes_and_reports_png() {
        let dir = tempdir().expect("temp dir");
        let path = photo_path(dir.path());

        // Capture source was a jpeg, but the stored file and the reported
        // URI are labelled png; only the bytes travel unchanged.
        let captured = DataUri::new("image/jpeg", "QUJD");
        let saved = save(path.clone(), captured).await.expect("save");

        assert_eq!(saved.to_string(), "data:image/png;base64,QUJD");
        let on_disk = tokio::fs::read(&path).await.expect("read back");
        assert_eq!(on_disk, b"ABC");
    }

    #[tokio::test]
    async fn save_overwrites_previous_photo() {
        let dir = tempdir().expect("temp dir");
        let path = photo_path(dir.path());

        save(path.clone(), DataUri::encode("image/png", b"first"))
            .await
            .expect("first save");
        save(path.clone(), DataUri::encode("image/png", b"second"))
            .await
            .expect("second save");

        let on_disk = tokio::fs::read(&path).await.expect("read back");
        assert_eq!(on_disk, b"second");
    }

    #[tokio::test]
    async fn save_creates_missing_parent_directories() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("deeply").join(PROFILE_PHOTO_FILE);

        save(path.clone(), DataUri::encode("image/png", b"ABC"))
            .await
            .expect("save");
        assert!(path.exists());
    }

    #[tokio::test]
    async fn save_surfaces_write_failures() {
        let dir = tempdir().expect("temp dir");
        // A directory where the photo file should be makes the write fail.
        let path = photo_path(dir.path());
        tokio::fs::create_dir_all(&path).await.expect("conflicting dir");

        let result = save(path, DataUri::encode("image/png", b"ABC")).await;
        assert!(result.is_err());
    }
}
