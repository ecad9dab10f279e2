// SPDX-License-Identifier: MPL-2.0
//! Capture source for new profile photos.
//!
//! Desktop builds have no camera pipeline; the capture overlay delegates to
//! a native file dialog and delivers the chosen image as a data URI, which
//! is all the downstream capture flow requires.

use crate::photo::DataUri;

/// MIME type used when the picked bytes cannot be identified.
const FALLBACK_MIME: &str = "image/png";

/// Extensions offered by the picker dialog.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Opens the image picker and returns the selection as a data URI.
///
/// Returns `None` when the dialog is cancelled or the file cannot be read;
/// a read failure is logged, cancellation is silent.
pub async fn pick_image() -> Option<DataUri> {
    let file = rfd::AsyncFileDialog::new()
        .set_title("Choose a profile photo")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
        .await?;

    let bytes = match tokio::fs::read(file.path()).await {
        Ok(bytes) => bytes,
        Err(error) => {
            eprintln!("Failed to read picked image: {:?}", error);
            return None;
        }
    };

    Some(encode_image(&bytes))
}

/// Sniffs the image format and wraps the bytes in a data URI.
pub fn encode_image(bytes: &[u8]) -> DataUri {
    let mime = image_rs::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME);
    DataUri::encode(mime, bytes)
}
