//! Photo attachment payload.

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::error::{HaulerError, Result};

/// Upper bound on the decoded photo payload, in bytes.
pub const MAX_IMAGE_BYTES: usize = 1024 * 1024;

/// A photo attached to a pickup request.
///
/// Stored as a base64 data URL so it embeds directly in JSON documents.
/// Both constructors enforce [`MAX_IMAGE_BYTES`]; once a value exists it is
/// known to be within the cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageAttachment {
    data_url: String,
}

impl ImageAttachment {
    /// Encodes raw image bytes into an attachment.
    ///
    /// # Returns
    ///
    /// - `Ok(ImageAttachment)`: payload within the cap
    /// - `Err(Media)`: payload over the cap; nothing is encoded
    pub fn from_bytes(content_type: &str, bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(HaulerError::media(format!(
                "image is {} bytes, over the {} byte limit",
                bytes.len(),
                MAX_IMAGE_BYTES
            )));
        }
        let encoded = general_purpose::STANDARD.encode(bytes);
        Ok(Self {
            data_url: format!("data:{content_type};base64,{encoded}"),
        })
    }

    /// Wraps an already-encoded data URL.
    ///
    /// Used when the payload arrives pre-encoded (seed data, wire reads).
    /// The size check estimates decoded length from the base64 portion.
    pub fn from_data_url(data_url: impl Into<String>) -> Result<Self> {
        let data_url = data_url.into();
        if !data_url.starts_with("data:") {
            return Err(HaulerError::media("image payload is not a data URL"));
        }
        let attachment = Self { data_url };
        if attachment.estimated_bytes() > MAX_IMAGE_BYTES {
            return Err(HaulerError::media(format!(
                "image is about {} bytes, over the {} byte limit",
                attachment.estimated_bytes(),
                MAX_IMAGE_BYTES
            )));
        }
        Ok(attachment)
    }

    /// The full data URL, suitable for embedding.
    pub fn as_data_url(&self) -> &str {
        &self.data_url
    }

    /// Approximate decoded payload size, derived from the base64 length.
    pub fn estimated_bytes(&self) -> usize {
        let payload = self
            .data_url
            .split_once("base64,")
            .map(|(_, rest)| rest)
            .unwrap_or(self.data_url.as_str());
        payload.len() * 3 / 4
    }
}
