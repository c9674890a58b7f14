use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::Url;

use todos_core::attachment::{AttachmentUrlSigner, SigningError};

/// Builds expiring object URLs under a bucket base URL.
///
/// URLs have the shape `<base>/<attachment_id>?expires=<unix-seconds>`.
#[derive(Debug, Clone)]
pub struct BucketUrlSigner {
    base_url: Url,
    expiration_seconds: i64,
}

impl BucketUrlSigner {
    pub fn new(base_url: &str, expiration: Duration) -> Result<Self, SigningError> {
        let mut url =
            Url::parse(base_url).map_err(|e| SigningError::InvalidBaseUrl(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(SigningError::InvalidBaseUrl(base_url.to_string()));
        }

        // Url::join replaces the last segment unless the path ends with a slash
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);

        Ok(Self {
            base_url: url,
            expiration_seconds: i64::try_from(expiration.as_secs()).unwrap_or(i64::MAX),
        })
    }

    fn url_for(&self, attachment_id: &str, now: DateTime<Utc>) -> Result<String, SigningError> {
        if !is_valid_attachment_id(attachment_id) {
            return Err(SigningError::InvalidAttachmentId(attachment_id.to_string()));
        }

        let mut url = self
            .base_url
            .join(attachment_id)
            .map_err(|e| SigningError::Failed(e.to_string()))?;
        let expires = now.timestamp().saturating_add(self.expiration_seconds);
        url.query_pairs_mut().append_pair("expires", &expires.to_string());

        Ok(url.into())
    }
}

#[async_trait]
impl AttachmentUrlSigner for BucketUrlSigner {
    async fn attachment_url(&self, attachment_id: &str) -> Result<String, SigningError> {
        self.url_for(attachment_id, Utc::now())
    }
}

/// Object keys are a single path segment made of URL-safe characters.
fn is_valid_attachment_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
