//! Signed upload URL issuer.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use guestbook_core::ports::{UploadUrlError, UploadUrlIssuer};

/// File upload configuration.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub bucket_name: String,
    /// Host the bucket is served from, e.g. `files.example.com`.
    pub public_host: String,
    pub secret: String,
    pub expires_secs: i64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            bucket_name: "guestbook-files".to_string(),
            public_host: "files.localhost".to_string(),
            secret: "change-me-in-production".to_string(),
            expires_secs: 300,
        }
    }
}

impl UploadConfig {
    /// Load upload configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let secret =
            std::env::var("UPLOAD_URL_SECRET").unwrap_or_else(|_| defaults.secret.clone());
        if secret == defaults.secret {
            tracing::warn!(
                "Using default upload URL secret. Set UPLOAD_URL_SECRET for production use."
            );
        }

        Self {
            bucket_name: std::env::var("FILE_BUCKET_NAME").unwrap_or(defaults.bucket_name),
            public_host: std::env::var("FILE_PUBLIC_HOST").unwrap_or(defaults.public_host),
            secret,
            expires_secs: std::env::var("UPLOAD_URL_EXPIRES_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.expires_secs),
        }
    }

    /// Public URL of an object once uploaded.
    pub fn public_object_url(&self, bucket: &str, key: &str) -> String {
        format!("https://{}.{}/{}", bucket, self.public_host, key)
    }
}

/// Claims signed into the upload token.
#[derive(Debug, Serialize, Deserialize)]
struct UploadClaims {
    sub: String, // post id
    key: String, // object key within the bucket
    exp: i64,
    iat: i64,
}

/// Issues short-lived signed PUT URLs against the file bucket.
///
/// The file gateway holding the same secret verifies the token; this service
/// only mints it.
pub struct SignedUploadUrlIssuer {
    encoding_key: EncodingKey,
    config: UploadConfig,
}

impl SignedUploadUrlIssuer {
    pub fn new(config: UploadConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        Self {
            encoding_key,
            config,
        }
    }
}

impl UploadUrlIssuer for SignedUploadUrlIssuer {
    fn issue_upload_url(&self, post_id: Uuid, file_name: &str) -> Result<String, UploadUrlError> {
        let key = format!("{}/{}", post_id, file_name);
        let now = Utc::now().timestamp();

        let claims = UploadClaims {
            sub: post_id.to_string(),
            key: key.clone(),
            exp: now + self.config.expires_secs,
            iat: now,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| UploadUrlError::Signing(e.to_string()))?;

        Ok(format!(
            "https://{}.{}/{}?token={}",
            self.config.bucket_name, self.config.public_host, key, token
        ))
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{DecodingKey, Validation, decode};

    use super::*;

    #[test]
    fn issued_url_targets_the_bucket_and_object_key() {
        let issuer = SignedUploadUrlIssuer::new(UploadConfig {
            bucket_name: "guestbook-files".to_string(),
            public_host: "files.example.com".to_string(),
            secret: "test-secret".to_string(),
            expires_secs: 300,
        });

        let post_id = Uuid::new_v4();
        let url = issuer.issue_upload_url(post_id, "photo.png").unwrap();

        assert!(url.starts_with(&format!(
            "https://guestbook-files.files.example.com/{}/photo.png?token=",
            post_id
        )));
    }

    #[test]
    fn token_carries_the_object_key_and_verifies_with_the_secret() {
        let issuer = SignedUploadUrlIssuer::new(UploadConfig {
            bucket_name: "guestbook-files".to_string(),
            public_host: "files.example.com".to_string(),
            secret: "test-secret".to_string(),
            expires_secs: 300,
        });

        let post_id = Uuid::new_v4();
        let url = issuer.issue_upload_url(post_id, "photo.png").unwrap();
        let token = url.split("token=").nth(1).unwrap();

        let decoded = decode::<UploadClaims>(
            token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, post_id.to_string());
        assert_eq!(decoded.claims.key, format!("{}/photo.png", post_id));
        assert!(decoded.claims.exp > decoded.claims.iat);
    }
}
