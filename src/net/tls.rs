//! TLS configuration and certificate loading.

use std::io::{Error, ErrorKind};
use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;

/// Load a rustls config from PEM certificate and key files.
pub async fn load_tls_config(cert_path: &Path, key_path: &Path) -> Result<RustlsConfig, Error> {
    for (kind, path) in [("Certificate", cert_path), ("Private key", key_path)] {
        if !path.exists() {
            return Err(Error::new(
                ErrorKind::NotFound,
                format!("{kind} file not found: {}", path.display()),
            ));
        }
    }

    let config = RustlsConfig::from_pem_file(cert_path, key_path).await?;
    tracing::info!(cert = %cert_path.display(), "TLS certificate loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_certificate() {
        let err = load_tls_config(Path::new("/nonexistent/cert.pem"), Path::new("/nonexistent/key.pem"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().starts_with("Certificate file not found"));
    }

    #[tokio::test]
    async fn test_missing_key() {
        let cert = tempfile::NamedTempFile::new().unwrap();
        let err = load_tls_config(cert.path(), Path::new("/nonexistent/key.pem"))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Private key file not found"));
    }

    #[tokio::test]
    async fn test_invalid_pem_is_rejected() {
        let cert = tempfile::NamedTempFile::new().unwrap();
        let key = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(cert.path(), "not a certificate").unwrap();
        std::fs::write(key.path(), "not a key").unwrap();

        assert!(load_tls_config(cert.path(), key.path()).await.is_err());
    }
}
