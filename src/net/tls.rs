//! TLS configuration and certificate loading.

use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;

use crate::config::TlsConfig;

/// Load the listener's certificate and key (PEM).
pub async fn load_tls_config(config: &TlsConfig) -> Result<RustlsConfig, std::io::Error> {
    let cert_path = Path::new(&config.cert_path);
    let key_path = Path::new(&config.key_path);

    for (kind, path) in [("Certificate", cert_path), ("Private key", key_path)] {
        if !path.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} file not found: {:?}", kind, path),
            ));
        }
    }

    let tls = RustlsConfig::from_pem_file(cert_path, key_path).await?;
    tracing::info!(cert = ?cert_path, "TLS certificate loaded");
    Ok(tls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_certificate_is_not_found() {
        let config = TlsConfig {
            cert_path: "/nonexistent/secure-greeting/cert.pem".into(),
            key_path: "/nonexistent/secure-greeting/key.pem".into(),
        };
        let err = load_tls_config(&config).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("Certificate"));
    }
}
