use crate::error::{Error, Result};
use log::{debug, warn};
use rustls::{ClientConfig, RootCertStore};
use std::sync::Arc;

/// Root authorities compiled into the binary, for hosts whose platform trust
/// store is missing or incomplete (e.g. minimal container base images)
const EXTRA_ROOTS: &[(&str, &[u8])] = &[
    (
        "DigiCert High Assurance EV Root CA",
        include_bytes!("../../certs/digicert-high-assurance-ev-root-ca.pem"),
    ),
    (
        "DigiCert Global Root CA",
        include_bytes!("../../certs/digicert-global-root-ca.pem"),
    ),
    (
        "USERTrust ECC Certification Authority",
        include_bytes!("../../certs/usertrust-ecc-certification-authority.pem"),
    ),
];

/// TLS client configuration trusting platform roots plus the embedded ones
pub fn tls_config() -> Result<ClientConfig> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| Error::Tls(e.to_string()))?
        .with_root_certificates(root_store()?)
        .with_no_client_auth();
    Ok(config)
}

/// Platform root certificates augmented with the embedded authorities
pub fn root_store() -> Result<RootCertStore> {
    let mut roots = RootCertStore::empty();

    let native = rustls_native_certs::load_native_certs();
    for err in &native.errors {
        warn!("Unable to load platform certificates: {err}");
    }
    let (added, ignored) = roots.add_parsable_certificates(native.certs);
    debug!("Loaded {added} platform certificates ({ignored} ignored)");

    for (name, pem) in EXTRA_ROOTS {
        add_pem_roots(&mut roots, name, pem)?;
    }

    Ok(roots)
}

fn add_pem_roots(roots: &mut RootCertStore, name: &str, pem: &[u8]) -> Result<()> {
    let mut reader = pem;
    let mut count = 0;

    for cert in rustls_pemfile::certs(&mut reader) {
        let cert = cert.map_err(|e| Error::Tls(format!("unable to parse {name}: {e}")))?;
        roots
            .add(cert)
            .map_err(|e| Error::Tls(format!("unable to add {name}: {e}")))?;
        count += 1;
    }

    if count == 0 {
        return Err(Error::Tls(format!("no certificate found for {name}")));
    }
    Ok(())
}
