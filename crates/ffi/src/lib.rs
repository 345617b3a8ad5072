use std::sync::Arc;

use der::Encode;
use pkix_anchor::{AnchorError, AnchorKind, TrustAnchor};

uniffi::setup_scaffolding!();

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("{message}")]
    InvalidArgument { message: String },
    #[error("DER encoding failed: {message}")]
    Encoding { message: String },
}

impl From<AnchorError> for FfiError {
    fn from(e: AnchorError) -> Self {
        FfiError::InvalidArgument {
            message: e.to_string(),
        }
    }
}

impl From<der::Error> for FfiError {
    fn from(e: der::Error) -> Self {
        FfiError::Encoding {
            message: e.to_string(),
        }
    }
}

// ===== FFI types mirroring the public Rust API (FFI-friendly) =====

#[derive(uniffi::Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiAnchorKind { Certificate, NameAndKey, PrincipalAndKey }

impl From<AnchorKind> for FfiAnchorKind {
    fn from(v: AnchorKind) -> Self {
        match v { AnchorKind::Certificate => FfiAnchorKind::Certificate, AnchorKind::NameAndKey => FfiAnchorKind::NameAndKey, AnchorKind::PrincipalAndKey => FfiAnchorKind::PrincipalAndKey }
    }
}

/// Trust anchor handle for foreign callers. Every identity input crosses the
/// boundary DER-encoded; absent inputs arrive as `None` and are rejected.
#[derive(uniffi::Object, Debug)]
pub struct FfiTrustAnchor {
    inner: TrustAnchor,
}

#[uniffi::export]
impl FfiTrustAnchor {
    #[uniffi::constructor]
    pub fn from_certificate_der(
        certificate_der: Option<Vec<u8>>,
        name_constraints: Option<Vec<u8>>,
    ) -> Result<Arc<Self>, FfiError> {
        let der = certificate_der.ok_or(AnchorError::MissingCertificate)?;
        let inner = TrustAnchor::from_certificate_der(&der, name_constraints.as_deref())?;
        Ok(Arc::new(Self { inner }))
    }

    #[uniffi::constructor]
    pub fn from_name_and_key(
        name: Option<String>,
        public_key_der: Option<Vec<u8>>,
        name_constraints: Option<Vec<u8>>,
    ) -> Result<Arc<Self>, FfiError> {
        let name = name.ok_or(AnchorError::MissingName)?;
        let key = public_key_der.ok_or(AnchorError::MissingPublicKey)?;
        let mut builder = TrustAnchor::builder().authority_name(name).public_key_der(key);
        if let Some(nc) = &name_constraints {
            builder = builder.name_constraints(nc);
        }
        Ok(Arc::new(Self { inner: builder.build()? }))
    }

    #[uniffi::constructor]
    pub fn from_principal_der_and_key(
        principal_der: Option<Vec<u8>>,
        public_key_der: Option<Vec<u8>>,
        name_constraints: Option<Vec<u8>>,
    ) -> Result<Arc<Self>, FfiError> {
        let principal = principal_der.ok_or(AnchorError::MissingPrincipal)?;
        let key = public_key_der.ok_or(AnchorError::MissingPublicKey)?;
        let mut builder = TrustAnchor::builder().authority_principal_der(principal).public_key_der(key);
        if let Some(nc) = &name_constraints {
            builder = builder.name_constraints(nc);
        }
        Ok(Arc::new(Self { inner: builder.build()? }))
    }

    pub fn kind(&self) -> FfiAnchorKind {
        self.inner.kind().into()
    }

    pub fn name_constraints(&self) -> Option<Vec<u8>> {
        self.inner.name_constraints()
    }

    pub fn authority_name(&self) -> Option<String> {
        self.inner.authority_name().map(str::to_owned)
    }

    pub fn authority_principal_der(&self) -> Result<Option<Vec<u8>>, FfiError> {
        Ok(self.inner.authority_principal().map(|p| p.to_der()).transpose()?)
    }

    pub fn authority_public_key_der(&self) -> Result<Option<Vec<u8>>, FfiError> {
        Ok(self.inner.authority_public_key().map(|k| k.to_der()).transpose()?)
    }

    pub fn trusted_certificate_der(&self) -> Result<Option<Vec<u8>>, FfiError> {
        Ok(self.inner.trusted_certificate().map(|c| c.to_der()).transpose()?)
    }

    /// Multi-line diagnostic text; not a stable format.
    pub fn describe(&self) -> String {
        self.inner.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_failures_are_not_reported_as_absent() {
        let err = FfiError::from(der::Error::from(der::ErrorKind::Failed));
        assert!(matches!(err, FfiError::Encoding { .. }));
        assert!(err.to_string().starts_with("DER encoding failed"));
    }
}
