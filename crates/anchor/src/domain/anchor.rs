// crates/anchor/src/domain/anchor.rs

//! The trust anchor value type.
//!
//! A `TrustAnchor` is built from exactly one of: a trusted CA certificate,
//! an authority name plus public key, or an authority principal plus public
//! key. Optional DER-encoded name constraints are copied in, decoded once to
//! prove they are well formed, and handed back only as fresh copies.

use spki::SubjectPublicKeyInfoOwned;
use tracing::debug;
use x509_cert::ext::pkix::NameConstraints;
use x509_cert::name::Name;
use x509_cert::Certificate;

use crate::adapters::x509::{
    self, validate_name_constraints, DerNameConstraintsDecoder, NameConstraintsDecoder,
};

use super::builder::TrustAnchorBuilder;
use super::diagnostic::hex;
use super::error::{AnchorError, AnchorResult};
use super::types::{AnchorKind, AnchorSummary};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Identity {
    Certificate(Box<Certificate>),
    NameAndKey {
        name: String,
        principal: Name,
        public_key: SubjectPublicKeyInfoOwned,
    },
    PrincipalAndKey {
        name: String,
        principal: Name,
        public_key: SubjectPublicKeyInfoOwned,
    },
}

/// A most-trusted certification authority for certification path validation.
///
/// Immutable once built. All fields are owned, so an anchor can be shared
/// across threads behind an `Arc` without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustAnchor {
    identity: Identity,
    name_constraints: Option<Box<[u8]>>,
}

impl TrustAnchor {
    /// Start assembling an anchor from optional inputs.
    pub fn builder<'a>() -> TrustAnchorBuilder<'a> {
        TrustAnchorBuilder::new()
    }

    /// Anchor trusted through its CA certificate.
    ///
    /// `name_constraints` is the DER encoding of a `NameConstraints` value,
    /// or `None`. Malformed constraints yield `InvalidNameConstraints`.
    pub fn from_certificate(
        certificate: Certificate,
        name_constraints: Option<&[u8]>,
    ) -> AnchorResult<Self> {
        Self::certificate_with(certificate, name_constraints, &DerNameConstraintsDecoder)
    }

    /// Like [`TrustAnchor::from_certificate`], from a DER-encoded certificate.
    pub fn from_certificate_der(der: &[u8], name_constraints: Option<&[u8]>) -> AnchorResult<Self> {
        Self::from_certificate(x509::certificate_from_der(der)?, name_constraints)
    }

    /// Like [`TrustAnchor::from_certificate`], from a PEM-encoded certificate.
    #[cfg(feature = "pem")]
    pub fn from_certificate_pem(pem: &[u8], name_constraints: Option<&[u8]>) -> AnchorResult<Self> {
        Self::from_certificate(x509::certificate_from_pem(pem)?, name_constraints)
    }

    /// Anchor identified by an RFC 2253 / RFC 4514 authority name and its key.
    ///
    /// The name is kept exactly as given and must be non-empty and parse as
    /// a distinguished name.
    pub fn from_name_and_key(
        name: &str,
        public_key: SubjectPublicKeyInfoOwned,
        name_constraints: Option<&[u8]>,
    ) -> AnchorResult<Self> {
        Self::name_and_key_with(name, public_key, name_constraints, &DerNameConstraintsDecoder)
    }

    /// Anchor identified by a structured principal and its key. The authority
    /// name is derived from the principal's string form.
    pub fn from_principal_and_key(
        principal: Name,
        public_key: SubjectPublicKeyInfoOwned,
        name_constraints: Option<&[u8]>,
    ) -> AnchorResult<Self> {
        Self::principal_and_key_with(
            principal,
            public_key,
            name_constraints,
            &DerNameConstraintsDecoder,
        )
    }

    pub(crate) fn certificate_with(
        certificate: Certificate,
        name_constraints: Option<&[u8]>,
        decoder: &dyn NameConstraintsDecoder,
    ) -> AnchorResult<Self> {
        let name_constraints = checked_name_constraints(name_constraints, decoder)?;
        Ok(Self::created(Identity::Certificate(Box::new(certificate)), name_constraints))
    }

    pub(crate) fn name_and_key_with(
        name: &str,
        public_key: SubjectPublicKeyInfoOwned,
        name_constraints: Option<&[u8]>,
        decoder: &dyn NameConstraintsDecoder,
    ) -> AnchorResult<Self> {
        let name_constraints = checked_name_constraints(name_constraints, decoder)?;
        if name.is_empty() {
            return Err(AnchorError::EmptyName);
        }
        let principal = x509::principal_from_str(name)?;
        Ok(Self::created(
            Identity::NameAndKey {
                name: name.to_owned(),
                principal,
                public_key,
            },
            name_constraints,
        ))
    }

    pub(crate) fn principal_and_key_with(
        principal: Name,
        public_key: SubjectPublicKeyInfoOwned,
        name_constraints: Option<&[u8]>,
        decoder: &dyn NameConstraintsDecoder,
    ) -> AnchorResult<Self> {
        let name_constraints = checked_name_constraints(name_constraints, decoder)?;
        Ok(Self::created(
            Identity::PrincipalAndKey {
                name: principal.to_string(),
                principal,
                public_key,
            },
            name_constraints,
        ))
    }

    fn created(identity: Identity, name_constraints: Option<Box<[u8]>>) -> Self {
        let anchor = Self {
            identity,
            name_constraints,
        };
        debug!(
            kind = anchor.kind().as_str(),
            name_constraints_len = anchor.name_constraints.as_ref().map(|nc| nc.len()),
            "trust anchor created"
        );
        anchor
    }

    pub fn kind(&self) -> AnchorKind {
        match self.identity {
            Identity::Certificate(_) => AnchorKind::Certificate,
            Identity::NameAndKey { .. } => AnchorKind::NameAndKey,
            Identity::PrincipalAndKey { .. } => AnchorKind::PrincipalAndKey,
        }
    }

    /// A fresh copy of the DER-encoded name constraints, if any were given.
    pub fn name_constraints(&self) -> Option<Vec<u8>> {
        self.name_constraints.as_deref().map(<[u8]>::to_vec)
    }

    pub fn has_name_constraints(&self) -> bool {
        self.name_constraints.is_some()
    }

    /// Decode the stored name constraints for enforcement during path
    /// validation.
    ///
    /// Uses the default decoder. `None` when the anchor has no constraints,
    /// or when it was built with a custom decoder that accepted an encoding
    /// the default decoder does not.
    pub fn decode_name_constraints(&self) -> Option<NameConstraints> {
        let der = self.name_constraints.as_deref()?;
        DerNameConstraintsDecoder.decode(der).ok()
    }

    /// The trusted CA certificate; `None` unless built from a certificate.
    pub fn trusted_certificate(&self) -> Option<&Certificate> {
        match &self.identity {
            Identity::Certificate(cert) => Some(&**cert),
            _ => None,
        }
    }

    /// The authority principal; `None` when built from a certificate.
    pub fn authority_principal(&self) -> Option<&Name> {
        match &self.identity {
            Identity::NameAndKey { principal, .. } | Identity::PrincipalAndKey { principal, .. } => {
                Some(principal)
            }
            Identity::Certificate(_) => None,
        }
    }

    /// The authority name text; `None` when built from a certificate.
    pub fn authority_name(&self) -> Option<&str> {
        match &self.identity {
            Identity::NameAndKey { name, .. } | Identity::PrincipalAndKey { name, .. } => {
                Some(name.as_str())
            }
            Identity::Certificate(_) => None,
        }
    }

    /// The authority public key; `None` when built from a certificate.
    pub fn authority_public_key(&self) -> Option<&SubjectPublicKeyInfoOwned> {
        match &self.identity {
            Identity::NameAndKey { public_key, .. }
            | Identity::PrincipalAndKey { public_key, .. } => Some(public_key),
            Identity::Certificate(_) => None,
        }
    }

    pub fn summary(&self) -> AnchorSummary {
        let name_constraints_len = self.name_constraints.as_ref().map(|nc| nc.len());
        match &self.identity {
            Identity::Certificate(cert) => {
                let tbs = &cert.tbs_certificate;
                AnchorSummary {
                    kind: self.kind(),
                    subject: tbs.subject.to_string(),
                    authority_name: None,
                    serial_number: Some(hex(tbs.serial_number.as_bytes())),
                    public_key_algorithm: tbs.subject_public_key_info.algorithm.oid.to_string(),
                    name_constraints_len,
                }
            }
            Identity::NameAndKey {
                name,
                principal,
                public_key,
            }
            | Identity::PrincipalAndKey {
                name,
                principal,
                public_key,
            } => AnchorSummary {
                kind: self.kind(),
                subject: principal.to_string(),
                authority_name: Some(name.clone()),
                serial_number: None,
                public_key_algorithm: public_key.algorithm.oid.to_string(),
                name_constraints_len,
            },
        }
    }
}

/// Copy caller bytes into owned storage, then prove they decode.
fn checked_name_constraints(
    name_constraints: Option<&[u8]>,
    decoder: &dyn NameConstraintsDecoder,
) -> AnchorResult<Option<Box<[u8]>>> {
    let Some(bytes) = name_constraints else {
        return Ok(None);
    };
    let owned: Box<[u8]> = bytes.into();
    validate_name_constraints(decoder, &owned)?;
    Ok(Some(owned))
}
