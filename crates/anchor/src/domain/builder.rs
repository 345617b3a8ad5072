// crates/anchor/src/domain/builder.rs

use std::fmt;

use spki::SubjectPublicKeyInfoOwned;
use x509_cert::name::Name;
use x509_cert::Certificate;

use crate::adapters::x509::{self, DerNameConstraintsDecoder, NameConstraintsDecoder};

use super::anchor::TrustAnchor;
use super::error::{AnchorError, AnchorResult};

/// An identity input that is either already structured or still DER-encoded.
enum Input<T> {
    Value(T),
    Der(Vec<u8>),
}

impl<T> Input<T> {
    fn resolve(self, parse: fn(&[u8]) -> AnchorResult<T>) -> AnchorResult<T> {
        match self {
            Input::Value(v) => Ok(v),
            Input::Der(der) => parse(&der),
        }
    }
}

/// Assembles a [`TrustAnchor`] from inputs that may each be absent.
///
/// Exactly one identity must be supplied: a certificate, an authority name,
/// or an authority principal (the latter two with a public key). Absent or
/// conflicting inputs are reported by [`TrustAnchorBuilder::build`].
pub struct TrustAnchorBuilder<'a> {
    certificate: Option<Input<Certificate>>,
    authority_name: Option<String>,
    authority_principal: Option<Input<Name>>,
    public_key: Option<Input<SubjectPublicKeyInfoOwned>>,
    name_constraints: Option<Vec<u8>>,
    decoder: Option<&'a dyn NameConstraintsDecoder>,
}

impl<'a> TrustAnchorBuilder<'a> {
    pub fn new() -> Self {
        Self {
            certificate: None,
            authority_name: None,
            authority_principal: None,
            public_key: None,
            name_constraints: None,
            decoder: None,
        }
    }

    pub fn certificate(mut self, certificate: Certificate) -> Self {
        self.certificate = Some(Input::Value(certificate));
        self
    }

    pub fn certificate_der(mut self, der: impl Into<Vec<u8>>) -> Self {
        self.certificate = Some(Input::Der(der.into()));
        self
    }

    /// RFC 2253 / RFC 4514 text form of the authority's distinguished name.
    pub fn authority_name(mut self, name: impl Into<String>) -> Self {
        self.authority_name = Some(name.into());
        self
    }

    pub fn authority_principal(mut self, principal: Name) -> Self {
        self.authority_principal = Some(Input::Value(principal));
        self
    }

    pub fn authority_principal_der(mut self, der: impl Into<Vec<u8>>) -> Self {
        self.authority_principal = Some(Input::Der(der.into()));
        self
    }

    pub fn public_key(mut self, key: SubjectPublicKeyInfoOwned) -> Self {
        self.public_key = Some(Input::Value(key));
        self
    }

    /// DER-encoded `SubjectPublicKeyInfo`.
    pub fn public_key_der(mut self, der: impl Into<Vec<u8>>) -> Self {
        self.public_key = Some(Input::Der(der.into()));
        self
    }

    /// DER-encoded `NameConstraints`. The bytes are copied here and again
    /// into the built anchor.
    pub fn name_constraints(mut self, der: &[u8]) -> Self {
        self.name_constraints = Some(der.to_vec());
        self
    }

    /// Decoder used to validate the name constraints; defaults to
    /// [`DerNameConstraintsDecoder`].
    pub fn decoder(mut self, decoder: &'a dyn NameConstraintsDecoder) -> Self {
        self.decoder = Some(decoder);
        self
    }

    pub fn build(self) -> AnchorResult<TrustAnchor> {
        let Self {
            certificate,
            authority_name,
            authority_principal,
            public_key,
            name_constraints,
            decoder,
        } = self;
        let decoder = decoder.unwrap_or(&DerNameConstraintsDecoder);
        let name_constraints = name_constraints.as_deref();

        match (certificate, authority_name, authority_principal) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(AnchorError::ConflictingIdentity(
                "certificate given together with an authority name or principal",
            )),
            (Some(_), None, None) if public_key.is_some() => Err(AnchorError::ConflictingIdentity(
                "certificate given together with a separate public key",
            )),
            (Some(certificate), None, None) => {
                let certificate = certificate.resolve(x509::certificate_from_der)?;
                TrustAnchor::certificate_with(certificate, name_constraints, decoder)
            }
            (None, Some(_), Some(_)) => Err(AnchorError::ConflictingIdentity(
                "authority name given together with an authority principal",
            )),
            (None, None, Some(principal)) => {
                let public_key = public_key.ok_or(AnchorError::MissingPublicKey)?;
                let principal = principal.resolve(x509::principal_from_der)?;
                let public_key = public_key.resolve(x509::public_key_from_der)?;
                TrustAnchor::principal_and_key_with(principal, public_key, name_constraints, decoder)
            }
            (None, Some(name), None) => {
                let public_key = public_key
                    .ok_or(AnchorError::MissingPublicKey)?
                    .resolve(x509::public_key_from_der)?;
                TrustAnchor::name_and_key_with(&name, public_key, name_constraints, decoder)
            }
            (None, None, None) => Err(AnchorError::MissingIdentity),
        }
    }
}

impl Default for TrustAnchorBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TrustAnchorBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrustAnchorBuilder")
            .field("certificate", &self.certificate.is_some())
            .field("authority_name", &self.authority_name)
            .field("authority_principal", &self.authority_principal.is_some())
            .field("public_key", &self.public_key.is_some())
            .field("name_constraints_len", &self.name_constraints.as_ref().map(Vec::len))
            .field("custom_decoder", &self.decoder.is_some())
            .finish()
    }
}
