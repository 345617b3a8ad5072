//! Parsing of encoded identity inputs (certificates, names, public keys).

use std::str::FromStr;

use der::Decode;
use spki::SubjectPublicKeyInfoOwned;
use x509_cert::name::Name;
use x509_cert::Certificate;

use super::dn;
use crate::domain::error::{AnchorError, AnchorResult};

pub fn certificate_from_der(der: &[u8]) -> AnchorResult<Certificate> {
  if der.is_empty() {
    return Err(AnchorError::MissingCertificate);
  }
  Certificate::from_der(der).map_err(|e| AnchorError::InvalidCertificate(e.to_string()))
}

#[cfg(feature = "pem")]
pub fn certificate_from_pem(pem: &[u8]) -> AnchorResult<Certificate> {
  use der::DecodePem;

  if pem.iter().all(u8::is_ascii_whitespace) {
    return Err(AnchorError::MissingCertificate);
  }
  Certificate::from_pem(pem).map_err(|e| AnchorError::InvalidCertificate(e.to_string()))
}

pub fn public_key_from_der(der: &[u8]) -> AnchorResult<SubjectPublicKeyInfoOwned> {
  if der.is_empty() {
    return Err(AnchorError::MissingPublicKey);
  }
  SubjectPublicKeyInfoOwned::from_der(der).map_err(|e| AnchorError::InvalidPublicKey(e.to_string()))
}

/// Decodes a DER `Name` (an RDNSequence).
pub fn principal_from_der(der: &[u8]) -> AnchorResult<Name> {
  if der.is_empty() {
    return Err(AnchorError::MissingPrincipal);
  }
  Name::from_der(der).map_err(|e| AnchorError::InvalidName(e.to_string()))
}

/// Parses RFC 2253 / RFC 4514 text into a `Name`.
///
/// Spaces around separators, `;` between RDNs and quoted values are
/// accepted; the text is rewritten to strict RFC 4514 before parsing.
pub fn principal_from_str(text: &str) -> AnchorResult<Name> {
  let strict = dn::normalize(text)?;
  Name::from_str(&strict).map_err(|e| AnchorError::InvalidName(e.to_string()))
}
