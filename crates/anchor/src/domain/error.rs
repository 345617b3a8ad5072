// crates/anchor/src/domain/error.rs
use thiserror::Error;

/// Reasons a trust anchor cannot be constructed.
///
/// Every variant is an invalid-argument rejection raised while building an
/// anchor. Once an anchor exists, nothing on it can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnchorError {
  #[error("trusted certificate is required")]
  MissingCertificate,

  #[error("authority name is required")]
  MissingName,

  #[error("authority principal is required")]
  MissingPrincipal,

  #[error("authority public key is required")]
  MissingPublicKey,

  #[error("one of certificate, authority name or authority principal is required")]
  MissingIdentity,

  #[error("conflicting identity inputs: {0}")]
  ConflictingIdentity(&'static str),

  #[error("authority name must not be empty")]
  EmptyName,

  #[error("invalid authority name: {0}")]
  InvalidName(String),

  #[error("invalid name constraints: {0}")]
  InvalidNameConstraints(String),

  #[error("invalid certificate: {0}")]
  InvalidCertificate(String),

  #[error("invalid public key: {0}")]
  InvalidPublicKey(String),
}

pub type AnchorResult<T> = Result<T, AnchorError>;
