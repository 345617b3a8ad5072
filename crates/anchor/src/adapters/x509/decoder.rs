//! Name constraints decoding seam.

use der::Decode;
use tracing::trace;
use x509_cert::ext::pkix::NameConstraints;

use crate::domain::error::{AnchorError, AnchorResult};

/// Structural decoder for DER-encoded `NameConstraints` extension values.
///
/// Implementations must be deterministic and side-effect free. Anything that
/// is not one complete encoding of the RFC 5280 shape (wrong tag, truncated
/// length, malformed subtree entries, trailing bytes) must be rejected.
pub trait NameConstraintsDecoder: Send + Sync {
  fn decode(&self, der: &[u8]) -> der::Result<NameConstraints>;
}

/// Default decoder backed by `x509-cert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerNameConstraintsDecoder;

impl NameConstraintsDecoder for DerNameConstraintsDecoder {
  fn decode(&self, der: &[u8]) -> der::Result<NameConstraints> {
    NameConstraints::from_der(der)
  }
}

/// Runs `decoder` once over `der` and discards the decoded value.
pub(crate) fn validate_name_constraints(
  decoder: &dyn NameConstraintsDecoder,
  der: &[u8],
) -> AnchorResult<()> {
  let decoded = decoder
    .decode(der)
    .map_err(|e| AnchorError::InvalidNameConstraints(e.to_string()))?;
  trace!(
    permitted = decoded.permitted_subtrees.as_ref().map_or(0, Vec::len),
    excluded = decoded.excluded_subtrees.as_ref().map_or(0, Vec::len),
    "name constraints decoded"
  );
  Ok(())
}
