use serde::Serialize;

/// Which construction mode produced a trust anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    /// Built from a trusted CA certificate.
    Certificate,
    /// Built from RFC 2253/4514 name text and a public key.
    NameAndKey,
    /// Built from a structured principal and a public key.
    PrincipalAndKey,
}

impl AnchorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AnchorKind::Certificate => "certificate",
            AnchorKind::NameAndKey => "name_and_key",
            AnchorKind::PrincipalAndKey => "principal_and_key",
        }
    }
}
