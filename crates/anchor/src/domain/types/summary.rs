use serde::Serialize;

use super::kind::AnchorKind;

/// Serializable snapshot of a trust anchor, intended for structured logs
/// and reports. Not a stable identity: never compare anchors through it.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AnchorSummary {
    pub kind: AnchorKind,
    /// Certificate subject or authority principal, RFC 4514 formatted.
    pub subject: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_name: Option<String>,

    /// Certificate serial number as lowercase hex (certificate anchors only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    /// Public key algorithm OID in dotted notation.
    pub public_key_algorithm: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_constraints_len: Option<usize>,
}
