// crates/anchor/src/domain/diagnostic.rs

//! Human-readable rendering of trust anchors for logs and debugging.
//! The layout is not stable and must not be parsed.

use std::fmt::{self, Write as _};

use spki::SubjectPublicKeyInfoOwned;
use x509_cert::Certificate;

use super::anchor::TrustAnchor;
use super::types::AnchorDefaults;

impl fmt::Display for TrustAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TrustAnchor: [\n")?;
        if let Some(cert) = self.trusted_certificate() {
            f.write_str("Trusted CA certificate: ")?;
            write_certificate(f, cert)?;
            f.write_char('\n')?;
        }
        if let Some(principal) = self.authority_principal() {
            writeln!(f, "Trusted CA Name: {principal}")?;
        }
        if let Some(key) = self.authority_public_key() {
            f.write_str("Trusted CA Public Key: ")?;
            write_public_key(f, key)?;
            f.write_char('\n')?;
        }
        if let Some(nc) = self.name_constraints() {
            f.write_str("Name Constraints:\n")?;
            f.write_str(&format_bytes(&nc, AnchorDefaults::DIAGNOSTIC_INDENT))?;
        }
        f.write_char(']')
    }
}

fn write_certificate(f: &mut fmt::Formatter<'_>, cert: &Certificate) -> fmt::Result {
    let tbs = &cert.tbs_certificate;
    write!(
        f,
        "subject={}, issuer={}, serial={}, ",
        tbs.subject,
        tbs.issuer,
        hex(tbs.serial_number.as_bytes())
    )?;
    write_public_key(f, &tbs.subject_public_key_info)
}

fn write_public_key(f: &mut fmt::Formatter<'_>, key: &SubjectPublicKeyInfoOwned) -> fmt::Result {
    write!(
        f,
        "algorithm={}, key={} bytes",
        key.algorithm.oid,
        key.subject_public_key.raw_bytes().len()
    )
}

/// Hex dump of `bytes`: one line per 16 bytes, each prefixed with `indent`
/// and the line's starting offset.
pub fn format_bytes(bytes: &[u8], indent: &str) -> String {
    let per_line = AnchorDefaults::DIAGNOSTIC_BYTES_PER_LINE;
    let lines = bytes.len().div_ceil(per_line);
    let mut out = String::with_capacity(lines * (indent.len() + 6 + per_line * 3 + 1));
    for (i, chunk) in bytes.chunks(per_line).enumerate() {
        let _ = write!(out, "{indent}{:04x}:", i * per_line);
        for b in chunk {
            let _ = write!(out, " {b:02x}");
        }
        out.push('\n');
    }
    out
}

/// Lowercase hex without separators.
pub(crate) fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}
