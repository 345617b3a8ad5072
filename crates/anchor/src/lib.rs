// crates/anchor/src/lib.rs

//! Public facade for pkix-anchor.
//! Immutable X.509 trust anchors for certification path validation, with
//! name constraints validated once at construction.

pub mod adapters;
pub mod domain;

// Re-exports for convenience
pub use adapters::x509::{DerNameConstraintsDecoder, NameConstraintsDecoder};
pub use domain::anchor::TrustAnchor;
pub use domain::builder::TrustAnchorBuilder;
pub use domain::diagnostic::format_bytes;
pub use domain::error::{AnchorError, AnchorResult};
pub use domain::types::{AnchorDefaults, AnchorKind, AnchorSummary};

// Types that appear in the public API
pub use spki::SubjectPublicKeyInfoOwned;
pub use x509_cert::ext::pkix::NameConstraints;
pub use x509_cert::name::Name;
pub use x509_cert::Certificate;
