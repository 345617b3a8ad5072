use pkix_anchor_ffi::{FfiAnchorKind, FfiError, FfiTrustAnchor};

// NameConstraints { permittedSubtrees: [ dNSName "example.com" ] }
const PERMITTED_EXAMPLE_COM: &[u8] = &[
    0x30, 0x11, 0xa0, 0x0f, 0x30, 0x0d, 0x82, 0x0b, b'e', b'x', b'a', b'm', b'p', b'l', b'e', b'.',
    b'c', b'o', b'm',
];

fn ca_der() -> Vec<u8> {
    let cert = rcgen::generate_simple_self_signed(vec!["ca.example.com".to_string()]).expect("cert");
    cert.serialize_der().expect("der")
}

fn invalid_argument(err: FfiError) -> String {
    match err {
        FfiError::InvalidArgument { message } => message,
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn certificate_round_trips_through_ffi() {
    let der = ca_der();
    let anchor = FfiTrustAnchor::from_certificate_der(Some(der), Some(PERMITTED_EXAMPLE_COM.to_vec()))
        .expect("anchor");

    assert_eq!(anchor.kind(), FfiAnchorKind::Certificate);
    let reencoded = anchor.trusted_certificate_der().expect("encode").expect("certificate der");
    let again = FfiTrustAnchor::from_certificate_der(Some(reencoded.clone()), None).expect("re-parse");
    assert_eq!(again.trusted_certificate_der().expect("encode"), Some(reencoded));
    assert_eq!(anchor.name_constraints().as_deref(), Some(PERMITTED_EXAMPLE_COM));
    assert!(anchor.authority_name().is_none());
    assert_eq!(anchor.authority_principal_der().expect("encode"), None);
    assert_eq!(anchor.authority_public_key_der().expect("encode"), None);
    assert!(anchor.describe().contains("Name Constraints:"));
}

#[test]
fn key_based_anchors_round_trip_through_ffi() {
    let cert = FfiTrustAnchor::from_certificate_der(Some(ca_der()), None).expect("cert anchor");
    let describe = cert.describe();
    assert!(describe.contains("Trusted CA certificate: "));

    let principal_source = FfiTrustAnchor::from_name_and_key(
        Some("CN=FFI Root,O=Example".to_string()),
        Some(spki_der()),
        None,
    )
    .expect("name anchor");
    assert_eq!(principal_source.kind(), FfiAnchorKind::NameAndKey);
    assert_eq!(principal_source.authority_name().as_deref(), Some("CN=FFI Root,O=Example"));

    let by_principal = FfiTrustAnchor::from_principal_der_and_key(
        principal_source.authority_principal_der().expect("encode"),
        principal_source.authority_public_key_der().expect("encode"),
        Some(PERMITTED_EXAMPLE_COM.to_vec()),
    )
    .expect("principal anchor");
    assert_eq!(by_principal.kind(), FfiAnchorKind::PrincipalAndKey);
    assert_eq!(
        by_principal.authority_principal_der().expect("encode"),
        principal_source.authority_principal_der().expect("encode")
    );
    assert_eq!(by_principal.trusted_certificate_der().expect("encode"), None);
}

#[test]
fn absent_inputs_are_invalid_arguments() {
    let msg = invalid_argument(FfiTrustAnchor::from_certificate_der(None, None).unwrap_err());
    assert!(msg.contains("certificate"));

    let msg = invalid_argument(FfiTrustAnchor::from_name_and_key(None, Some(spki_der()), None).unwrap_err());
    assert!(msg.contains("name"));

    let msg = invalid_argument(
        FfiTrustAnchor::from_name_and_key(Some("CN=x".to_string()), None, None).unwrap_err(),
    );
    assert!(msg.contains("public key"));

    let msg = invalid_argument(
        FfiTrustAnchor::from_principal_der_and_key(None, Some(spki_der()), None).unwrap_err(),
    );
    assert!(msg.contains("principal"));
}

#[test]
fn malformed_constraints_are_invalid_arguments() {
    let err = FfiTrustAnchor::from_certificate_der(Some(ca_der()), Some(vec![0x30, 0x05])).unwrap_err();
    assert!(invalid_argument(err).contains("name constraints"));
}

/// SubjectPublicKeyInfo of a freshly generated certificate.
fn spki_der() -> Vec<u8> {
    use der::{Decode, Encode};
    let cert = pkix_anchor::Certificate::from_der(&ca_der()).expect("parse");
    cert.tbs_certificate.subject_public_key_info.to_der().expect("spki")
}
