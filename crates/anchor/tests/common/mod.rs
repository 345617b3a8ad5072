#![allow(dead_code)]

use std::str::FromStr;

use const_oid::db::rfc5280::ID_CE_NAME_CONSTRAINTS;
use der::{Decode, Encode};
use rcgen::{BasicConstraints, Certificate, CertificateParams, DnType, IsCa};

use pkix_anchor as pa;

/// NameConstraints { permittedSubtrees: [ dNSName "example.com" ] }
pub const PERMITTED_EXAMPLE_COM: &[u8] = &[
    0x30, 0x11, 0xa0, 0x0f, 0x30, 0x0d, 0x82, 0x0b, b'e', b'x', b'a', b'm', b'p', b'l', b'e', b'.',
    b'c', b'o', b'm',
];

/// NameConstraints { excludedSubtrees: [ dNSName "bad.test" ] }
pub const EXCLUDED_BAD_TEST: &[u8] = &[
    0x30, 0x0e, 0xa1, 0x0c, 0x30, 0x0a, 0x82, 0x08, b'b', b'a', b'd', b'.', b't', b'e', b's', b't',
];

pub const ROOT_NAME: &str = "CN=Example Root CA,O=Example,C=US";

fn ca_params(common_name: &str) -> CertificateParams {
    let mut params = CertificateParams::new(vec![]);
    params.alg = &rcgen::PKCS_ECDSA_P256_SHA256;
    params.distinguished_name = rcgen::DistinguishedName::new();
    params.distinguished_name.push(DnType::CommonName, common_name);
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    params.key_usages = vec![rcgen::KeyUsagePurpose::KeyCertSign, rcgen::KeyUsagePurpose::CrlSign];
    params
}

/// Generate a self-signed CA certificate with rcgen, returned as DER.
pub fn generate_ca_der(common_name: &str) -> Vec<u8> {
    let cert = Certificate::from_params(ca_params(common_name)).expect("ca cert");
    cert.serialize_der().expect("ca der")
}

pub fn generate_ca_pem(common_name: &str) -> String {
    let cert = Certificate::from_params(ca_params(common_name)).expect("ca cert");
    cert.serialize_pem().expect("ca pem")
}

/// Generate a CA whose certificate carries a name constraints extension
/// permitting `permitted_dns`.
pub fn generate_constrained_ca_der(common_name: &str, permitted_dns: &str) -> Vec<u8> {
    let mut params = ca_params(common_name);
    params.name_constraints = Some(rcgen::NameConstraints {
        permitted_subtrees: vec![rcgen::GeneralSubtree::DnsName(permitted_dns.to_string())],
        excluded_subtrees: vec![],
    });
    let cert = Certificate::from_params(params).expect("constrained ca cert");
    cert.serialize_der().expect("constrained ca der")
}

pub fn ca_certificate(common_name: &str) -> pa::Certificate {
    pa::Certificate::from_der(&generate_ca_der(common_name)).expect("parse ca")
}

/// A fresh P-256 SubjectPublicKeyInfo, lifted out of a generated certificate.
pub fn public_key() -> pa::SubjectPublicKeyInfoOwned {
    ca_certificate("Key Holder").tbs_certificate.subject_public_key_info
}

pub fn public_key_der() -> Vec<u8> {
    public_key().to_der().expect("spki der")
}

pub fn root_principal() -> pa::Name {
    pa::Name::from_str(ROOT_NAME).expect("root name")
}

/// Raw value of the name constraints extension in a DER certificate.
pub fn name_constraints_extension(cert_der: &[u8]) -> Option<Vec<u8>> {
    let cert = pa::Certificate::from_der(cert_der).expect("parse cert");
    cert.tbs_certificate
        .extensions?
        .into_iter()
        .find(|ext| ext.extn_id == ID_CE_NAME_CONSTRAINTS)
        .map(|ext| ext.extn_value.as_bytes().to_vec())
}
