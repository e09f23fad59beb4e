//! Content type object identifiers.
//!
//! PKCS#7 registers its content types under `pkcs-7` (1.2.840.113549.1.7).

use der::asn1::ObjectIdentifier;

/// `id-data`: arbitrary octet strings (RFC 5652 Section 4).
pub const ID_DATA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.7.1");
