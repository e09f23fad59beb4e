//! Error types.

use core::fmt;
use der::asn1::ObjectIdentifier;

/// Alias for [`core::result::Result`] with the `pkcs7` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
///
/// Every variant is a decode-time structural error; encoding a well-formed
/// value cannot fail other than through [`Error::Asn1`] when the underlying
/// serializer rejects a pathological length.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The envelope `SEQUENCE` carries children other than the content type
    /// and the optional content field.
    InvalidChildCount,

    /// A content field is present but no decoding strategy is registered for
    /// its content type.
    UnsupportedContentType {
        /// The offending content type.
        oid: ObjectIdentifier,
    },

    /// An explicitly tagged node wraps zero or more than one inner element.
    MalformedExplicitTag,

    /// ASN.1 errors reported by the underlying DER toolkit, e.g. a malformed
    /// primitive payload.
    Asn1(der::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidChildCount => {
                f.write_str("invalid number of child nodes for ContentInfo")
            }
            Error::UnsupportedContentType { oid } => {
                write!(f, "unsupported ContentInfo contentType {}", oid)
            }
            Error::MalformedExplicitTag => {
                f.write_str("explicitly tagged node must contain exactly one element")
            }
            Error::Asn1(err) => write!(f, "ASN.1 error: {}", err),
        }
    }
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Error {
        Error::Asn1(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Asn1(err) => Some(err),
            _ => None,
        }
    }
}
