//! PKCS#7/CMS `ContentInfo` support.

use crate::{
    oid::ID_DATA,
    tagged::{context_specific, encode_explicit, explicit_len, parse_optional_explicit},
    Error, Result,
};
use alloc::vec::Vec;
use der::{
    asn1::{ObjectIdentifier, OctetString, OctetStringRef},
    Decode, Encode, EncodeValue, FixedTag, Header, Length, Reader, SliceReader, Tag, Tagged,
    Writer,
};

/// Tag number of the explicitly tagged `content` field.
const CONTENT_TAG: Tag = context_specific(0);

/// A PKCS#7 / CMS `ContentInfo` container.
///
/// This type models the `ContentInfo` structure as defined in PKCS#7 and CMS:
/// the outer envelope of certificate-bundle formats such as PKCS#12. It
/// carries a `contentType` object identifier and an optional, type-dependent
/// encapsulated [`Content`].
///
/// ```text
/// ContentInfo ::= SEQUENCE {
///   contentType ContentType,
///   content [0] EXPLICIT ANY DEFINED BY contentType OPTIONAL
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ContentInfo {
    /// The object identifier that defines the type of the encapsulated
    /// content.
    pub content_type: ObjectIdentifier,

    /// The encapsulated content, if present.
    pub content: Option<Content>,
}

impl ContentInfo {
    /// Creates a new `ContentInfo` with the given content type and content.
    pub fn new(content_type: ObjectIdentifier, content: Option<Content>) -> Self {
        Self {
            content_type,
            content,
        }
    }

    /// Creates a `ContentInfo` carrying raw `data` content.
    pub fn from_data(data: impl Into<Vec<u8>>) -> Self {
        Self::new(ID_DATA, Some(Content::Data(data.into())))
    }

    /// Decodes a `ContentInfo` from DER-encoded bytes.
    ///
    /// Decoding either succeeds with a fully validated structure or fails
    /// atomically; no partially decoded value is ever returned.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let mut reader = SliceReader::new(bytes)?;
        let header = Header::decode(&mut reader)?;
        header.tag.assert_eq(Tag::Sequence)?;

        let mut children = SliceReader::new(reader.read_slice(header.length)?)?;
        let content_type = ObjectIdentifier::decode(&mut children)?;
        let content = parse_optional_explicit(&mut children, CONTENT_TAG, |node| {
            Content::decode_of_type(content_type, node)
        })?;
        if !children.is_finished() {
            return Err(Error::InvalidChildCount);
        }

        Ok(reader.finish(Self {
            content_type,
            content,
        })?)
    }

    /// Encodes this `ContentInfo` as canonical DER bytes.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        Ok(Encode::to_der(self)?)
    }
}

impl FixedTag for ContentInfo {
    const TAG: Tag = Tag::Sequence;
}

impl EncodeValue for ContentInfo {
    fn value_len(&self) -> der::Result<Length> {
        let mut len = self.content_type.encoded_len()?;
        if let Some(content) = &self.content {
            len = (len + explicit_len(CONTENT_TAG, content)?)?;
        }
        Ok(len)
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        self.content_type.encode(writer)?;
        if let Some(content) = &self.content {
            encode_explicit(writer, CONTENT_TAG, content)?;
        }
        Ok(())
    }
}

/// The encapsulated content carried by a [`ContentInfo`] structure.
///
/// This corresponds to the `content` field of PKCS#7 / CMS `ContentInfo`,
/// where the encoding and semantics depend on the associated
/// [`ContentInfo::content_type`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Content {
    /// Raw `data` content, encoded as a primitive OCTET STRING.
    Data(Vec<u8>),
}

impl Content {
    /// Decodes the content of the given content type from the node under the
    /// explicit tag.
    ///
    /// Supporting a further content type means adding a variant and a match
    /// arm here; the envelope's structural validation is unaffected.
    fn decode_of_type(
        content_type: ObjectIdentifier,
        node: &mut SliceReader<'_>,
    ) -> Result<Self> {
        match content_type {
            ID_DATA => Ok(Self::Data(OctetString::decode(node)?.into_bytes())),
            oid => Err(Error::UnsupportedContentType { oid }),
        }
    }
}

impl Tagged for Content {
    fn tag(&self) -> Tag {
        match self {
            Self::Data(_) => Tag::OctetString,
        }
    }
}

impl EncodeValue for Content {
    fn value_len(&self) -> der::Result<Length> {
        match self {
            Self::Data(data) => OctetStringRef::new(data)?.value_len(),
        }
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        match self {
            Self::Data(data) => OctetStringRef::new(data)?.encode_value(writer),
        }
    }
}
