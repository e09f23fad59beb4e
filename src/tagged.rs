//! `EXPLICIT` context-specific tagging support.
//!
//! CMS-derived schemas mark every optional field with an `[n] EXPLICIT`
//! context-specific tag. The helpers in this module centralize the tag
//! matching and unwrap logic so individual structures never re-derive it.

use crate::{Error, Result};
use der::{Decode, Encode, Header, Length, Reader, SliceReader, Tag, TagNumber, Writer};

/// Creates the identifier for a context-specific tag with the given number.
///
/// Explicitly tagged values are always encoded as constructed, so the
/// constructed bit is set unconditionally.
///
/// # Panics
///
/// Panics if `number` exceeds 30, the highest tag number the underlying
/// toolkit supports (and more than any CMS-derived schema uses).
pub const fn context_specific(number: u8) -> Tag {
    Tag::ContextSpecific {
        constructed: true,
        number: TagNumber::new(number),
    }
}

/// Parses an optional explicitly tagged element.
///
/// If the next value in `reader` carries the `expected` tag, the wrapper is
/// consumed and `f` is invoked on its single inner element. If the reader is
/// exhausted or the next value carries any other tag, nothing is consumed
/// and `None` is returned, leaving the reader positioned before that value.
///
/// # Errors
///
/// Returns [`Error::MalformedExplicitTag`] if the wrapper holds zero inner
/// elements or bytes remain after `f` has decoded one. Errors returned by
/// `f` propagate unchanged.
pub fn parse_optional_explicit<'a, R, F, T>(
    reader: &mut R,
    expected: Tag,
    f: F,
) -> Result<Option<T>>
where
    R: Reader<'a>,
    F: FnOnce(&mut SliceReader<'a>) -> Result<T>,
{
    if reader.is_finished() || reader.peek_tag()? != expected {
        return Ok(None);
    }

    let header = Header::decode(reader)?;
    let mut inner = SliceReader::new(reader.read_slice(header.length)?)?;
    if inner.is_finished() {
        return Err(Error::MalformedExplicitTag);
    }

    let value = f(&mut inner)?;
    if !inner.is_finished() {
        return Err(Error::MalformedExplicitTag);
    }
    Ok(Some(value))
}

/// Writes `value` wrapped in the explicitly tagged node `tag`.
pub fn encode_explicit<T: Encode>(
    writer: &mut impl Writer,
    tag: Tag,
    value: &T,
) -> der::Result<()> {
    Header::new(tag, value.encoded_len()?)?.encode(writer)?;
    value.encode(writer)
}

/// Returns the encoded length of `value` wrapped in the explicitly tagged
/// node `tag`.
pub fn explicit_len<T: Encode>(tag: Tag, value: &T) -> der::Result<Length> {
    let inner = value.encoded_len()?;
    Header::new(tag, inner)?.encoded_len()? + inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use der::{asn1::OctetString, SliceWriter};
    use hex_literal::hex;

    fn take_octet_string(node: &mut SliceReader<'_>) -> Result<OctetString> {
        Ok(OctetString::decode(node)?)
    }

    #[test]
    fn context_specific_tags() {
        for number in 0..=30 {
            let tag = context_specific(number);
            assert_eq!(tag.class(), der::Class::ContextSpecific);
            assert_eq!(tag.number().value(), number);
            assert!(tag.is_constructed());
        }
    }

    #[test]
    fn parse_explicitly_tagged_value() {
        let body = hex!("a0 05 04 03 01 02 03");
        let mut reader = SliceReader::new(&body).unwrap();

        let value =
            parse_optional_explicit(&mut reader, context_specific(0), take_octet_string)
                .unwrap();

        assert_eq!(value.unwrap().as_bytes(), [0x01, 0x02, 0x03]);
        assert!(reader.is_finished());
    }

    #[test]
    fn absent_when_reader_is_exhausted() {
        let mut reader = SliceReader::new(&[]).unwrap();

        let value =
            parse_optional_explicit(&mut reader, context_specific(0), take_octet_string)
                .unwrap();

        assert!(value.is_none());
    }

    #[test]
    fn mismatched_tag_leaves_reader_untouched() {
        let body = hex!("a1 02 05 00");
        let mut reader = SliceReader::new(&body).unwrap();

        let value =
            parse_optional_explicit(&mut reader, context_specific(0), take_octet_string)
                .unwrap();

        assert!(value.is_none());
        assert_eq!(reader.peek_tag().unwrap(), context_specific(1));
        assert_eq!(u32::from(reader.remaining_len()), 4);
    }

    #[test]
    fn reject_empty_wrapper() {
        let body = hex!("a0 00");
        let mut reader = SliceReader::new(&body).unwrap();

        let result =
            parse_optional_explicit(&mut reader, context_specific(0), take_octet_string);

        assert_eq!(result, Err(Error::MalformedExplicitTag));
    }

    #[test]
    fn reject_trailing_value_in_wrapper() {
        let body = hex!("a0 06 04 01 01 04 01 02");
        let mut reader = SliceReader::new(&body).unwrap();

        let result =
            parse_optional_explicit(&mut reader, context_specific(0), take_octet_string);

        assert_eq!(result, Err(Error::MalformedExplicitTag));
    }

    #[test]
    fn inner_decode_error_propagates() {
        let body = hex!("a0 02 05 00");
        let mut reader = SliceReader::new(&body).unwrap();

        let result =
            parse_optional_explicit(&mut reader, context_specific(0), take_octet_string);

        assert!(matches!(result, Err(Error::Asn1(_))));
    }

    #[test]
    fn encode_explicit_wraps_value() {
        let value = OctetString::new(vec![0x01, 0x02, 0x03]).unwrap();
        let tag = context_specific(0);
        assert_eq!(u32::from(explicit_len(tag, &value).unwrap()), 7);

        let mut buf = [0u8; 7];
        let mut writer = SliceWriter::new(&mut buf);
        encode_explicit(&mut writer, tag, &value).unwrap();
        assert_eq!(writer.finish().unwrap(), hex!("a0 05 04 03 01 02 03"));
    }
}
