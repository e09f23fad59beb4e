#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # Usage
//!
//! ## Encoding and decoding `data` content
//!
//! ```
//! use pkcs7::{Content, ContentInfo, oid::ID_DATA};
//!
//! let info = ContentInfo::from_data([0x01, 0x02, 0x03]);
//! assert_eq!(info.content_type, ID_DATA);
//!
//! let der = info.to_der()?;
//! let decoded = ContentInfo::from_der(&der)?;
//! assert_eq!(decoded.content, Some(Content::Data(vec![0x01, 0x02, 0x03])));
//! # Ok::<(), pkcs7::Error>(())
//! ```
//!
//! ## Content-type-only envelopes
//!
//! The `content` field is `OPTIONAL` in the schema, so an envelope may carry
//! nothing but its content type:
//!
//! ```
//! use pkcs7::{ContentInfo, oid::ID_DATA};
//!
//! let info = ContentInfo::new(ID_DATA, None);
//! let decoded = ContentInfo::from_der(&info.to_der()?)?;
//! assert_eq!(decoded.content, None);
//! # Ok::<(), pkcs7::Error>(())
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod errors;
pub mod oid;

mod content_info;
mod tagged;

pub use der;

pub use crate::{
    content_info::{Content, ContentInfo},
    errors::{Error, Result},
    tagged::{context_specific, encode_explicit, explicit_len, parse_optional_explicit},
};
