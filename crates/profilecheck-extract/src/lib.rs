//! Platform extraction adapters.
//!
//! One adapter per supported platform turns a rendered profile page into a
//! normalized [`profilecheck_core::ProfileSnapshot`]. Extraction is
//! fail-soft at field level: a missing DOM element yields the field's
//! default, never an error. Only a page where nothing at all can be derived
//! raises [`ExtractionError::Unrecognized`].

pub mod adapter;
pub mod error;
pub mod facebook;
pub mod instagram;
pub mod parse;
pub mod twitter;

pub use adapter::{extractor_for, ProfileExtractor};
pub use error::{ExtractionError, Result};
pub use facebook::FacebookExtractor;
pub use instagram::InstagramExtractor;
pub use twitter::TwitterExtractor;
