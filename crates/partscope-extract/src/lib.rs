//! Component classification and specification extraction.
//!
//! Pipeline: [`normalize`] the raw text, [`classify`] it into a
//! [`ComponentFamily`], [`extract`] the family's fields into a
//! [`SpecificationMap`]. [`analyze`] and [`summarize`] run the whole
//! pipeline; [`extract_key_specs`] and [`extract_metadata`] pull the
//! family-independent ratings. Nothing here fails: unmatched text simply
//! yields empty results.
#![deny(unused_crate_dependencies)]

pub mod classifier;
pub mod datasheet;
pub mod extractor;
pub mod family;
pub mod key_specs;
pub mod metadata;
pub mod normalize;
pub mod rules;
pub mod similar;
pub mod spec_map;
pub mod summary;

pub use classifier::{ClassificationResult, classify, classify_named, family_scores};
pub use datasheet::{DatasheetAnalysis, analyze};
pub use extractor::extract;
pub use family::{ComponentFamily, ParseFamilyError};
pub use key_specs::{KeySpecs, extract_key_specs, extract_manufacturer};
pub use metadata::{Metadata, Mounting, Standard, extract_metadata};
pub use normalize::{normalize, title_case};
pub use rules::{FieldRule, ValueCase, rules_for};
pub use similar::{ComponentRecord, DEFAULT_SIMILAR_LIMIT, SimilarityQuery, leading_number};
pub use spec_map::SpecificationMap;
pub use summary::{SUMMARY_UNAVAILABLE, summarize};
