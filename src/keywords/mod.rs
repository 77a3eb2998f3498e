pub(crate) mod additional_items;
pub(crate) mod additional_properties;
pub(crate) mod all_of;
pub(crate) mod any_of;
pub(crate) mod const_;
pub(crate) mod contains;
pub(crate) mod content;
pub(crate) mod dependencies;
pub(crate) mod enum_;
pub(crate) mod exclusive_maximum;
pub(crate) mod exclusive_minimum;
pub(crate) mod format;
pub(crate) mod helpers;
pub(crate) mod if_;
pub(crate) mod items;
pub(crate) mod legacy;
pub(crate) mod max_items;
pub(crate) mod max_length;
pub(crate) mod max_properties;
pub(crate) mod maximum;
pub(crate) mod min_items;
pub(crate) mod min_length;
pub(crate) mod min_properties;
pub(crate) mod minimum;
pub(crate) mod multiple_of;
pub(crate) mod not;
pub(crate) mod one_of;
pub(crate) mod pattern;
pub(crate) mod pattern_properties;
pub(crate) mod prefix_items;
pub(crate) mod properties;
pub(crate) mod property_names;
pub(crate) mod ref_;
pub(crate) mod required;
pub(crate) mod type_;
pub(crate) mod unique_items;
pub(crate) mod unsupported;

use crate::{context::Context, error::ValidationError, validator::Validator};
use serde_json::{Map, Value};

/// The shape shared by every keyword function.
///
/// Arguments are the driver, the mutable per-call state, the keyword's own
/// value, the instance under validation, and the enclosing schema object
/// (for keywords whose behavior depends on their siblings). The returned
/// buffer is empty on success.
pub(crate) type KeywordFn = for<'s, 'i> fn(
    &Validator<'s>,
    &mut Context,
    &'s Value,
    &'i Value,
    &'s Map<String, Value>,
) -> Vec<ValidationError<'i>>;
