//! Draft detection and per-draft keyword dispatch tables.
use crate::keywords::{self, KeywordFn};
use serde_json::Value;

/// JSON Schema Draft version
// Declaration order is release order; the derived `Ord` encodes "this draft
// or newer" checks
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum Draft {
    /// JSON Schema Draft 4
    Draft4,
    /// JSON Schema Draft 6
    Draft6,
    /// JSON Schema Draft 7
    Draft7,
    /// JSON Schema Draft 2019-09
    Draft201909,
    /// JSON Schema Draft 2020-12
    Draft202012,
}

/// A resolved dispatch entry: the keyword in its `'static` spelling plus the
/// function implementing it.
pub(crate) type DispatchEntry = (&'static str, KeywordFn);

impl Draft {
    /// Draft 2019-09 and later evaluate keywords adjacent to `$ref`; earlier
    /// drafts make `$ref` suppress its siblings.
    pub(crate) fn supports_adjacent_validation(self) -> bool {
        matches!(self, Draft::Draft201909 | Draft::Draft202012)
    }

    /// The identifier keyword establishing base URIs in this draft.
    pub(crate) fn id_keyword(self) -> &'static str {
        if self == Draft::Draft4 {
            "id"
        } else {
            "$id"
        }
    }

    pub(crate) fn get_validator(self, keyword: &str) -> Option<DispatchEntry> {
        match keyword {
            // Keywords common to all supported drafts
            "$ref" => Some(("$ref", keywords::ref_::validate as KeywordFn)),
            "additionalItems" => Some(("additionalItems", keywords::additional_items::validate)),
            "additionalProperties" => Some((
                "additionalProperties",
                keywords::additional_properties::validate,
            )),
            "allOf" => Some(("allOf", keywords::all_of::validate)),
            "anyOf" => Some(("anyOf", keywords::any_of::validate)),
            "dependencies" => Some(("dependencies", keywords::dependencies::validate)),
            "enum" => Some(("enum", keywords::enum_::validate)),
            "format" => Some(("format", keywords::format::validate)),
            "items" => Some(("items", keywords::items::validate)),
            "maxItems" => Some(("maxItems", keywords::max_items::validate)),
            "maxLength" => Some(("maxLength", keywords::max_length::validate)),
            "maxProperties" => Some(("maxProperties", keywords::max_properties::validate)),
            "minItems" => Some(("minItems", keywords::min_items::validate)),
            "minLength" => Some(("minLength", keywords::min_length::validate)),
            "minProperties" => Some(("minProperties", keywords::min_properties::validate)),
            "multipleOf" => Some(("multipleOf", keywords::multiple_of::validate)),
            "not" => Some(("not", keywords::not::validate)),
            "oneOf" => Some(("oneOf", keywords::one_of::validate)),
            "pattern" => Some(("pattern", keywords::pattern::validate)),
            "patternProperties" => {
                Some(("patternProperties", keywords::pattern_properties::validate))
            }
            "properties" => Some(("properties", keywords::properties::validate)),
            "required" => Some(("required", keywords::required::validate)),
            "type" => Some(("type", keywords::type_::validate)),
            "uniqueItems" => Some(("uniqueItems", keywords::unique_items::validate)),
            // Draft 4 keeps boolean `exclusiveMinimum` / `exclusiveMaximum`
            // companions next to the inclusive bounds
            "maximum" if self == Draft::Draft4 => {
                Some(("maximum", keywords::legacy::maximum_draft_4::validate))
            }
            "minimum" if self == Draft::Draft4 => {
                Some(("minimum", keywords::legacy::minimum_draft_4::validate))
            }
            "maximum" => Some(("maximum", keywords::maximum::validate)),
            "minimum" => Some(("minimum", keywords::minimum::validate)),
            // Draft 6 and later
            "const" if self >= Draft::Draft6 => Some(("const", keywords::const_::validate)),
            "contains" if self >= Draft::Draft6 => Some(("contains", keywords::contains::validate)),
            "exclusiveMaximum" if self >= Draft::Draft6 => Some((
                "exclusiveMaximum",
                keywords::exclusive_maximum::validate,
            )),
            "exclusiveMinimum" if self >= Draft::Draft6 => Some((
                "exclusiveMinimum",
                keywords::exclusive_minimum::validate,
            )),
            "propertyNames" if self >= Draft::Draft6 => {
                Some(("propertyNames", keywords::property_names::validate))
            }
            "contentMediaType" if matches!(self, Draft::Draft6 | Draft::Draft7) => {
                Some(("contentMediaType", keywords::content::validate_media_type))
            }
            "contentEncoding" if matches!(self, Draft::Draft6 | Draft::Draft7) => {
                Some(("contentEncoding", keywords::content::validate_encoding))
            }
            // Draft 7 and later
            "if" if self >= Draft::Draft7 => Some(("if", keywords::if_::validate)),
            // Draft 2019-09 and later
            "dependentRequired" if self >= Draft::Draft201909 => Some((
                "dependentRequired",
                keywords::dependencies::validate_dependent_required,
            )),
            "dependentSchemas" if self >= Draft::Draft201909 => Some((
                "dependentSchemas",
                keywords::dependencies::validate_dependent_schemas,
            )),
            "unevaluatedItems" if self >= Draft::Draft201909 => Some((
                "unevaluatedItems",
                keywords::unsupported::unevaluated_items,
            )),
            "unevaluatedProperties" if self >= Draft::Draft201909 => Some((
                "unevaluatedProperties",
                keywords::unsupported::unevaluated_properties,
            )),
            "$recursiveRef" if self == Draft::Draft201909 => {
                Some(("$recursiveRef", keywords::unsupported::recursive_ref))
            }
            // Draft 2020-12 specific
            "prefixItems" if self == Draft::Draft202012 => {
                Some(("prefixItems", keywords::prefix_items::validate))
            }
            "$dynamicRef" if self == Draft::Draft202012 => {
                Some(("$dynamicRef", keywords::unsupported::dynamic_ref))
            }
            _ => None,
        }
    }
}

/// The active keyword table: one of the standard drafts, or the
/// null-permissive overlay on top of Draft 7.
#[derive(Debug, Copy, Clone)]
pub(crate) enum Dialect {
    Standard(Draft),
    Lenient,
}

impl Dialect {
    pub(crate) fn draft(self) -> Draft {
        match self {
            Dialect::Standard(draft) => draft,
            Dialect::Lenient => Draft::Draft7,
        }
    }

    pub(crate) fn get_validator(self, keyword: &str) -> Option<DispatchEntry> {
        match self {
            Dialect::Standard(draft) => draft.get_validator(keyword),
            Dialect::Lenient => crate::lenient::get_validator(keyword),
        }
    }
}

/// Get the `Draft` from a JSON Schema URL.
pub fn draft_from_url(url: &str) -> Option<Draft> {
    match url.trim_start_matches("https").trim_start_matches("http") {
        "://json-schema.org/draft/2020-12/schema" => Some(Draft::Draft202012),
        "://json-schema.org/draft/2019-09/schema" => Some(Draft::Draft201909),
        "://json-schema.org/draft-07/schema#" | "://json-schema.org/draft-07/schema" => {
            Some(Draft::Draft7)
        }
        "://json-schema.org/draft-06/schema#" | "://json-schema.org/draft-06/schema" => {
            Some(Draft::Draft6)
        }
        "://json-schema.org/draft-04/schema#" | "://json-schema.org/draft-04/schema" => {
            Some(Draft::Draft4)
        }
        _ => None,
    }
}

/// Get the `Draft` from a JSON Schema. Defaults to Draft 4 when `$schema` is
/// absent or unrecognised.
pub fn draft_from_schema(schema: &Value) -> Draft {
    schema
        .as_object()
        .and_then(|x| x.get("$schema"))
        .and_then(Value::as_str)
        .and_then(draft_from_url)
        .unwrap_or(Draft::Draft4)
}

/// The identifier anchoring `schema` as a resolution scope, if any.
pub(crate) fn id_of(draft: Draft, schema: &Value) -> Option<&str> {
    if let Value::Object(object) = schema {
        object.get(draft.id_keyword()).and_then(Value::as_str)
    } else {
        None
    }
}
