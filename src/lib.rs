//! # schemawalk
//!
//! A JSON Schema validator that walks the schema in place instead of
//! compiling it first. Every violation is reported with two JSON Pointers -
//! one into the instance, one into the schema - and validation never stops
//! at the first error.
//!
//! Supports:
//!   - JSON Schema drafts 4, 6 and 7 (Draft 4 is the default when `$schema`
//!     is absent), plus the 2019-09 and 2020-12 dialects without annotation
//!     collection and `unevaluated*` keywords;
//!   - A null-permissive Draft 7 variant for instances that spell "absent"
//!     as `null`;
//!   - Local `$ref` resolution over `$id`/`id` anchors and JSON Pointer
//!     fragments. References are never fetched from the network.
//!
//! ## Example:
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({"maxLength": 5});
//! let instance = json!("foo bar");
//! let result = schemawalk::validate(&schema, &instance);
//! assert!(!result.is_valid());
//! for error in result.errors() {
//!     println!(
//!         "{} at instance path {:?}, schema path {:?}",
//!         error,
//!         error.instance_path.to_string(),
//!         error.schema_path.to_string(),
//!     );
//! }
//! ```
#![warn(
    clippy::doc_markdown,
    clippy::redundant_closure,
    clippy::explicit_iter_loop,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::print_stdout,
    clippy::cast_possible_truncation,
    clippy::map_unwrap_or,
    clippy::trivially_copy_pass_by_ref,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    variant_size_differences
)]
mod context;
pub mod error;
mod keywords;
mod lenient;
pub mod paths;
pub mod primitive_type;
mod resolver;
mod schemas;
mod validator;

pub use error::{TypeKind, ValidationError, ValidationErrorKind};
pub use paths::{JsonPointer, PathChunk};
pub use schemas::{draft_from_schema, draft_from_url, Draft};
pub use validator::{ValidationResult, Validator};

use serde_json::Value;

/// Validate `instance` against `schema` in one shot.
///
/// The dialect comes from `$schema` and defaults to Draft 4. Malformed
/// schemas are reported through the result, never as a panic.
///
/// ```rust
/// use serde_json::json;
///
/// let schema = json!({"minimum": 5});
/// assert!(schemawalk::validate(&schema, &json!(7)).is_valid());
/// assert!(!schemawalk::validate(&schema, &json!(3)).is_valid());
/// ```
pub fn validate<'i>(schema: &Value, instance: &'i Value) -> ValidationResult<'i> {
    match Validator::new(schema) {
        Ok(validator) => validator.validate(instance),
        Err(error) => ValidationResult::from_errors(vec![error.into_owned()]),
    }
}

/// Validate `instance` against `schema` using the null-permissive Draft 7
/// overlay: null instances satisfy `type`, `enum` and
/// `additionalProperties`, null-valued properties are skipped, and boolean
/// `const: true` constraints accept any boolean.
///
/// Every instance accepted by [`validate`] under Draft 7 is accepted here
/// too.
pub fn validate_lenient<'i>(schema: &Value, instance: &'i Value) -> ValidationResult<'i> {
    match Validator::lenient(schema) {
        Ok(validator) => validator.validate(instance),
        Err(error) => ValidationResult::from_errors(vec![error.into_owned()]),
    }
}

/// A shortcut for validating `instance` against `schema` when only the
/// boolean outcome matters.
///
/// ```rust
/// use serde_json::json;
///
/// assert!(schemawalk::is_valid(&json!({"maxLength": 5}), &json!("foo")));
/// ```
#[must_use]
#[inline]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    validate(schema, instance).is_valid()
}

#[cfg(test)]
pub(crate) mod tests_util {
    use crate::{schemas::Draft, Validator};
    use serde_json::Value;

    // Keyword tests run under the reference dialect (Draft 7) unless the
    // schema pins `$schema` itself
    fn build<'s>(schema: &'s Value) -> Validator<'s> {
        if schema.get("$schema").is_some() {
            Validator::new(schema).expect("Invalid schema")
        } else {
            Validator::with_draft(schema, Draft::Draft7).expect("Invalid schema")
        }
    }

    pub(crate) fn is_valid(schema: &Value, instance: &Value) {
        let validator = build(schema);
        let result = validator.validate(instance);
        assert!(
            result.is_valid(),
            "{} should be valid. First error: {}",
            instance,
            result.errors()[0],
        );
        assert!(validator.is_valid(instance));
    }

    pub(crate) fn is_not_valid(schema: &Value, instance: &Value) {
        let validator = build(schema);
        let result = validator.validate(instance);
        assert!(!result.is_valid(), "{} should not be valid", instance);
        assert!(!result.errors().is_empty());
        assert!(!validator.is_valid(instance));
    }

    pub(crate) fn is_valid_with_draft(draft: Draft, schema: &Value, instance: &Value) {
        let validator = Validator::with_draft(schema, draft).expect("Invalid schema");
        let result = validator.validate(instance);
        assert!(
            result.is_valid(),
            "{} should be valid. First error: {}",
            instance,
            result.errors()[0],
        );
    }

    pub(crate) fn is_not_valid_with_draft(draft: Draft, schema: &Value, instance: &Value) {
        let validator = Validator::with_draft(schema, draft).expect("Invalid schema");
        assert!(
            !validator.is_valid(instance),
            "{} should not be valid",
            instance
        );
    }

    pub(crate) fn is_valid_lenient(schema: &Value, instance: &Value) {
        let result = crate::validate_lenient(schema, instance);
        assert!(
            result.is_valid(),
            "{} should be valid under the lenient overlay. First error: {}",
            instance,
            result.errors()[0],
        );
    }

    pub(crate) fn is_not_valid_lenient(schema: &Value, instance: &Value) {
        assert!(
            !crate::validate_lenient(schema, instance).is_valid(),
            "{} should not be valid under the lenient overlay",
            instance
        );
    }

    pub(crate) fn expect_errors(schema: &Value, instance: &Value, expected: &[&str]) {
        let messages: Vec<String> = build(schema)
            .validate(instance)
            .errors()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(messages, expected);
    }

    pub(crate) fn expect_errors_with_draft(
        draft: Draft,
        schema: &Value,
        instance: &Value,
        expected: &[&str],
    ) {
        let validator = Validator::with_draft(schema, draft).expect("Invalid schema");
        let messages: Vec<String> = validator
            .validate(instance)
            .errors()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(messages, expected);
    }

    pub(crate) fn expect_errors_lenient(schema: &Value, instance: &Value, expected: &[&str]) {
        let messages: Vec<String> = crate::validate_lenient(schema, instance)
            .errors()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(messages, expected);
    }

    pub(crate) fn assert_schema_path(schema: &Value, instance: &Value, expected: &str) {
        let result = build(schema).validate(instance);
        let first = result.errors().first().expect("Errors are not empty");
        assert_eq!(first.schema_path.to_string(), expected);
    }

    pub(crate) fn assert_schema_path_with_draft(
        draft: Draft,
        schema: &Value,
        instance: &Value,
        expected: &str,
    ) {
        let validator = Validator::with_draft(schema, draft).expect("Invalid schema");
        let result = validator.validate(instance);
        let first = result.errors().first().expect("Errors are not empty");
        assert_eq!(first.schema_path.to_string(), expected);
    }

    pub(crate) fn assert_instance_path(schema: &Value, instance: &Value, expected: &str) {
        let result = build(schema).validate(instance);
        let first = result.errors().first().expect("Errors are not empty");
        assert_eq!(first.instance_path.to_string(), expected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{schemas::Draft, tests_util};
    use serde_json::{json, Value};

    fn product_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "price": {"type": "number"}
            },
            "required": ["name"]
        })
    }

    #[test]
    fn complete_product_is_valid() {
        let schema = product_schema();
        let instance = json!({"name": "Eggs", "price": 34.99});
        let result = validate(&schema, &instance);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn missing_required_property() {
        let schema = product_schema();
        let instance = json!({"price": 34.99});
        let result = validate(&schema, &instance);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        let error = &result.errors()[0];
        assert_eq!(error.to_string(), r#""name" is a required property"#);
        assert_eq!(error.schema_path.to_string(), "/required");
        assert_eq!(error.instance_path.to_string(), "");
    }

    fn nutrition_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "Sodium": {"type": "integer"},
                "Carbohydrate": {"type": "string", "enum": ["Low", "High"]}
            },
            "required": ["Sodium"],
            "additionalProperties": false
        })
    }

    #[test]
    fn null_values_fail_strictly_but_pass_leniently() {
        let schema = nutrition_schema();
        let instance = json!({"Sodium": 140, "Carbohydrate": null});
        let strict = validate(&schema, &instance);
        assert!(!strict.is_valid());
        assert_eq!(strict.errors().len(), 2);
        assert!(validate_lenient(&schema, &instance).is_valid());
    }

    #[test]
    fn unexpected_properties_fail_under_both_tables() {
        let schema = nutrition_schema();
        let instance = json!({"Sodium": 140, "ExtraField": "x"});
        for result in [
            validate(&schema, &instance),
            validate_lenient(&schema, &instance),
        ] {
            assert!(!result.is_valid());
            let error = &result.errors()[0];
            assert_eq!(error.schema_path.to_string(), "/additionalProperties");
            assert!(error.to_string().contains("ExtraField"), "{}", error);
        }
    }

    #[test]
    fn true_boolean_constants_relax_leniently() {
        let schema = json!({
            "properties": {"a": {"const": true}},
            "allOf": [{"properties": {"a": {"const": true}}}]
        });
        let instance = json!({"a": false});
        tests_util::is_not_valid_with_draft(Draft::Draft7, &schema, &instance);
        assert!(validate_lenient(&schema, &instance).is_valid());
    }

    #[test]
    fn numerically_equal_items_are_not_unique() {
        let schema = json!({"type": "array", "uniqueItems": true});
        let instance = json!([1, 1.0]);
        let result = validate(&schema, &instance);
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].schema_path.to_string(), "/uniqueItems");
    }

    #[test]
    fn reference_into_defs() {
        let schema = json!({"$ref": "#/$defs/x", "$defs": {"x": {"type": "integer"}}});
        let instance = json!("hello");
        let result = validate(&schema, &instance);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].schema_path.to_string(), "/$ref/type");
    }

    #[test]
    fn lenient_admits_a_superset_of_draft_7() {
        let schema = nutrition_schema();
        let instances = [
            json!({"Sodium": 140, "Carbohydrate": "Low"}),
            json!({"Sodium": 140, "Carbohydrate": null}),
            json!({"Sodium": 140, "Carbohydrate": "Medium"}),
            json!({"Sodium": null}),
            json!({"Sodium": 140, "ExtraField": 1}),
            json!(null),
            json!([1, 2]),
            json!({}),
        ];
        for instance in &instances {
            let strict = Validator::with_draft(&schema, Draft::Draft7)
                .unwrap()
                .is_valid(instance);
            let lenient = validate_lenient(&schema, instance).is_valid();
            assert!(
                !strict || lenient,
                "lenient rejected {} which strict accepts",
                instance
            );
        }
    }

    #[test]
    fn empty_containers() {
        tests_util::is_valid(&json!({"type": "array", "uniqueItems": true}), &json!([]));
        tests_util::is_valid(&json!({"type": "object", "properties": {}}), &json!({}));
        tests_util::is_valid(&json!({}), &json!(null));
    }

    #[test]
    fn broken_schema_surfaces_as_result_not_panic() {
        let schema = json!(42);
        let instance = json!(1);
        let result = validate(&schema, &instance);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
    }

    #[test]
    fn test_is_valid() {
        let schema = json!({"minLength": 5});
        let valid = json!("foobar");
        let invalid = json!("foo");
        assert!(is_valid(&schema, &valid));
        assert!(!is_valid(&schema, &invalid));
    }
}
