//! The null-permissive overlay: Draft 7 semantics with a handful of keyword
//! entries swapped for null-tolerant versions. Instances produced by systems
//! that encode "absent" as `null` validate under this table without schema
//! changes; everything else behaves exactly like Draft 7.
use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    keywords::{self, KeywordFn},
    schemas::{DispatchEntry, Draft},
    validator::Validator,
};
use serde_json::{Map, Value};

/// The Draft 7 table with exactly six entries replaced.
pub(crate) fn get_validator(keyword: &str) -> Option<DispatchEntry> {
    match keyword {
        "properties" => Some(("properties", properties as KeywordFn)),
        "type" => Some(("type", type_)),
        "enum" => Some(("enum", enum_)),
        "additionalProperties" => Some(("additionalProperties", additional_properties)),
        "const" => Some(("const", const_)),
        "allOf" => Some(("allOf", all_of)),
        _ => Draft::Draft7.get_validator(keyword),
    }
}

/// `properties`, except a null instance passes outright and entries whose
/// instance value is null are skipped without descending.
fn properties<'s, 'i>(
    validator: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    _: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    let map = match schema {
        Value::Object(map) => map,
        _ => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    match instance {
        Value::Null => no_error(),
        Value::Object(item) => {
            let mut errors = Vec::new();
            for (name, value) in item {
                if value.is_null() {
                    continue;
                }
                if let Some(subschema) = map.get(name) {
                    context.keyword_location.push(name.clone());
                    context.instance_location.push(name.clone());
                    errors.extend(validator.descend(context, value, subschema));
                    context.instance_location.pop();
                    context.keyword_location.pop();
                }
            }
            errors
        }
        _ => no_error(),
    }
}

/// `type`, except a null instance satisfies every type assertion.
fn type_<'s, 'i>(
    validator: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    parent: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    if instance.is_null() {
        return no_error();
    }
    keywords::type_::validate(validator, context, schema, instance, parent)
}

/// `enum`, except a null instance passes unconditionally.
fn enum_<'s, 'i>(
    validator: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    parent: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    if instance.is_null() {
        return no_error();
    }
    keywords::enum_::validate(validator, context, schema, instance, parent)
}

/// `additionalProperties`, except a null instance passes unconditionally.
fn additional_properties<'s, 'i>(
    validator: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    parent: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    if instance.is_null() {
        return no_error();
    }
    keywords::additional_properties::validate(validator, context, schema, instance, parent)
}

/// `const`, except `const: true` accepts any boolean instance.
fn const_<'s, 'i>(
    validator: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    parent: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    if schema == &Value::Bool(true) && instance.is_boolean() {
        return no_error();
    }
    keywords::const_::validate(validator, context, schema, instance, parent)
}

/// Whether any entry of the subschema's `properties` pins a key to
/// `const: true`.
fn asserts_true_constant(subschema: &Value) -> bool {
    subschema
        .get("properties")
        .and_then(Value::as_object)
        .map_or(false, |properties| {
            properties.values().any(|property_schema| {
                property_schema
                    .get("const")
                    .map_or(false, |constant| constant == &Value::Bool(true))
            })
        })
}

/// `allOf`, except branches constraining some property to `const: true` are
/// skipped entirely.
fn all_of<'s, 'i>(
    validator: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    _: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    let subschemas = match schema {
        Value::Array(subschemas) => subschemas,
        _ => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    let mut errors = Vec::new();
    for (idx, subschema) in subschemas.iter().enumerate() {
        if asserts_true_constant(subschema) {
            continue;
        }
        context.keyword_location.push(idx);
        errors.extend(validator.descend(context, instance, subschema));
        context.keyword_location.pop();
    }
    errors
}
