//! Validators for `contentMediaType` and `contentEncoding` keywords.
use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    validator::Validator,
};
use serde_json::{Map, Value};

fn is_json(instance_string: &str) -> bool {
    serde_json::from_str::<Value>(instance_string).is_ok()
}

fn is_base64(instance_string: &str) -> bool {
    base64::decode(instance_string).is_ok()
}

pub(crate) fn validate_media_type<'s, 'i>(
    _: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    _: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    let media_type = match schema {
        Value::String(media_type) => media_type,
        _ => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    if let Value::String(item) = instance {
        // Only `application/json` has a built-in check; everything else is
        // an annotation
        if media_type == "application/json" && !is_json(item) {
            return error(ValidationError::content_media_type(
                context.schema_path(),
                context.instance_path(),
                instance,
                media_type,
            ));
        }
    }
    no_error()
}

pub(crate) fn validate_encoding<'s, 'i>(
    _: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    _: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    let encoding = match schema {
        Value::String(encoding) => encoding,
        _ => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    if let Value::String(item) = instance {
        if encoding == "base64" && !is_base64(item) {
            return error(ValidationError::content_encoding(
                context.schema_path(),
                context.instance_path(),
                instance,
                encoding,
            ));
        }
    }
    no_error()
}
