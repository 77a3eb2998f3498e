use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    validator::Validator,
};
use fancy_regex::Regex;
use serde_json::{Map, Value};

pub(crate) fn validate<'s, 'i>(
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
    if let Value::Object(item) = instance {
        let mut errors = Vec::new();
        for (pattern, subschema) in map {
            context.keyword_location.push(pattern.clone());
            match Regex::new(pattern) {
                Ok(compiled) => {
                    for (key, value) in item {
                        if compiled.is_match(key).unwrap_or(false) {
                            context.instance_location.push(key.clone());
                            errors.extend(validator.descend(context, value, subschema));
                            context.instance_location.pop();
                        }
                    }
                }
                Err(_) => errors.push(ValidationError::invalid_regex(
                    context.schema_path(),
                    context.instance_path(),
                    instance,
                    pattern,
                )),
            }
            context.keyword_location.pop();
        }
        errors
    } else {
        no_error()
    }
}
