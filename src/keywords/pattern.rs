use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    validator::Validator,
};
use fancy_regex::Regex;
use serde_json::{Map, Value};

pub(crate) fn validate<'s, 'i>(
    _: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    _: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    let pattern = match schema {
        Value::String(pattern) => pattern,
        _ => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    if let Value::String(item) = instance {
        let compiled = match Regex::new(pattern) {
            Ok(compiled) => compiled,
            // A broken pattern is the schema author's bug; report it at this
            // location instead of unwinding
            Err(_) => {
                return error(ValidationError::invalid_regex(
                    context.schema_path(),
                    context.instance_path(),
                    instance,
                    pattern,
                ))
            }
        };
        // The match is unanchored; backtracker blowups count as no match
        if !compiled.is_match(item).unwrap_or(false) {
            return error(ValidationError::pattern(
                context.schema_path(),
                context.instance_path(),
                instance,
                pattern,
            ));
        }
    }
    no_error()
}
