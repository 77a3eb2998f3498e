use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    validator::Validator,
};
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
        // Instance key order drives error order
        for (name, value) in item {
            if let Some(subschema) = map.get(name) {
                context.keyword_location.push(name.clone());
                context.instance_location.push(name.clone());
                errors.extend(validator.descend(context, value, subschema));
                context.instance_location.pop();
                context.keyword_location.pop();
            }
        }
        errors
    } else {
        no_error()
    }
}
