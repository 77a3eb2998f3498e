use crate::{
    context::Context,
    error::{error, ValidationError},
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
        context.keyword_location.push(idx);
        errors.extend(validator.descend(context, instance, subschema));
        context.keyword_location.pop();
    }
    errors
}
