use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    keywords::helpers,
    validator::Validator,
};
use serde_json::{Map, Value};

pub(crate) fn validate<'s, 'i>(
    _: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    _: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    let limit = match schema {
        Value::Number(limit) => limit,
        _ => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    if let Value::Number(item) = instance {
        if !helpers::less_than(item, limit) {
            return error(ValidationError::exclusive_maximum(
                context.schema_path(),
                context.instance_path(),
                instance,
                limit,
            ));
        }
    }
    no_error()
}
