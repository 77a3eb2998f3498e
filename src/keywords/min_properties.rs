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
    let limit = match helpers::limit_u64(schema) {
        Some(limit) => limit,
        None => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    if let Value::Object(item) = instance {
        if (item.len() as u64) < limit {
            return error(ValidationError::min_properties(
                context.schema_path(),
                context.instance_path(),
                instance,
                limit,
            ));
        }
    }
    no_error()
}
