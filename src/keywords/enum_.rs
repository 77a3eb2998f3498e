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
    if let Value::Array(options) = schema {
        if options.iter().any(|option| helpers::equal(instance, option)) {
            no_error()
        } else {
            error(ValidationError::enumeration(
                context.schema_path(),
                context.instance_path(),
                instance,
                options,
            ))
        }
    } else {
        error(ValidationError::schema(
            context.schema_path(),
            context.instance_path(),
            instance,
        ))
    }
}
