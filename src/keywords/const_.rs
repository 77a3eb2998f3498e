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
    if helpers::equal(instance, schema) {
        no_error()
    } else {
        error(ValidationError::constant(
            context.schema_path(),
            context.instance_path(),
            instance,
            schema,
        ))
    }
}
