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
    if let Value::Array(items) = instance {
        for (idx, element) in items.iter().enumerate() {
            context.instance_location.push(idx);
            let element_errors = validator.descend(context, element, schema);
            context.instance_location.pop();
            if element_errors.is_empty() {
                return no_error();
            }
        }
        error(ValidationError::contains(
            context.schema_path(),
            context.instance_path(),
            instance,
        ))
    } else {
        no_error()
    }
}
