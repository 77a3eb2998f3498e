use crate::{
    context::Context,
    error::{no_error, ValidationError},
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
    if let Value::Object(item) = instance {
        let mut errors = Vec::new();
        for key in item.keys() {
            // Each key is validated as a string instance of its own; the
            // name value lives only for this check, so sub-errors are
            // detached from it before being wrapped
            let name = Value::String(key.clone());
            for sub_error in validator.descend(context, &name, schema) {
                errors.push(ValidationError::property_names(
                    context.schema_path(),
                    context.instance_path(),
                    instance,
                    sub_error,
                ));
            }
        }
        errors
    } else {
        no_error()
    }
}
