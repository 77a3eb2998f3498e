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
    parent: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    // Only meaningful when `items` is the positional array form; with a
    // single-schema `items` there are no "additional" elements
    let prefix_len = match parent.get("items") {
        Some(Value::Array(subschemas)) => subschemas.len(),
        _ => return no_error(),
    };
    let items = match instance {
        Value::Array(items) => items,
        _ => return no_error(),
    };
    match schema {
        Value::Bool(true) => no_error(),
        Value::Bool(false) => {
            if items.len() > prefix_len {
                error(ValidationError::additional_items(
                    context.schema_path(),
                    context.instance_path(),
                    instance,
                    prefix_len,
                ))
            } else {
                no_error()
            }
        }
        Value::Object(_) => {
            let mut errors = Vec::new();
            for (idx, element) in items.iter().enumerate().skip(prefix_len) {
                context.instance_location.push(idx);
                errors.extend(validator.descend(context, element, schema));
                context.instance_location.pop();
            }
            errors
        }
        _ => error(ValidationError::schema(
            context.schema_path(),
            context.instance_path(),
            instance,
        )),
    }
}
