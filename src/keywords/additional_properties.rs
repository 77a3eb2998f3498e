use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    keywords::helpers::find_additional_properties,
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
    let item = match instance {
        Value::Object(item) => item,
        _ => return no_error(),
    };
    match schema {
        Value::Bool(true) => no_error(),
        Value::Bool(false) => {
            let mut unexpected: Vec<String> = find_additional_properties(item, parent)
                .into_iter()
                .cloned()
                .collect();
            if unexpected.is_empty() {
                no_error()
            } else {
                unexpected.sort_unstable();
                error(ValidationError::additional_properties(
                    context.schema_path(),
                    context.instance_path(),
                    instance,
                    unexpected,
                ))
            }
        }
        Value::Object(_) => {
            let mut errors = Vec::new();
            let extras: Vec<String> = find_additional_properties(item, parent)
                .into_iter()
                .cloned()
                .collect();
            for key in extras {
                let value = &item[key.as_str()];
                context.instance_location.push(key);
                errors.extend(validator.descend(context, value, schema));
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
