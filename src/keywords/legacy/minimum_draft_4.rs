//! Draft 4 `minimum`: the bound turns exclusive when the sibling
//! `exclusiveMinimum` is `true`.
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
    parent: &'s Map<String, Value>,
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
    let exclusive = matches!(parent.get("exclusiveMinimum"), Some(Value::Bool(true)));
    if let Value::Number(item) = instance {
        if exclusive {
            if !helpers::greater_than(item, limit) {
                return error(ValidationError::exclusive_minimum(
                    context.schema_path(),
                    context.instance_path(),
                    instance,
                    limit,
                ));
            }
        } else if helpers::less_than(item, limit) {
            return error(ValidationError::minimum(
                context.schema_path(),
                context.instance_path(),
                instance,
                limit,
            ));
        }
    }
    no_error()
}
