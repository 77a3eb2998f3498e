use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    primitive_type::PrimitiveType,
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
    match schema {
        Value::String(type_name) => match PrimitiveType::from_name(type_name) {
            Some(primitive_type) => {
                if primitive_type.admits(instance) {
                    no_error()
                } else {
                    error(ValidationError::single_type_error(
                        context.schema_path(),
                        context.instance_path(),
                        instance,
                        primitive_type,
                    ))
                }
            }
            None => error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            )),
        },
        Value::Array(type_names) => {
            let mut types = Vec::with_capacity(type_names.len());
            for type_name in type_names {
                match type_name.as_str().and_then(PrimitiveType::from_name) {
                    Some(primitive_type) => types.push(primitive_type),
                    None => {
                        return error(ValidationError::schema(
                            context.schema_path(),
                            context.instance_path(),
                            instance,
                        ))
                    }
                }
            }
            if types
                .iter()
                .any(|primitive_type| primitive_type.admits(instance))
            {
                no_error()
            } else {
                error(ValidationError::multiple_type_error(
                    context.schema_path(),
                    context.instance_path(),
                    instance,
                    types,
                ))
            }
        }
        _ => error(ValidationError::schema(
            context.schema_path(),
            context.instance_path(),
            instance,
        )),
    }
}
