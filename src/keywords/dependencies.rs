use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    validator::Validator,
};
use serde_json::{Map, Value};

fn validate_property_dependency<'i>(
    context: &mut Context,
    names: &[Value],
    item: &Map<String, Value>,
    instance: &'i Value,
    errors: &mut Vec<ValidationError<'i>>,
) {
    for name in names {
        match name {
            Value::String(property) => {
                if !item.contains_key(property) {
                    errors.push(ValidationError::required(
                        context.schema_path(),
                        context.instance_path(),
                        instance,
                        name,
                    ));
                }
            }
            _ => {
                errors.push(ValidationError::schema(
                    context.schema_path(),
                    context.instance_path(),
                    instance,
                ));
                return;
            }
        }
    }
}

/// `dependencies`: the draft-4/6/7 combined form. Array values demand the
/// named properties; schema values apply to the whole instance.
pub(crate) fn validate<'s, 'i>(
    validator: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    _: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    let map = match schema {
        Value::Object(map) => map,
        _ => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    if let Value::Object(item) = instance {
        let mut errors = Vec::new();
        for (property, dependency) in map {
            if !item.contains_key(property) {
                continue;
            }
            context.keyword_location.push(property.clone());
            match dependency {
                Value::Array(names) => {
                    validate_property_dependency(context, names, item, instance, &mut errors);
                }
                Value::Object(_) | Value::Bool(_) => {
                    errors.extend(validator.descend(context, instance, dependency));
                }
                _ => errors.push(ValidationError::schema(
                    context.schema_path(),
                    context.instance_path(),
                    instance,
                )),
            }
            context.keyword_location.pop();
        }
        errors
    } else {
        no_error()
    }
}

/// `dependentRequired` (2019-09+): the array half of `dependencies`.
pub(crate) fn validate_dependent_required<'s, 'i>(
    _: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    _: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    let map = match schema {
        Value::Object(map) => map,
        _ => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    if let Value::Object(item) = instance {
        let mut errors = Vec::new();
        for (property, dependency) in map {
            if !item.contains_key(property) {
                continue;
            }
            context.keyword_location.push(property.clone());
            match dependency {
                Value::Array(names) => {
                    validate_property_dependency(context, names, item, instance, &mut errors);
                }
                _ => errors.push(ValidationError::schema(
                    context.schema_path(),
                    context.instance_path(),
                    instance,
                )),
            }
            context.keyword_location.pop();
        }
        errors
    } else {
        no_error()
    }
}

/// `dependentSchemas` (2019-09+): the schema half of `dependencies`.
pub(crate) fn validate_dependent_schemas<'s, 'i>(
    validator: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    _: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    let map = match schema {
        Value::Object(map) => map,
        _ => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    if let Value::Object(item) = instance {
        let mut errors = Vec::new();
        for (property, dependency) in map {
            if !item.contains_key(property) {
                continue;
            }
            context.keyword_location.push(property.clone());
            errors.extend(validator.descend(context, instance, dependency));
            context.keyword_location.pop();
        }
        errors
    } else {
        no_error()
    }
}
