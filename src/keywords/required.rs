use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
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
    let names = match schema {
        Value::Array(names) => names,
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
        for name in names {
            match name {
                Value::String(property) => {
                    // Presence only; an explicit `null` value satisfies the check
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
                    return error(ValidationError::schema(
                        context.schema_path(),
                        context.instance_path(),
                        instance,
                    ))
                }
            }
        }
        errors
    } else {
        no_error()
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"required": ["a"]}), &json!({"a": 1}))]
    #[test_case(&json!({"required": ["a"]}), &json!({"a": null}); "null still counts as present")]
    #[test_case(&json!({"required": []}), &json!({}))]
    #[test_case(&json!({"required": ["a"]}), &json!([]); "non-objects pass")]
    fn required_is_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test]
    fn all_missing_properties_are_reported() {
        tests_util::expect_errors(
            &json!({"required": ["foo", "bar"]}),
            &json!({}),
            &[
                r#""foo" is a required property"#,
                r#""bar" is a required property"#,
            ],
        );
    }

    #[test]
    fn schema_path() {
        tests_util::assert_schema_path(&json!({"required": ["a"]}), &json!({}), "/required")
    }
}
