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
    let limit = match helpers::limit_u64(schema) {
        Some(limit) => limit,
        None => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    if let Value::Object(item) = instance {
        if (item.len() as u64) > limit {
            return error(ValidationError::max_properties(
                context.schema_path(),
                context.instance_path(),
                instance,
                limit,
            ));
        }
    }
    no_error()
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"maxProperties": 2}), &json!({"a": 1}))]
    #[test_case(&json!({"maxProperties": 0}), &json!({}))]
    fn max_properties_is_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test]
    fn error_message() {
        tests_util::expect_errors(
            &json!({"maxProperties": 1}),
            &json!({"a": 1, "b": 2}),
            &[r#"{"a":1,"b":2} has more than 1 property"#],
        );
    }
}
