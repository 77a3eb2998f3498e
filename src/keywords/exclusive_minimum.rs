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
    if let Value::Number(item) = instance {
        if !helpers::greater_than(item, limit) {
            return error(ValidationError::exclusive_minimum(
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

    #[test_case(&json!({"exclusiveMinimum": 1}), &json!(1.5))]
    #[test_case(&json!({"exclusiveMinimum": 1.0}), &json!(2))]
    #[test_case(&json!({"exclusiveMinimum": 1}), &json!("0"); "non-numbers pass")]
    fn exclusive_minimum_is_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"exclusiveMinimum": 1}), &json!(1.0); "the bound itself fails")]
    #[test_case(&json!({"exclusiveMinimum": 1.0}), &json!(1))]
    #[test_case(&json!({"exclusiveMinimum": 1}), &json!(0))]
    fn exclusive_minimum_is_not_valid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn error_message() {
        tests_util::expect_errors(
            &json!({"exclusiveMinimum": 1}),
            &json!(1.0),
            &["1.0 is less than or equal to the minimum of 1"],
        );
    }
}
