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
    // Sub-errors are only a probe here; the outcome inverts
    if validator.descend(context, instance, schema).is_empty() {
        error(ValidationError::not(
            context.schema_path(),
            context.instance_path(),
            instance,
            schema,
        ))
    } else {
        no_error()
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"not": {"type": "integer"}}), &json!("x"))]
    #[test_case(&json!({"not": false}), &json!(null))]
    fn not_is_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"not": {"type": "integer"}}), &json!(1))]
    #[test_case(&json!({"not": true}), &json!(null))]
    #[test_case(&json!({"not": {}}), &json!(null))]
    fn not_is_not_valid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn error_message() {
        tests_util::expect_errors(
            &json!({"not": {"type": "integer"}}),
            &json!(1),
            &[r#"{"type":"integer"} is not allowed for 1"#],
        );
    }

    #[test]
    fn negation_inverts_acceptance() {
        let inner = json!({"minimum": 2});
        let negated = json!({"not": {"minimum": 2}});
        for instance in [json!(1), json!(2), json!(3), json!("x"), json!(null)] {
            assert_eq!(
                crate::is_valid(&negated, &instance),
                !crate::is_valid(&inner, &instance),
                "{}",
                instance
            );
        }
    }
}
