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
    let subschemas = match schema {
        Value::Array(subschemas) => subschemas,
        _ => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    for (idx, subschema) in subschemas.iter().enumerate() {
        context.keyword_location.push(idx);
        let branch_errors = validator.descend(context, instance, subschema);
        context.keyword_location.pop();
        if branch_errors.is_empty() {
            // First success wins; earlier branch failures are discarded
            return no_error();
        }
    }
    error(ValidationError::any_of(
        context.schema_path(),
        context.instance_path(),
        instance,
    ))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"anyOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(1))]
    #[test_case(&json!({"anyOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(2.5))]
    #[test_case(&json!({"anyOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(3))]
    fn any_of_is_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"anyOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(1.5))]
    #[test_case(&json!({"anyOf": []}), &json!(null); "no branch can succeed")]
    fn any_of_is_not_valid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn error_message() {
        tests_util::expect_errors(
            &json!({"anyOf": [{"type": "integer"}, {"minimum": 2}]}),
            &json!(1.5),
            &["1.5 is not valid under any of the schemas listed in the 'anyOf' keyword"],
        );
    }

    #[test]
    fn schema_path() {
        tests_util::assert_schema_path(
            &json!({"anyOf": [{"type": "integer"}]}),
            &json!(1.5),
            "/anyOf",
        )
    }
}
