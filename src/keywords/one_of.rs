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
    let mut valid_count = 0_usize;
    for (idx, subschema) in subschemas.iter().enumerate() {
        context.keyword_location.push(idx);
        let branch_errors = validator.descend(context, instance, subschema);
        context.keyword_location.pop();
        if branch_errors.is_empty() {
            valid_count += 1;
            if valid_count > 1 {
                return error(ValidationError::one_of_multiple_valid(
                    context.schema_path(),
                    context.instance_path(),
                    instance,
                ));
            }
        }
    }
    if valid_count == 1 {
        no_error()
    } else {
        error(ValidationError::one_of_not_valid(
            context.schema_path(),
            context.instance_path(),
            instance,
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(1))]
    #[test_case(&json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(2.5))]
    fn one_of_is_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(1.5); "no branch matches")]
    #[test_case(&json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(3); "two branches match")]
    #[test_case(&json!({"oneOf": []}), &json!(null))]
    fn one_of_is_not_valid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn error_messages() {
        tests_util::expect_errors(
            &json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}),
            &json!(1.1),
            &["1.1 is not valid under any of the schemas listed in the 'oneOf' keyword"],
        );
        tests_util::expect_errors(
            &json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}),
            &json!(3),
            &["3 is valid under more than one of the schemas listed in the 'oneOf' keyword"],
        );
    }
}
