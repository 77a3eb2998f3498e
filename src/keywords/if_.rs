use crate::{
    context::Context,
    error::{no_error, ValidationError},
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
    // The condition's own errors are discarded; only its outcome matters
    let condition_holds = validator.descend(context, instance, schema).is_empty();
    let branch = if condition_holds {
        parent.get("then")
    } else {
        parent.get("else")
    };
    match branch {
        Some(subschema) => {
            // The driver pushed `if`; the branch reports under its own keyword
            context.keyword_location.pop();
            context
                .keyword_location
                .push(if condition_holds { "then" } else { "else" });
            let errors = validator.descend(context, instance, subschema);
            context.keyword_location.pop();
            context.keyword_location.push("if");
            errors
        }
        None => no_error(),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"if": {"minimum": 0}, "then": {"multipleOf": 2}}), &json!(4))]
    #[test_case(&json!({"if": {"minimum": 0}, "then": {"multipleOf": 2}}), &json!(-1); "failed condition without else passes")]
    #[test_case(&json!({"if": {"minimum": 0}, "else": {"multipleOf": 2}}), &json!(-2))]
    #[test_case(&json!({"if": {"minimum": 0}, "else": {"multipleOf": 2}}), &json!(3); "held condition without then passes")]
    #[test_case(&json!({"then": {"multipleOf": 2}}), &json!(3); "then is inert without if")]
    #[test_case(&json!({"else": {"multipleOf": 2}}), &json!(3); "else is inert without if")]
    fn if_then_else_is_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"if": {"minimum": 0}, "then": {"multipleOf": 2}}), &json!(3))]
    #[test_case(&json!({"if": {"minimum": 0}, "else": {"multipleOf": 2}}), &json!(-1))]
    #[test_case(&json!({"if": {"minimum": 0}, "then": {"multipleOf": 2}, "else": {"multipleOf": 3}}), &json!(-1))]
    fn if_then_else_is_not_valid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test_case(&json!({"if": {"minimum": 0}, "else": {"multipleOf": 2}}), &json!(-1), "/else/multipleOf")]
    #[test_case(&json!({"if": {"minimum": 0}, "then": {"multipleOf": 2}}), &json!(3), "/then/multipleOf")]
    #[test_case(&json!({"if": {"minimum": 0}, "then": {"multipleOf": 2}, "else": {"multipleOf": 2}}), &json!(-1), "/else/multipleOf")]
    #[test_case(&json!({"if": {"minimum": 0}, "then": {"multipleOf": 2}, "else": {"multipleOf": 2}}), &json!(3), "/then/multipleOf")]
    fn schema_path(schema: &Value, instance: &Value, expected: &str) {
        tests_util::assert_schema_path(schema, instance, expected)
    }
}
