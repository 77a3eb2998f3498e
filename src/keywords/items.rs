use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    schemas::Draft,
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
    let items = match instance {
        Value::Array(items) => items,
        _ => return no_error(),
    };
    match schema {
        // Positional pairing
        Value::Array(subschemas) => {
            if validator.draft() == Draft::Draft202012 {
                // 2020-12 moved the array form to `prefixItems`
                return error(ValidationError::schema(
                    context.schema_path(),
                    context.instance_path(),
                    instance,
                ));
            }
            let mut errors = Vec::new();
            for (idx, (element, subschema)) in items.iter().zip(subschemas.iter()).enumerate() {
                context.keyword_location.push(idx);
                context.instance_location.push(idx);
                errors.extend(validator.descend(context, element, subschema));
                context.instance_location.pop();
                context.keyword_location.pop();
            }
            errors
        }
        // A single schema applies to every element; under 2020-12 only to
        // the elements past the `prefixItems` prefix
        Value::Object(_) | Value::Bool(_) => {
            let skip = if validator.draft() == Draft::Draft202012 {
                parent
                    .get("prefixItems")
                    .and_then(Value::as_array)
                    .map_or(0, Vec::len)
            } else {
                0
            };
            let mut errors = Vec::new();
            for (idx, element) in items.iter().enumerate().skip(skip) {
                context.instance_location.push(idx);
                errors.extend(validator.descend(context, element, schema));
                context.instance_location.pop();
            }
            errors
        }
        _ => error(ValidationError::schema(
            context.schema_path(),
            context.instance_path(),
            instance,
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::{schemas::Draft, tests_util};
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"items": {"type": "integer"}}), &json!([1, 2, 3]))]
    #[test_case(&json!({"items": {"type": "integer"}}), &json!([]))]
    #[test_case(&json!({"items": [{"type": "integer"}, {"type": "string"}]}), &json!([1, "x"]))]
    #[test_case(&json!({"items": [{"type": "integer"}]}), &json!([1, "anything"]); "elements past the array form are unconstrained")]
    #[test_case(&json!({"items": false}), &json!([]))]
    #[test_case(&json!({"items": {"type": "integer"}}), &json!("abc"); "non-arrays pass")]
    fn items_is_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"items": {"type": "integer"}}), &json!([1, "x"]))]
    #[test_case(&json!({"items": [{"type": "integer"}, {"type": "string"}]}), &json!(["x", 1]))]
    #[test_case(&json!({"items": false}), &json!([1]))]
    fn items_is_not_valid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn single_schema_paths() {
        let schema = json!({"items": {"type": "integer"}});
        let instance = json!([1, "x"]);
        tests_util::assert_schema_path(&schema, &instance, "/items/type");
        tests_util::assert_instance_path(&schema, &instance, "/1");
    }

    #[test]
    fn array_form_paths() {
        let schema = json!({"items": [{"type": "integer"}]});
        let instance = json!(["x"]);
        tests_util::assert_schema_path(&schema, &instance, "/items/0/type");
        tests_util::assert_instance_path(&schema, &instance, "/0");
    }

    #[test]
    fn draft_2020_12_items_follow_the_prefix() {
        let schema = json!({"prefixItems": [{"type": "string"}], "items": {"type": "integer"}});
        tests_util::is_valid_with_draft(Draft::Draft202012, &schema, &json!(["x", 1, 2]));
        tests_util::is_not_valid_with_draft(Draft::Draft202012, &schema, &json!(["x", "y"]));
        // The first element is covered by `prefixItems` alone
        tests_util::is_not_valid_with_draft(Draft::Draft202012, &schema, &json!([1]));
    }

    #[test]
    fn draft_2020_12_rejects_the_array_form() {
        tests_util::expect_errors_with_draft(
            Draft::Draft202012,
            &json!({"items": [{"type": "integer"}]}),
            &json!([1]),
            &["Schema error"],
        );
    }
}
