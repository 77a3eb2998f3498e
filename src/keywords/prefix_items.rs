//! Draft 2020-12 `prefixItems`: the positional array form that used to be
//! spelled `items`.
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
    if let Value::Array(items) = instance {
        let mut errors = Vec::new();
        for (idx, (element, subschema)) in items.iter().zip(subschemas.iter()).enumerate() {
            context.keyword_location.push(idx);
            context.instance_location.push(idx);
            errors.extend(validator.descend(context, element, subschema));
            context.instance_location.pop();
            context.keyword_location.pop();
        }
        errors
    } else {
        no_error()
    }
}

#[cfg(test)]
mod tests {
    use crate::{schemas::Draft, tests_util};
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"prefixItems": [{"type": "integer"}, {"type": "string"}]}), &json!([1, "x"]))]
    #[test_case(&json!({"prefixItems": [{"type": "integer"}]}), &json!([1, "anything"]))]
    #[test_case(&json!({"prefixItems": [{"type": "integer"}]}), &json!([]))]
    fn prefix_items_is_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid_with_draft(Draft::Draft202012, schema, instance)
    }

    #[test_case(&json!({"prefixItems": [{"type": "integer"}]}), &json!(["x"]))]
    fn prefix_items_is_not_valid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid_with_draft(Draft::Draft202012, schema, instance)
    }

    #[test]
    fn schema_path_includes_the_index() {
        tests_util::assert_schema_path_with_draft(
            Draft::Draft202012,
            &json!({"prefixItems": [{"type": "integer"}]}),
            &json!(["x"]),
            "/prefixItems/0/type",
        );
    }
}
