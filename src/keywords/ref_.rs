use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    resolver::ResolveError,
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
    let reference = match schema {
        Value::String(reference) => reference,
        _ => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    match validator.index().resolve(reference, validator.root()) {
        Ok(resolved) => {
            let pair = (
                resolved as *const Value as usize,
                instance as *const Value as usize,
            );
            // The same (target, instance) pair further up the stack means a
            // reference cycle; stop descending and accept the repetition
            if !context.active_refs.insert(pair) {
                return no_error();
            }
            let errors = validator.descend(context, instance, resolved);
            context.active_refs.remove(&pair);
            errors
        }
        Err(ResolveError::Invalid) => error(ValidationError::invalid_reference(
            context.schema_path(),
            context.instance_path(),
            instance,
            reference.clone(),
        )),
        Err(ResolveError::Remote(scheme)) => error(ValidationError::unknown_reference_scheme(
            context.schema_path(),
            context.instance_path(),
            instance,
            scheme,
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(
        &json!({"$ref": "#/definitions/x", "definitions": {"x": {"type": "integer"}}}),
        &json!(5)
    )]
    #[test_case(
        &json!({"$ref": "#", "type": "object"}),
        &json!({}); "self reference"
    )]
    #[test_case(
        &json!({"properties": {"a": {"$ref": "#alias"}}, "definitions": {"x": {"$id": "#alias", "type": "integer"}}}),
        &json!({"a": 3}); "location independent anchor"
    )]
    fn ref_is_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(
        &json!({"$ref": "#/definitions/x", "definitions": {"x": {"type": "integer"}}}),
        &json!("hello")
    )]
    fn ref_is_not_valid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn resolved_keyword_path() {
        tests_util::assert_schema_path(
            &json!({"$ref": "#/definitions/x", "definitions": {"x": {"type": "integer"}}}),
            &json!("hello"),
            "/$ref/type",
        );
    }

    #[test]
    fn missing_target_is_a_validation_error() {
        tests_util::expect_errors(
            &json!({"$ref": "#/definitions/nope"}),
            &json!(1),
            &["Invalid reference: #/definitions/nope"],
        );
    }

    #[test]
    fn remote_target_is_refused_not_fetched() {
        tests_util::expect_errors(
            &json!({"$ref": "http://example.com/schema.json"}),
            &json!(1),
            &["Unknown scheme: http"],
        );
    }

    #[test]
    fn siblings_are_suppressed_before_2019_09() {
        // The sibling `type` must not run next to `$ref` in Draft 7
        let schema = json!({
            "$ref": "#/definitions/x",
            "type": "string",
            "definitions": {"x": {"type": "integer"}}
        });
        tests_util::is_valid(&schema, &json!(5));
    }

    #[test]
    fn siblings_apply_from_2019_09() {
        let schema = json!({
            "$schema": "https://json-schema.org/draft/2019-09/schema",
            "$ref": "#/$defs/x",
            "maximum": 3,
            "$defs": {"x": {"type": "integer"}}
        });
        tests_util::is_valid(&schema, &json!(2));
        tests_util::is_not_valid(&schema, &json!(5));
        tests_util::is_not_valid(&schema, &json!("x"));
    }
}
