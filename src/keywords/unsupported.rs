//! Keywords that are recognised by newer dialects but outside this crate's
//! coverage. Each reports a single validation error naming the construct;
//! the rest of the document keeps validating.
use crate::{
    context::Context,
    error::{error, ValidationError},
    validator::Validator,
};
use serde_json::{Map, Value};

macro_rules! unsupported_keyword {
    ($name:ident, $keyword:tt) => {
        pub(crate) fn $name<'s, 'i>(
            _: &Validator<'s>,
            context: &mut Context,
            _: &'s Value,
            instance: &'i Value,
            _: &'s Map<String, Value>,
        ) -> Vec<ValidationError<'i>> {
            error(ValidationError::unsupported(
                context.schema_path(),
                context.instance_path(),
                instance,
                $keyword,
            ))
        }
    };
}

unsupported_keyword!(unevaluated_items, "unevaluatedItems");
unsupported_keyword!(unevaluated_properties, "unevaluatedProperties");
unsupported_keyword!(recursive_ref, "$recursiveRef");
unsupported_keyword!(dynamic_ref, "$dynamicRef");
