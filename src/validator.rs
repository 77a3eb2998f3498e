//! The validation driver: owns the dispatch table and the reference index,
//! and walks instances against the schema in place.
use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    keywords,
    paths::JsonPointer,
    primitive_type::PrimitiveType,
    resolver::ReferenceIndex,
    schemas::{draft_from_schema, Dialect, Draft},
};
use serde_json::Value;

/// A reusable validator for one schema document.
///
/// Construction selects the dialect from `$schema` (defaulting to Draft 4)
/// and indexes every identifier reachable in the schema. The validator is
/// immutable afterwards and can be shared across threads; every
/// [`Validator::validate`] call carries its own mutable state.
#[derive(Debug)]
pub struct Validator<'s> {
    root: &'s Value,
    dialect: Dialect,
    index: ReferenceIndex<'s>,
}

impl<'s> Validator<'s> {
    /// Build a validator for `schema`.
    ///
    /// Fails when the schema root is neither a boolean nor an object, or
    /// when an identifier within it is not a parseable URI reference.
    /// Missing `$ref` targets are not an error here - they are reported
    /// during validation, at the referencing location.
    pub fn new(schema: &'s Value) -> Result<Validator<'s>, ValidationError<'s>> {
        let draft = draft_from_schema(schema);
        Validator::with_dialect(schema, Dialect::Standard(draft))
    }

    /// Build a validator using the null-permissive Draft 7 overlay.
    pub fn lenient(schema: &'s Value) -> Result<Validator<'s>, ValidationError<'s>> {
        Validator::with_dialect(schema, Dialect::Lenient)
    }

    #[cfg(test)]
    pub(crate) fn with_draft(
        schema: &'s Value,
        draft: Draft,
    ) -> Result<Validator<'s>, ValidationError<'s>> {
        Validator::with_dialect(schema, Dialect::Standard(draft))
    }

    fn with_dialect(
        schema: &'s Value,
        dialect: Dialect,
    ) -> Result<Validator<'s>, ValidationError<'s>> {
        if !matches!(schema, Value::Bool(_) | Value::Object(_)) {
            return Err(ValidationError::multiple_type_error(
                JsonPointer::default(),
                JsonPointer::default(),
                schema,
                vec![PrimitiveType::Boolean, PrimitiveType::Object],
            ));
        }
        let index = ReferenceIndex::new(dialect.draft(), schema)?;
        Ok(Validator {
            root: schema,
            dialect,
            index,
        })
    }

    /// Run validation against `instance` and collect every violation in
    /// document order.
    pub fn validate<'i>(&self, instance: &'i Value) -> ValidationResult<'i> {
        let mut context = Context::new();
        let errors = self.descend(&mut context, instance, self.root);
        debug_assert!(context.instance_location.is_empty());
        debug_assert!(context.keyword_location.is_empty());
        ValidationResult { errors }
    }

    /// Run validation against `instance` but return a boolean result only.
    #[must_use]
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validate(instance).is_valid()
    }

    /// The draft this validator applies.
    #[must_use]
    pub fn draft(&self) -> Draft {
        self.dialect.draft()
    }

    pub(crate) fn root(&self) -> &'s Value {
        self.root
    }

    pub(crate) fn index(&self) -> &ReferenceIndex<'s> {
        &self.index
    }

    /// Validate `instance` against one sub-schema, dispatching each present
    /// keyword through the active table. Keys that are not registered
    /// keywords are ignored; error buffers are concatenated in the schema's
    /// key order.
    pub(crate) fn descend<'i>(
        &self,
        context: &mut Context,
        instance: &'i Value,
        schema: &'s Value,
    ) -> Vec<ValidationError<'i>> {
        match schema {
            Value::Bool(true) => no_error(),
            Value::Bool(false) => error(ValidationError::false_schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            )),
            Value::Object(object) => {
                if !self.draft().supports_adjacent_validation() {
                    if let Some(reference) = object.get("$ref") {
                        // Before 2019-09, `$ref` suppresses its sibling keywords
                        context.keyword_location.push("$ref");
                        let errors =
                            keywords::ref_::validate(self, context, reference, instance, object);
                        context.keyword_location.pop();
                        return errors;
                    }
                }
                let mut errors = Vec::new();
                for (keyword, value) in object {
                    if let Some((name, func)) = self.dialect.get_validator(keyword) {
                        context.keyword_location.push(name);
                        errors.extend(func(self, context, value, instance, object));
                        context.keyword_location.pop();
                    }
                }
                errors
            }
            // Anything else in schema position is a malformed schema; report
            // it in place instead of unwinding
            _ => error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            )),
        }
    }
}

/// The outcome of one validation run.
#[derive(Debug)]
pub struct ValidationResult<'i> {
    errors: Vec<ValidationError<'i>>,
}

impl<'i> ValidationResult<'i> {
    pub(crate) fn from_errors(errors: Vec<ValidationError<'i>>) -> Self {
        ValidationResult { errors }
    }

    /// `true` iff no violations were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The collected violations, in document order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError<'i>] {
        &self.errors
    }

    /// Consume the result and take ownership of the violations.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError<'i>> {
        self.errors
    }
}
