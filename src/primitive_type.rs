//! The type names a `type` keyword may assert.
use serde_json::{Number, Value};
use std::fmt;

/// One of the seven JSON Schema type names.
///
/// `integer` is not a disjoint type of its own: any number whose
/// mathematical value is integral satisfies it, `1.0` included.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum PrimitiveType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl PrimitiveType {
    /// Parse a `type` keyword operand. Anything outside the seven names of
    /// the specification is a schema authoring error.
    pub(crate) fn from_name(name: &str) -> Option<PrimitiveType> {
        match name {
            "array" => Some(PrimitiveType::Array),
            "boolean" => Some(PrimitiveType::Boolean),
            "integer" => Some(PrimitiveType::Integer),
            "null" => Some(PrimitiveType::Null),
            "number" => Some(PrimitiveType::Number),
            "object" => Some(PrimitiveType::Object),
            "string" => Some(PrimitiveType::String),
            _ => None,
        }
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            PrimitiveType::Array => "array",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Null => "null",
            PrimitiveType::Number => "number",
            PrimitiveType::Object => "object",
            PrimitiveType::String => "string",
        }
    }

    /// Whether `instance` satisfies this type assertion.
    pub(crate) fn admits(self, instance: &Value) -> bool {
        match self {
            PrimitiveType::Array => instance.is_array(),
            PrimitiveType::Boolean => instance.is_boolean(),
            PrimitiveType::Integer => {
                matches!(instance, Value::Number(number) if is_integral(number))
            }
            PrimitiveType::Null => instance.is_null(),
            PrimitiveType::Number => instance.is_number(),
            PrimitiveType::Object => instance.is_object(),
            PrimitiveType::String => instance.is_string(),
        }
    }
}

/// Whether the number's mathematical value is integral; `1.0` counts.
pub(crate) fn is_integral(number: &Number) -> bool {
    number.is_u64() || number.is_i64() || number.as_f64().expect("Always valid").fract() == 0.
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
