use fancy_regex::Regex;
use num_cmp::NumCmp;
use serde_json::{Map, Number, Value};

/// A JSON number widened to the representation `serde_json` actually stores.
/// Comparisons go through `num_cmp` pair by pair so that no precision is
/// lost on the way, `u64::MAX` against `u64::MAX as f64` included.
enum Widened {
    U(u64),
    I(i64),
    F(f64),
}

fn widen(number: &Number) -> Widened {
    if let Some(value) = number.as_u64() {
        Widened::U(value)
    } else if let Some(value) = number.as_i64() {
        Widened::I(value)
    } else {
        Widened::F(number.as_f64().expect("Always valid"))
    }
}

macro_rules! num_rel {
    ($name:ident, $method:ident) => {
        /// Numeric relation by mathematical value across the mixed
        /// u64 / i64 / f64 representations.
        #[inline]
        pub(crate) fn $name(left: &Number, right: &Number) -> bool {
            use Widened::{F, I, U};
            match (widen(left), widen(right)) {
                (U(a), U(b)) => NumCmp::$method(a, b),
                (U(a), I(b)) => NumCmp::$method(a, b),
                (U(a), F(b)) => NumCmp::$method(a, b),
                (I(a), U(b)) => NumCmp::$method(a, b),
                (I(a), I(b)) => NumCmp::$method(a, b),
                (I(a), F(b)) => NumCmp::$method(a, b),
                (F(a), U(b)) => NumCmp::$method(a, b),
                (F(a), I(b)) => NumCmp::$method(a, b),
                (F(a), F(b)) => NumCmp::$method(a, b),
            }
        }
    };
}

num_rel!(numbers_equal, num_eq);
num_rel!(less_than, num_lt);
num_rel!(greater_than, num_gt);

/// Deep equality as `enum`, `const` and `uniqueItems` require it: numbers
/// compare by mathematical value (`1 == 1.0`) and object key order is
/// insignificant.
pub(crate) fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => numbers_equal(left, right),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right).all(|(a, b)| equal(a, b))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, value)| right.get(key).map_or(false, |other| equal(value, other)))
        }
        // Scalars of the remaining kinds carry no representation subtleties
        _ => left == right,
    }
}

/// A count limit from a schema value. Integral floats such as `2.0` are
/// accepted alongside plain integers.
#[inline]
pub(crate) fn limit_u64(value: &Value) -> Option<u64> {
    match value.as_u64() {
        Some(limit) => Some(limit),
        None => value.as_f64().and_then(|limit| {
            if limit >= 0. && limit.fract() == 0. {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                Some(limit as u64)
            } else {
                None
            }
        }),
    }
}

/// The keys of `instance` that are neither listed under the enclosing
/// schema's `properties` nor matched by any of its `patternProperties`
/// patterns. Patterns that fail to compile match nothing here; the
/// `patternProperties` keyword itself reports them.
pub(crate) fn find_additional_properties<'i>(
    instance: &'i Map<String, Value>,
    parent: &Map<String, Value>,
) -> Vec<&'i String> {
    let properties = parent.get("properties").and_then(Value::as_object);
    let patterns: Vec<Regex> = parent
        .get("patternProperties")
        .and_then(Value::as_object)
        .map(|map| {
            map.keys()
                .filter_map(|pattern| Regex::new(pattern).ok())
                .collect()
        })
        .unwrap_or_default();
    instance
        .keys()
        .filter(|key| {
            !properties.map_or(false, |defined| defined.contains_key(key.as_str()))
                && !patterns
                    .iter()
                    .any(|pattern| pattern.is_match(key).unwrap_or(false))
        })
        .collect()
}
