use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    validator::Validator,
};
use fraction::{BigFraction, BigUint};
use serde_json::{Map, Number, Value};

pub(crate) fn validate<'s, 'i>(
    _: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    _: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    let multiple_of = match schema {
        Value::Number(multiple_of) => multiple_of,
        _ => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    if let Value::Number(item) = instance {
        if !is_multiple_of(item, multiple_of) {
            return error(ValidationError::multiple_of(
                context.schema_path(),
                context.instance_path(),
                instance,
                multiple_of.as_f64().expect("Always valid"),
            ));
        }
    }
    no_error()
}

fn is_multiple_of(item: &Number, multiple_of: &Number) -> bool {
    let item_value = item.as_f64().expect("Always valid");
    let multiple_value = multiple_of.as_f64().expect("Always valid");
    if multiple_value.fract() == 0. {
        // An integral divisor can't divide a value with a fractional part
        return item_value.fract() == 0. && (item_value % multiple_value) == 0.;
    }
    let remainder = (item_value / multiple_value) % 1.;
    if remainder == 0. {
        return true;
    }
    // Binary floating point rounds decimal literals (`0.3 / 0.1` is not 3),
    // so re-divide the decimal renderings as exact fractions and check that
    // nothing is left in the denominator
    match (decimal_fraction(item), decimal_fraction(multiple_of)) {
        (Some(dividend), Some(divisor)) => {
            let ratio = dividend / divisor;
            ratio.denom() == Some(&BigUint::from(1_u8))
        }
        _ => false,
    }
}

/// The number's decimal rendering as an exact fraction, sign dropped.
/// `0.1` becomes 1/10, not the nearby binary fraction `f64` stores.
fn decimal_fraction(number: &Number) -> Option<BigFraction> {
    let rendered = number.to_string();
    let rest = rendered.strip_prefix('-').unwrap_or(&rendered);
    let (mantissa, exponent) = match rest.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().ok()?),
        None => (rest, 0_i32),
    };
    let (integral, fractional) = match mantissa.split_once('.') {
        Some((integral, fractional)) => (integral, fractional),
        None => (mantissa, ""),
    };
    let digits: String = [integral, fractional].concat();
    let numer = BigUint::parse_bytes(digits.as_bytes(), 10)?;
    let shift = exponent - i32::try_from(fractional.len()).ok()?;
    let scale = |steps: u32| {
        let mut value = BigUint::from(1_u8);
        for _ in 0..steps {
            value = value * BigUint::from(10_u8);
        }
        value
    };
    Some(if shift >= 0 {
        BigFraction::new(numer * scale(shift as u32), BigUint::from(1_u8))
    } else {
        BigFraction::new(numer, scale(shift.unsigned_abs()))
    })
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"multipleOf": 2}), &json!(4))]
    #[test_case(&json!({"multipleOf": 1.0}), &json!(4.0))]
    #[test_case(&json!({"multipleOf": 1.5}), &json!(3.0))]
    #[test_case(&json!({"multipleOf": 1.5}), &json!(4.5))]
    #[test_case(&json!({"multipleOf": 0.1}), &json!(0.3); "decimal arithmetic is exact")]
    #[test_case(&json!({"multipleOf": 0.01}), &json!(1.07))]
    #[test_case(&json!({"multipleOf": 0.1}), &json!(-0.3))]
    #[test_case(&json!({"multipleOf": 2}), &json!("3"); "non-numbers pass")]
    fn multiple_of_is_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"multipleOf": 2}), &json!(7))]
    #[test_case(&json!({"multipleOf": 1.0}), &json!(4.5))]
    #[test_case(&json!({"multipleOf": 0.1}), &json!(0.35))]
    fn multiple_of_is_not_valid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn error_message() {
        tests_util::expect_errors(
            &json!({"multipleOf": 2}),
            &json!(7),
            &["7 is not a multiple of 2"],
        );
    }

    #[test_case(&json!({"multipleOf": 2}), &json!(3), "/multipleOf")]
    #[test_case(&json!({"multipleOf": 1.5}), &json!(5), "/multipleOf")]
    fn schema_path(schema: &Value, instance: &Value, expected: &str) {
        tests_util::assert_schema_path(schema, instance, expected)
    }
}
