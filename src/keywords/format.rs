//! Validator for the `format` keyword: a fixed built-in set of named string
//! formats. Unknown format names are accepted silently.
use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    validator::Validator,
};
use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::net::{Ipv4Addr, Ipv6Addr};
use url::Url;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}\z").expect("Is a valid regex"));
static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9])(\.[0-9]+)?(([Zz])|([+-]([01][0-9]|2[0-3]):[0-5][0-9]))\z",
    )
    .expect("Is a valid regex")
});
static HOSTNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9])\.)*([A-Za-z0-9]|[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9])\z",
    )
    .expect("Is a valid regex")
});
static URI_REFERENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+:(/?/?))?[^#\\\s]*(#[^\\\s]*)?\z").expect("Is a valid regex"));
static URI_TEMPLATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(?:(?:[^\x00-\x20"'<>%\\^`{|}]|%[0-9a-f]{2})|\{[+#./;?&=,!@|]?(?:[a-z0-9_]|%[0-9a-f]{2})+(?::[1-9][0-9]{0,3}|\*)?(?:,(?:[a-z0-9_]|%[0-9a-f]{2})+(?::[1-9][0-9]{0,3}|\*)?)*})*\z"#,
    )
    .expect("Is a valid regex")
});
static JSON_POINTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(/(([^/~])|(~[01]))*)*\z").expect("Is a valid regex"));
static RELATIVE_JSON_POINTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:0|[1-9][0-9]*)(?:#|(?:/(?:[^~/]|~0|~1)*)*)\z").expect("Is a valid regex")
});

fn is_valid_email(item: &str) -> bool {
    match item.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

fn is_valid_format(format: &str, item: &str) -> bool {
    match format {
        "date" => {
            DATE_RE.is_match(item) && NaiveDate::parse_from_str(item, "%Y-%m-%d").is_ok()
        }
        "date-time" => DateTime::parse_from_rfc3339(item).is_ok(),
        "time" => TIME_RE.is_match(item),
        "email" | "idn-email" => is_valid_email(item),
        "hostname" => {
            !item.ends_with('-')
                && !item.starts_with('-')
                && !item.is_empty()
                && item.chars().count() <= 255
                && item
                    .split('.')
                    .all(|part| part.chars().count() <= 63)
                && HOSTNAME_RE.is_match(item)
        }
        "ipv4" => item.parse::<Ipv4Addr>().is_ok(),
        "ipv6" => item.parse::<Ipv6Addr>().is_ok(),
        "uri" => Url::parse(item).is_ok(),
        "uri-reference" => URI_REFERENCE_RE.is_match(item),
        "uri-template" => URI_TEMPLATE_RE.is_match(item),
        "json-pointer" => JSON_POINTER_RE.is_match(item),
        "relative-json-pointer" => RELATIVE_JSON_POINTER_RE.is_match(item),
        "regex" => fancy_regex::Regex::new(item).is_ok(),
        // Formats outside the built-in set are annotations only
        _ => true,
    }
}

pub(crate) fn validate<'s, 'i>(
    _: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    _: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    let format = match schema {
        Value::String(format) => format,
        _ => {
            return error(ValidationError::schema(
                context.schema_path(),
                context.instance_path(),
                instance,
            ))
        }
    };
    if let Value::String(item) = instance {
        if !is_valid_format(format, item) {
            return error(ValidationError::format(
                context.schema_path(),
                context.instance_path(),
                instance,
                format,
            ));
        }
    }
    no_error()
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"format": "date"}), &json!("2023-02-28"))]
    #[test_case(&json!({"format": "date-time"}), &json!("2018-11-13T20:20:39+00:00"))]
    #[test_case(&json!({"format": "time"}), &json!("20:20:39Z"))]
    #[test_case(&json!({"format": "email"}), &json!("john@example.com"))]
    #[test_case(&json!({"format": "hostname"}), &json!("example.com"))]
    #[test_case(&json!({"format": "ipv4"}), &json!("127.0.0.1"))]
    #[test_case(&json!({"format": "ipv6"}), &json!("::1"))]
    #[test_case(&json!({"format": "uri"}), &json!("https://example.com/a?b=c"))]
    #[test_case(&json!({"format": "uri-reference"}), &json!("/relative/path"))]
    #[test_case(&json!({"format": "json-pointer"}), &json!("/foo/0"))]
    #[test_case(&json!({"format": "relative-json-pointer"}), &json!("1/foo"))]
    #[test_case(&json!({"format": "regex"}), &json!("^a+$"))]
    #[test_case(&json!({"format": "no-such-format"}), &json!("anything"); "unknown formats pass")]
    #[test_case(&json!({"format": "ipv4"}), &json!(42); "non-strings pass")]
    fn format_is_valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"format": "date"}), &json!("2023-02-30"); "day out of range")]
    #[test_case(&json!({"format": "date"}), &json!("23-02-01"))]
    #[test_case(&json!({"format": "date-time"}), &json!("not a timestamp"))]
    #[test_case(&json!({"format": "email"}), &json!("no-at-sign"))]
    #[test_case(&json!({"format": "hostname"}), &json!("-leading.dash"))]
    #[test_case(&json!({"format": "ipv4"}), &json!("2001:db8::1"))]
    #[test_case(&json!({"format": "ipv6"}), &json!("127.0.0.1"))]
    #[test_case(&json!({"format": "uri"}), &json!("not a uri"))]
    #[test_case(&json!({"format": "json-pointer"}), &json!("foo"))]
    #[test_case(&json!({"format": "regex"}), &json!("["))]
    fn format_is_not_valid(schema: &Value, instance: &Value) {
        tests_util::is_not_valid(schema, instance)
    }

    #[test]
    fn error_message() {
        tests_util::expect_errors(
            &json!({"format": "ipv4"}),
            &json!("2001:0db8:85a3:0000:0000:8a2e:0370:7334"),
            &[r#""2001:0db8:85a3:0000:0000:8a2e:0370:7334" is not a "ipv4""#],
        );
    }
}
