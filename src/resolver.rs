//! Reference index. Implements the lookup logic required by the `$ref`
//! keyword. Resolution is strictly local: identifiers are collected from the
//! schema itself, and references leaving the document are refused at
//! validation time instead of being fetched.
use crate::schemas::{id_of, Draft};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use serde_json::Value;
use url::Url;

pub(crate) const DEFAULT_ROOT_URL: &str = "json-schema:///";

pub(crate) static DEFAULT_SCOPE: Lazy<Url> =
    Lazy::new(|| Url::parse(DEFAULT_ROOT_URL).expect("Is a valid URL"));

/// Why a reference could not be resolved.
#[derive(Debug)]
pub(crate) enum ResolveError {
    /// The reference is syntactically broken or its target does not exist.
    Invalid,
    /// The reference points outside the document via a retrievable scheme.
    Remote(String),
}

#[derive(Debug)]
pub(crate) struct ReferenceIndex<'a> {
    // canonical id -> sub-schema mapping; ids are composed against the
    // enclosing scope, with `DEFAULT_ROOT_URL` standing in for an absent
    // root id
    schemas: AHashMap<String, &'a Value>,
    scope: Url,
}

impl<'a> ReferenceIndex<'a> {
    pub(crate) fn new(draft: Draft, schema: &'a Value) -> Result<Self, url::ParseError> {
        let scope = match id_of(draft, schema) {
            Some(id) => {
                let mut scope = DEFAULT_SCOPE.join(id)?;
                if let Some("") = scope.fragment() {
                    scope.set_fragment(None);
                }
                scope
            }
            None => DEFAULT_SCOPE.clone(),
        };
        let mut schemas = AHashMap::new();
        // Traverse the schema and store all named sub-schemas under their
        // canonical ids
        find_schemas(draft, schema, &DEFAULT_SCOPE, &mut |id, subschema| {
            schemas.insert(id, subschema);
        })?;
        Ok(ReferenceIndex { schemas, scope })
    }

    /// Resolve `reference` to a sub-schema of `root`.
    ///
    /// Lookup order: location-independent identifiers first, then JSON
    /// Pointer fragments against the identified document (the root when the
    /// reference stays inside the default scope).
    pub(crate) fn resolve(
        &self,
        reference: &str,
        root: &'a Value,
    ) -> Result<&'a Value, ResolveError> {
        let url = self
            .scope
            .join(reference)
            .map_err(|_| ResolveError::Invalid)?;
        let mut anchor = url.clone();
        if let Some("") = anchor.fragment() {
            anchor.set_fragment(None);
        }
        if let Some(resolved) = self.schemas.get(anchor.as_str()) {
            return Ok(*resolved);
        }

        let mut resource = url.clone();
        resource.set_fragment(None);
        let fragment = percent_encoding::percent_decode_str(url.fragment().unwrap_or(""))
            .decode_utf8()
            .map_err(|_| ResolveError::Invalid)?;
        let document = if resource.as_str() == DEFAULT_ROOT_URL || resource == self.base() {
            root
        } else if let Some(named) = self.schemas.get(resource.as_str()) {
            *named
        } else if matches!(resource.scheme(), "http" | "https") {
            return Err(ResolveError::Remote(resource.scheme().to_string()));
        } else {
            return Err(ResolveError::Invalid);
        };
        pointer(document, fragment.as_ref()).ok_or(ResolveError::Invalid)
    }

    fn base(&self) -> Url {
        let mut base = self.scope.clone();
        base.set_fragment(None);
        base
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.schemas.len()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, id: &str) -> Option<&&'a Value> {
        self.schemas.get(id)
    }
}

/// Find all identified sub-schemas in the document and hand them to the
/// callback together with their canonical id.
fn find_schemas<'a, F>(
    draft: Draft,
    schema: &'a Value,
    base_url: &Url,
    callback: &mut F,
) -> Result<(), url::ParseError>
where
    F: FnMut(String, &'a Value),
{
    match schema {
        Value::Object(object) => {
            if let Some(id) = id_of(draft, schema) {
                let mut new_url = base_url.join(id)?;
                // Empty fragments are not distinguishable from absent ones
                if let Some("") = new_url.fragment() {
                    new_url.set_fragment(None);
                }
                callback(new_url.to_string(), schema);
                for (key, subschema) in object {
                    if key == "enum" || key == "const" {
                        continue;
                    }
                    find_schemas(draft, subschema, &new_url, callback)?;
                }
            } else {
                for (key, subschema) in object {
                    if key == "enum" || key == "const" {
                        continue;
                    }
                    find_schemas(draft, subschema, base_url, callback)?;
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                find_schemas(draft, item, base_url, callback)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Based on `serde_json`'s pointer lookup, with the `~0`/`~1` unescaping the
/// JSON Pointer grammar requires.
fn pointer<'a>(document: &'a Value, pointer: &str) -> Option<&'a Value> {
    if pointer.is_empty() {
        return Some(document);
    }
    if !pointer.starts_with('/') {
        return None;
    }
    let tokens = pointer
        .split('/')
        .skip(1)
        .map(|x| x.replace("~1", "/").replace("~0", "~"));
    let mut target = document;
    for token in tokens {
        let target_opt = match target {
            Value::Object(map) => map.get(&token),
            Value::Array(list) => parse_index(&token).and_then(|x| list.get(x)),
            _ => return None,
        };
        if let Some(next) = target_opt {
            target = next;
        } else {
            return None;
        }
    }
    Some(target)
}

fn parse_index(s: &str) -> Option<usize> {
    if s.starts_with('+') || (s.starts_with('0') && s.len() != 1) {
        None
    } else {
        s.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_index(schema: &Value) -> ReferenceIndex {
        ReferenceIndex::new(Draft::Draft7, schema).unwrap()
    }

    #[test]
    fn only_keyword() {
        // When only one keyword is specified
        let schema = json!({"type": "string"});
        let index = make_index(&schema);
        // Then there should be no identified schemas
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn sub_schema_in_object() {
        // When only one sub-schema is specified inside an object
        let schema = json!({
            "allOf": [{"$ref": "#foo"}],
            "definitions": {
                "A": {"$id": "#foo", "type": "integer"}
            }
        });
        let index = make_index(&schema);
        // Then in the index there should be only this schema
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.get("json-schema:///#foo"),
            schema.pointer("/definitions/A").as_ref()
        );
        assert_eq!(
            index.resolve("#foo", &schema).unwrap(),
            schema.pointer("/definitions/A").unwrap()
        );
    }

    #[test]
    fn sub_schemas_in_array() {
        // When sub-schemas are specified inside an array
        let schema = json!({
            "definitions": {
                "A": [
                    {"$id": "#foo", "type": "integer"},
                    {"$id": "#bar", "type": "string"},
                ]
            }
        });
        let index = make_index(&schema);
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("json-schema:///#foo"),
            schema.pointer("/definitions/A/0").as_ref()
        );
        assert_eq!(
            index.get("json-schema:///#bar"),
            schema.pointer("/definitions/A/1").as_ref()
        );
    }

    #[test]
    fn root_schema_id() {
        // When the root schema has an ID
        let schema = json!({
            "$id": "http://localhost:1234/tree",
            "definitions": {
                "node": {
                    "$id": "http://localhost:1234/node",
                    "properties": {
                        "subtree": {"$ref": "tree"},
                        "value": {"type": "number"}
                    },
                    "required": ["value"],
                    "type": "object"
                }
            },
            "properties": {
                "meta": {"type": "string"},
                "nodes": {
                    "items": {"$ref": "node"},
                    "type": "array"
                }
            },
            "required": ["meta", "nodes"],
            "type": "object"
        });
        let index = make_index(&schema);
        // Then both the root & the sub-schema are indexed
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("http://localhost:1234/tree"),
            schema.pointer("").as_ref()
        );
        assert_eq!(
            index.get("http://localhost:1234/node"),
            schema.pointer("/definitions/node").as_ref()
        );
        // And relative references resolve against the root id
        assert_eq!(
            index.resolve("node", &schema).unwrap(),
            schema.pointer("/definitions/node").unwrap()
        );
    }

    #[test]
    fn location_independent_with_absolute_uri() {
        let schema = json!({
            "allOf": [{"$ref": "http://localhost:1234/bar#foo"}],
            "definitions": {
                "A": {"$id": "http://localhost:1234/bar#foo", "type": "integer"}
            }
        });
        let index = make_index(&schema);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index
                .resolve("http://localhost:1234/bar#foo", &schema)
                .unwrap(),
            schema.pointer("/definitions/A").unwrap()
        );
    }

    #[test]
    fn nested_base_uri_change() {
        let schema = json!({
            "$id": "http://localhost:1234/root",
            "allOf":[{"$ref": "http://localhost:1234/nested.json#foo"}],
            "definitions": {
                "A": {
                    "$id": "nested.json",
                    "definitions": {
                        "B": {
                            "$id": "#foo",
                            "type": "integer"
                        }
                    }
                }
            }
        });
        let index = make_index(&schema);
        assert_eq!(index.len(), 3);
        assert_eq!(
            index.get("http://localhost:1234/root"),
            schema.pointer("").as_ref()
        );
        assert_eq!(
            index.get("http://localhost:1234/nested.json"),
            schema.pointer("/definitions/A").as_ref()
        );
        assert_eq!(
            index.get("http://localhost:1234/nested.json#foo"),
            schema.pointer("/definitions/A/definitions/B").as_ref()
        );
    }

    #[test]
    fn pointer_fragment_against_root() {
        let schema = json!({
            "$ref": "#/definitions/c",
            "definitions": {
                "a": {"type": "integer"},
                "b": {"$ref": "#/definitions/a"},
                "c": {"$ref": "#/definitions/b"}
            }
        });
        let index = make_index(&schema);
        assert_eq!(
            index.resolve("#/definitions/a", &schema).unwrap(),
            schema.pointer("/definitions/a").unwrap()
        );
    }

    #[test]
    fn pointer_escapes() {
        let schema = json!({"definitions": {"a/b": {"~": {"type": "null"}}}});
        let index = make_index(&schema);
        assert_eq!(
            index.resolve("#/definitions/a~1b/~0", &schema).unwrap(),
            &json!({"type": "null"})
        );
    }

    #[test]
    fn remote_reference_is_refused() {
        let schema = json!({"$ref": "http://example.com/other.json"});
        let index = make_index(&schema);
        assert!(matches!(
            index.resolve("http://example.com/other.json", &schema),
            Err(ResolveError::Remote(_))
        ));
    }

    #[test]
    fn missing_pointer_target() {
        let schema = json!({"definitions": {}});
        let index = make_index(&schema);
        assert!(matches!(
            index.resolve("#/definitions/missing", &schema),
            Err(ResolveError::Invalid)
        ));
    }

    #[test]
    fn id_value_is_cleaned() {
        let schema = json!({
            "$id": "http://foo.com/schema.json#",
            "properties": {
                "foo": {"$ref": "#/definitions/Bar"}
            },
            "definitions": {
                "Bar": {"const": 42}
            }
        });
        let index = make_index(&schema);
        // `#` should be removed
        assert!(index.get("http://foo.com/schema.json").is_some());
        // And pointer fragments still resolve against the root document
        assert_eq!(
            index.resolve("#/definitions/Bar", &schema).unwrap(),
            &json!({"const": 42})
        );
    }
}
