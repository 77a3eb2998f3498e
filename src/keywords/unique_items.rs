use crate::{
    context::Context,
    error::{error, no_error, ValidationError},
    keywords::helpers::equal,
    validator::Validator,
};
use ahash::{AHashSet, AHasher};
use serde_json::{Map, Value};
use std::hash::{Hash, Hasher};

// Based on the implementation proposed by Sven Marnach:
// https://stackoverflow.com/questions/60882381/what-is-the-fastest-correct-way-to-detect-that-there-are-no-duplicates-in-a-json
pub(crate) struct HashedValue<'a>(&'a Value);

impl PartialEq for HashedValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        // Mathematical number equality, consistent with the pairwise path
        equal(self.0, other.0)
    }
}

impl Eq for HashedValue<'_> {}

impl Hash for HashedValue<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0 {
            Value::Null => state.write_u32(3_221_225_473), // chosen randomly
            Value::Bool(item) => item.hash(state),
            Value::Number(item) => {
                // Hash all numbers through their f64 value so that `1` and
                // `1.0` collide; `eq` settles exactness. Zero needs one bit
                // pattern, `-0.0 == 0.0` holds
                let number = item.as_f64().expect("Always valid");
                let number = if number == 0.0 { 0.0 } else { number };
                number.to_bits().hash(state)
            }
            Value::String(item) => item.hash(state),
            Value::Array(items) => {
                for item in items {
                    HashedValue(item).hash(state);
                }
            }
            Value::Object(items) => {
                let mut hash = 0;
                for (key, value) in items {
                    // We have no way of building a new hasher of type `H`, so we
                    // hardcode using the default hasher of a hash map.
                    let mut item_hasher = AHasher::default();
                    key.hash(&mut item_hasher);
                    HashedValue(value).hash(&mut item_hasher);
                    hash ^= item_hasher.finish();
                }
                state.write_u64(hash);
            }
        }
    }
}

// Empirically calculated threshold after which the validator resorts to hashing.
const ITEMS_SIZE_THRESHOLD: usize = 15;

#[inline]
pub(crate) fn is_unique(items: &[Value]) -> bool {
    let size = items.len();
    if size <= 1 {
        // Empty arrays and one-element arrays always contain unique elements
        true
    } else if let [first, second] = items {
        !equal(first, second)
    } else if let [first, second, third] = items {
        !equal(first, second) && !equal(first, third) && !equal(second, third)
    } else if size <= ITEMS_SIZE_THRESHOLD {
        // Small arrays are faster to compare pairwise than to hash, even if
        // the algorithm is O(N^2)
        let mut idx = 0_usize;
        while idx < items.len() {
            let mut inner_idx = idx + 1;
            while inner_idx < items.len() {
                if equal(&items[idx], &items[inner_idx]) {
                    return false;
                }
                inner_idx += 1;
            }
            idx += 1;
        }
        true
    } else {
        let mut seen = AHashSet::with_capacity(size);
        items.iter().map(HashedValue).all(move |x| seen.insert(x))
    }
}

pub(crate) fn validate<'s, 'i>(
    _: &Validator<'s>,
    context: &mut Context,
    schema: &'s Value,
    instance: &'i Value,
    _: &'s Map<String, Value>,
) -> Vec<ValidationError<'i>> {
    match schema {
        Value::Bool(true) => {
            if let Value::Array(items) = instance {
                if !is_unique(items) {
                    return error(ValidationError::unique_items(
                        context.schema_path(),
                        context.instance_path(),
                        instance,
                    ));
                }
            }
            no_error()
        }
        Value::Bool(false) => no_error(),
        _ => error(ValidationError::schema(
            context.schema_path(),
            context.instance_path(),
            instance,
        )),
    }
}
