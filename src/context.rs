//! Mutable state shared by all keyword functions of one `validate` call.
use crate::paths::{JsonPointer, LocationStack};
use ahash::AHashSet;

/// Per-validation bundle of the two location stacks and the `$ref`
/// re-entrance guard.
///
/// Every descent pushes onto the stacks and pops on the way out, including
/// error paths; on return from the root descent both stacks are empty again.
/// The guard holds `(schema node, instance node)` address pairs currently
/// being validated through `$ref` so that reference cycles terminate.
#[derive(Debug)]
pub(crate) struct Context {
    pub(crate) instance_location: LocationStack,
    pub(crate) keyword_location: LocationStack,
    pub(crate) active_refs: AHashSet<(usize, usize)>,
}

impl Context {
    pub(crate) fn new() -> Self {
        Context {
            instance_location: LocationStack::new(),
            keyword_location: LocationStack::new(),
            active_refs: AHashSet::new(),
        }
    }

    /// An owned pointer to the current position within the instance.
    #[inline]
    pub(crate) fn instance_path(&self) -> JsonPointer {
        self.instance_location.snapshot()
    }

    /// An owned pointer to the current position within the schema.
    #[inline]
    pub(crate) fn schema_path(&self) -> JsonPointer {
        self.keyword_location.snapshot()
    }
}
