use std::collections::HashMap;

use crate::container::Binding;
use crate::key::Key;

#[derive(Debug, Default)]
pub struct BindingMap {
    bindings: HashMap<Box<dyn Key>, Box<dyn Binding>>,
}

impl BindingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `binding`, handing it back if its key is already bound.
    pub fn insert(&mut self, binding: Box<dyn Binding>) -> Result<(), Box<dyn Binding>> {
        if self.bindings.contains_key(binding.key()) {
            return Err(binding);
        }
        self.bindings.insert(binding.key().dyn_clone(), binding);
        Ok(())
    }

    pub fn get(&self, key: &dyn Key) -> Option<&dyn Binding> {
        self.bindings.get(key).map(AsRef::as_ref)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
