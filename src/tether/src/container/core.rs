use std::sync::Arc;

use tracing::{debug, trace};

use crate::container::constructing::Constructing;
use crate::container::registry::BindingMap;
use crate::container::{Container, Managed, ResolveError};
use crate::key::Key;

pub struct ContainerCore {
    bindings: BindingMap,
    constructing: Constructing,
}

impl ContainerCore {
    pub fn new(bindings: BindingMap) -> Self {
        Self {
            bindings,
            constructing: Constructing::new(),
        }
    }

    pub fn is_referable(&self, key: &dyn Key) -> Option<bool> {
        self.bindings.get(key).map(|binding| binding.is_referable())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn resolve(
        &self,
        container: &Container,
        key: &dyn Key,
    ) -> Result<Box<dyn Managed>, ResolveError> {
        let Some(binding) = self.bindings.get(key) else {
            return Err(ResolveError::NotFound {
                key: key.dyn_clone(),
            });
        };

        let Some(_guard) = self.constructing.enter(key) else {
            debug!(%key, "cyclic dependency detected");
            return Err(ResolveError::CyclicDependency {
                key: key.dyn_clone(),
            });
        };

        trace!(%key, referable = binding.is_referable(), "resolving binding");
        binding
            .dyn_resolve(container)
            .map_err(|err| ResolveError::ObjectConstruction {
                key: key.dyn_clone(),
                source: Arc::from(err),
            })
    }
}
