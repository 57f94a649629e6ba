use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use tracing::debug;

use crate::container::core::ContainerCore;
use crate::container::registry::{ConfigurerImpl, RegistryError};
use crate::container::{Managed, ResolveError};
use crate::key::{Key, TypedKey};
use crate::module::Module;
use crate::util::any::Downcast;

/// The resolver: owns every binding and hands itself to factories which
/// need to resolve other objects.
///
/// Cloning a [`Container`] is cheap and shares its bindings. Note that a
/// clone is a different resolver instance as far as factories can tell.
#[derive(Clone)]
pub struct Container {
    core: Arc<ContainerCore>,
}

impl Container {
    /// Builds a container from all bindings set up by `module`.
    ///
    /// # Errors
    ///
    /// Returns an error if a module fails or a key is bound twice. All such
    /// errors are collected.
    pub fn init<M>(module: M) -> Result<Self, RegistryError>
    where
        M: Module,
    {
        let mut configurer = ConfigurerImpl::new();
        module.setup(&mut configurer);
        let bindings = configurer.finish()?;
        debug!(bindings = bindings.len(), "container initialized");
        Ok(Self {
            core: Arc::new(ContainerCore::new(bindings)),
        })
    }

    /// Resolves the object identified by `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not bound, if the binding depends on
    /// itself, or if its factory fails.
    pub fn get<K>(&self, key: K) -> Result<K::Target, ResolveError>
    where
        K: TypedKey,
    {
        match self.dyn_get(&key)?.downcast::<K::Target>() {
            Ok(object) => Ok(*object),
            Err(_) => unreachable!("the object's type should be `K::Target`"),
        }
    }

    /// A type-erased variant of [`Container::get`].
    ///
    /// # Errors
    ///
    /// See [`Container::get`].
    pub fn dyn_get(&self, key: &dyn Key) -> Result<Box<dyn Managed>, ResolveError> {
        self.core.resolve(self, key)
    }

    /// Returns whether objects bound to `key` may be reused across
    /// requests, or [`None`] if `key` is not bound.
    pub fn is_referable(&self, key: &dyn Key) -> Option<bool> {
        self.core.is_referable(key)
    }

    pub fn contains(&self, key: &dyn Key) -> bool {
        self.is_referable(key).is_some()
    }
}

impl Debug for Container {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Container")
            .field("bindings", &self.core.len())
            .finish()
    }
}
