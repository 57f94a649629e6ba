use std::error::Error;

use tracing::trace;

use crate::container::registry::{BindingMap, Configurer, ConfigurerPrivate, RegistryError};
use crate::container::Binding;

pub struct ConfigurerImpl {
    bindings: BindingMap,
    errors: Vec<RegistryError>,
}

impl ConfigurerImpl {
    pub fn new() -> Self {
        Self {
            bindings: BindingMap::new(),
            errors: Vec::new(),
        }
    }

    /// Returns all registered bindings, or every error reported so far.
    pub fn finish(mut self) -> Result<BindingMap, RegistryError> {
        match self.errors.len() {
            0 => Ok(self.bindings),
            1 => Err(self.errors.remove(0)),
            _ => Err(RegistryError::Aggregated {
                errors: self.errors,
            }),
        }
    }
}

impl Configurer for ConfigurerImpl {
    #[allow(private_interfaces)]
    fn as_private(&mut self) -> &mut dyn ConfigurerPrivate {
        self
    }

    fn report_module_error(&mut self, module: &'static str, err: Box<dyn Error + Send + Sync>) {
        self.errors.push(RegistryError::ModuleInner {
            module,
            source: err,
        });
    }
}

impl ConfigurerPrivate for ConfigurerImpl {
    fn dyn_register(&mut self, binding: Box<dyn Binding>) {
        trace!(key = %binding.key(), referable = binding.is_referable(), "registering binding");
        if let Err(binding) = self.bindings.insert(binding) {
            self.errors.push(RegistryError::KeyDuplicated {
                key: binding.key().dyn_clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::container::registry::TypedConfigurer;
    use crate::key;
    use crate::scope::{Direct, External, Singleton, Transient};

    use super::*;

    #[test]
    fn configurer_impl_register_succeeds() {
        let mut configurer = ConfigurerImpl::new();
        configurer.register(key::of::<i32>(), External::new(42i32, Transient));
        configurer.register(
            key::of::<Arc<&'static str>>(),
            External::new(Arc::new("str"), Direct),
        );
        configurer.register(key::named::<i32>("singleton"), External::new(1i32, Singleton::new()));

        let map = configurer.finish().unwrap();
        assert_eq!(map.len(), 3);
        assert!(map.get(&key::of::<i32>()).is_some());
        assert!(map.get(&key::of::<Arc<&str>>()).is_some());
        assert!(!map.get(&key::of::<i32>()).unwrap().is_referable());
        assert!(map.get(&key::named::<i32>("singleton")).unwrap().is_referable());
    }

    #[test]
    fn configurer_impl_finish_fails_when_key_is_duplicated() {
        let mut configurer = ConfigurerImpl::new();
        configurer.register(key::of::<i32>(), External::new(42i32, Transient));
        configurer.register(key::of::<i32>(), External::new(43i32, Direct));

        let err = configurer.finish().unwrap_err();
        assert!(matches!(err, RegistryError::KeyDuplicated { .. }));
    }

    #[test]
    fn configurer_impl_finish_fails_when_other_error_reported() {
        let mut configurer = ConfigurerImpl::new();
        configurer.register(key::of::<i32>(), External::new(42i32, Transient));
        configurer.report_module_error("test", "whatever".into());

        let err = configurer.finish().unwrap_err();
        assert!(matches!(err, RegistryError::ModuleInner { .. }));
    }

    #[test]
    fn configurer_impl_finish_aggregates_errors() {
        let mut configurer = ConfigurerImpl::new();
        configurer.register(key::of::<i32>(), External::new(42i32, Transient));
        configurer.register(key::of::<i32>(), External::new(42i32, Transient));
        configurer.report_module_error("test", "whatever".into());

        let RegistryError::Aggregated { errors } = configurer.finish().unwrap_err() else {
            panic!("errors should be aggregated");
        };
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], RegistryError::KeyDuplicated { .. }));
        assert!(matches!(errors[1], RegistryError::ModuleInner { .. }));
    }
}
