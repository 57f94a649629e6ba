mod binding_map;
mod configurer;

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use snafu::prelude::*;

use crate::container::{Binding, Container, ScopedBinding};
use crate::key::{Key, TypedKey};
use crate::scope::{Create, TryCreate};
use crate::wrapper::Extract;

pub(super) use binding_map::BindingMap;
pub(super) use configurer::ConfigurerImpl;

/// A sink for bindings, filled by [`Module`]s.
///
/// [`Module`]: crate::module::Module
pub trait Configurer: Send + Sync + 'static {
    #[doc(hidden)]
    #[allow(private_interfaces)]
    fn as_private(&mut self) -> &mut dyn ConfigurerPrivate;

    fn report_module_error(&mut self, module: &'static str, err: Box<dyn Error + Send + Sync>);
}

pub(crate) trait ConfigurerPrivate: Configurer {
    fn dyn_register(&mut self, binding: Box<dyn Binding>);
}

pub trait TypedConfigurer: Configurer {
    /// Binds `key` to strategy `scope`.
    ///
    /// This only compiles if `scope` can create the key's target from the
    /// container's provider and the result can be handed out as the target
    /// type.
    fn register<K, S>(&mut self, key: K, scope: S)
    where
        K: TypedKey,
        S: Create<K::Target, K::Qualifier, Container, ()> + Send + Sync + 'static,
        TryCreate<S, K::Target, K::Qualifier, Container, ()>: Extract<K::Target>,
    {
        self.as_private()
            .dyn_register(Box::new(ScopedBinding::new(key, scope)));
    }
}

impl<T: Configurer + ?Sized> TypedConfigurer for T {}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RegistryError {
    #[snafu(display("the key {key} already exists in the registry"))]
    #[non_exhaustive]
    KeyDuplicated { key: Box<dyn Key> },
    #[snafu(display("module {module} fails to setup the configuration"))]
    #[non_exhaustive]
    ModuleInner {
        module: &'static str,
        source: Box<dyn Error + Send + Sync>,
    },
    #[snafu(display("aggregated registry errors:\n{}", AggregatedDisplayer::new(errors)))]
    Aggregated { errors: Vec<RegistryError> },
}

struct AggregatedDisplayer<'a> {
    errors: &'a [RegistryError],
}

impl<'a> AggregatedDisplayer<'a> {
    fn new(errors: &'a [RegistryError]) -> Self {
        Self { errors }
    }
}

impl Display for AggregatedDisplayer<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "{:4}: {}", i + 1, error)?;
        }
        Ok(())
    }
}
