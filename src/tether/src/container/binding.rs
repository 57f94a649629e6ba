use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::container::{Container, Managed};
use crate::key::{Key, TypedKey};
use crate::provider::Seed;
use crate::scope::{Create, Scope};
use crate::wrapper::{ConstructionError, Extract};

/// A type-erased binding stored by a [`Container`].
pub trait Binding: Debug + Send + Sync + 'static {
    fn key(&self) -> &dyn Key;

    fn is_referable(&self) -> bool;

    fn dyn_resolve(&self, container: &Container) -> Result<Box<dyn Managed>, ConstructionError>;
}

/// A binding of key `K` to strategy `S`. It can only be built when `S`
/// passes the capability query for the key and the container's provider.
pub struct ScopedBinding<K, S>
where
    K: TypedKey,
    S: Create<K::Target, K::Qualifier, Container, ()>,
    S::Wrapper: Extract<K::Target>,
{
    key: K,
    scope: S,
}

impl<K, S> ScopedBinding<K, S>
where
    K: TypedKey,
    S: Create<K::Target, K::Qualifier, Container, ()>,
    S::Wrapper: Extract<K::Target>,
{
    pub fn new(key: K, scope: S) -> Self {
        Self { key, scope }
    }
}

impl<K, S> Debug for ScopedBinding<K, S>
where
    K: TypedKey,
    S: Create<K::Target, K::Qualifier, Container, ()>,
    S::Wrapper: Extract<K::Target>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ScopedBinding<K, S>")
            .field("key", &self.key)
            .field("referable", &S::REFERABLE)
            .finish_non_exhaustive()
    }
}

impl<K, S> Binding for ScopedBinding<K, S>
where
    K: TypedKey,
    S: Create<K::Target, K::Qualifier, Container, ()> + Send + Sync + 'static,
    S::Wrapper: Extract<K::Target>,
{
    fn key(&self) -> &dyn Key {
        &self.key
    }

    fn is_referable(&self) -> bool {
        <S as Scope>::REFERABLE
    }

    fn dyn_resolve(&self, container: &Container) -> Result<Box<dyn Managed>, ConstructionError> {
        let wrapper = self.scope.create(&Seed::new(container));
        wrapper
            .extract()
            .map(|object| -> Box<dyn Managed> { Box::new(object) })
    }
}
