use crate::container::registry::{Configurer, TypedConfigurer};
use crate::container::{Container, Managed};
use crate::key::{self, Qualifier};
use crate::module::dsl::{Sealed, ToScope};
use crate::scope::{Create, Direct, External, Scope, TryCreate};
use crate::wrapper::Extract;

#[allow(private_bounds)]
pub struct ValueBinding<T, Q, L>
where
    T: Managed + Clone,
    Q: Qualifier,
    L: Sealed,
{
    value: T,
    qualifier: Q,
    scope: L,
}

#[allow(private_bounds)]
impl<T, Q, L> ValueBinding<T, Q, L>
where
    T: Managed + Clone,
    Q: Qualifier,
    L: Sealed,
{
    pub(super) fn new(value: T, qualifier: Q, scope: L) -> Self {
        Self {
            value,
            qualifier,
            scope,
        }
    }

    pub fn qualified_by<NewQ>(self, qualifier: NewQ) -> ValueBinding<T, NewQ, L>
    where
        NewQ: Qualifier,
    {
        ValueBinding::new(self.value, qualifier, self.scope)
    }

    pub fn within<NewS>(self, scope: NewS) -> ValueBinding<T, Q, NewS>
    where
        NewS: Scope,
    {
        ValueBinding::new(self.value, self.qualifier, scope)
    }

    pub fn set_on(self, configurer: &mut dyn Configurer)
    where
        L: ToScope<Direct>,
        External<T, L::Scope>: Create<T, Q, Container, ()> + Send + Sync + 'static,
        TryCreate<External<T, L::Scope>, T, Q, Container, ()>: Extract<T>,
    {
        let key = key::qualified::<T, _>(self.qualifier);
        let scope = External::new(self.value, self.scope.into_scope());
        configurer.register(key, scope);
    }
}
