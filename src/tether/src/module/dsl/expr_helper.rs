use std::marker::PhantomData;

use crate::container::registry::{Configurer, TypedConfigurer};
use crate::container::{Container, Managed};
use crate::entity::{Entity, Interface};
use crate::expression::Expression;
use crate::key::{self, Qualifier};
use crate::module::dsl::{Sealed, ToScope};
use crate::scope::{Create, Delegation, Expr, Scope, Transient, TryCreate};
use crate::wrapper::{ConstructionError, Extract};

/// Marks an [`ExprBinding`] whose entity produces the requested type.
#[derive(Debug, Clone, Copy)]
pub struct Plain;

/// Marks an [`ExprBinding`] whose entity produces a [`Result`] of the
/// requested type. An [`Err`] is reported as a construction failure.
#[derive(Debug, Clone, Copy)]
pub struct Fallible;

#[allow(private_bounds)]
pub struct ExprBinding<T, E, G, Q, L, X>
where
    T: Managed,
    E: ?Sized + Interface,
    G: Send + Sync + 'static,
    Q: Qualifier,
    L: Sealed,
{
    entity: G,
    qualifier: Q,
    scope: L,
    _marker: PhantomData<(fn() -> T, fn(&E), X)>,
}

#[allow(private_bounds)]
impl<T, E, G, Q, L, X> ExprBinding<T, E, G, Q, L, X>
where
    T: Managed,
    E: ?Sized + Interface,
    G: Send + Sync + 'static,
    Q: Qualifier,
    L: Sealed,
{
    pub(super) fn new(entity: G, qualifier: Q, scope: L) -> Self {
        Self {
            entity,
            qualifier,
            scope,
            _marker: PhantomData,
        }
    }

    pub fn qualified_by<NewQ>(self, qualifier: NewQ) -> ExprBinding<T, E, G, NewQ, L, X>
    where
        NewQ: Qualifier,
    {
        ExprBinding::new(self.entity, qualifier, self.scope)
    }

    pub fn within<NewS>(self, scope: NewS) -> ExprBinding<T, E, G, Q, NewS, X>
    where
        NewS: Scope,
    {
        ExprBinding::new(self.entity, self.qualifier, scope)
    }

    fn register<Shape, D>(self, configurer: &mut dyn Configurer)
    where
        L: ToScope<Transient>,
        G: Expression<T, E, Container, Shape, Output: Entity>,
        <G::Output as Entity>::Ownership: Delegation<L::Scope, Scope = D>,
        D: Scope,
        Expr<E, G, D, Shape>: Create<T, Q, Container, ()> + Send + Sync + 'static,
        TryCreate<Expr<E, G, D, Shape>, T, Q, Container, ()>: Extract<T>,
    {
        let key = key::qualified::<T, _>(self.qualifier);
        let scope = Expr::<E, G, D, Shape>::new::<T, Container, L::Scope>(
            self.entity,
            self.scope.into_scope(),
        );
        configurer.register(key, scope);
    }
}

#[allow(private_bounds)]
impl<T, E, G, Q, L> ExprBinding<T, E, G, Q, L, Plain>
where
    T: Managed,
    E: ?Sized + Interface,
    G: Send + Sync + 'static,
    Q: Qualifier,
    L: Sealed,
{
    /// Registers the binding. The invocation shape of the entity and the
    /// strategy creating its products are both inferred; a binding whose
    /// entity matches no shape for `E` does not compile.
    pub fn set_on<Shape, D>(self, configurer: &mut dyn Configurer)
    where
        L: ToScope<Transient>,
        T: Entity,
        G: Expression<T, E, Container, Shape, Output = T>,
        <T as Entity>::Ownership: Delegation<L::Scope, Scope = D>,
        D: Scope,
        Expr<E, G, D, Shape>: Create<T, Q, Container, ()> + Send + Sync + 'static,
        TryCreate<Expr<E, G, D, Shape>, T, Q, Container, ()>: Extract<T>,
    {
        self.register::<Shape, D>(configurer);
    }
}

#[allow(private_bounds)]
impl<T, E, G, Q, L> ExprBinding<T, E, G, Q, L, Fallible>
where
    T: Managed,
    E: ?Sized + Interface,
    G: Send + Sync + 'static,
    Q: Qualifier,
    L: Sealed,
{
    /// Registers the binding like [`ExprBinding::set_on`] does for a
    /// [`Plain`] binding. The factory's error type `Err` is inferred too.
    pub fn set_on<Shape, D, Err>(self, configurer: &mut dyn Configurer)
    where
        L: ToScope<Transient>,
        Err: Into<ConstructionError> + 'static,
        G: Expression<T, E, Container, Shape, Output = Result<T, Err>>,
        <Result<T, Err> as Entity>::Ownership: Delegation<L::Scope, Scope = D>,
        D: Scope,
        Expr<E, G, D, Shape>: Create<T, Q, Container, ()> + Send + Sync + 'static,
        TryCreate<Expr<E, G, D, Shape>, T, Q, Container, ()>: Extract<T>,
    {
        self.register::<Shape, D>(configurer);
    }
}
