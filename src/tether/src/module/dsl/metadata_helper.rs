use std::marker::PhantomData;

use crate::container::Managed;
use crate::entity::Interface;
use crate::key::Qualifier;
use crate::module::dsl::expr_helper::{ExprBinding, Fallible, Plain};
use crate::module::dsl::value_helper::ValueBinding;
use crate::module::dsl::Sealed;
use crate::scope::Scope;

/// A binding of `T` whose entity is not chosen yet.
///
/// `E` is the expected interface: the type the bound entity is checked
/// against. It is `T` unless set by [`MetadataBinding::expecting`].
#[allow(private_bounds)]
pub struct MetadataBinding<T, E, Q, L>
where
    T: Managed,
    E: ?Sized,
    Q: Qualifier,
    L: Sealed,
{
    qualifier: Q,
    scope: L,
    _marker: PhantomData<(fn() -> T, fn(&E))>,
}

#[allow(private_bounds)]
impl<T, E, Q, L> MetadataBinding<T, E, Q, L>
where
    T: Managed,
    E: ?Sized,
    Q: Qualifier,
    L: Sealed,
{
    pub(super) fn new(qualifier: Q, scope: L) -> Self {
        Self {
            qualifier,
            scope,
            _marker: PhantomData,
        }
    }

    pub fn expecting<NewE>(self) -> MetadataBinding<T, NewE, Q, L>
    where
        NewE: ?Sized + Interface,
    {
        MetadataBinding::new(self.qualifier, self.scope)
    }

    pub fn qualified_by<NewQ>(self, qualifier: NewQ) -> MetadataBinding<T, E, NewQ, L>
    where
        NewQ: Qualifier,
    {
        MetadataBinding::new(qualifier, self.scope)
    }

    pub fn within<NewS>(self, scope: NewS) -> MetadataBinding<T, E, Q, NewS>
    where
        NewS: Scope,
    {
        MetadataBinding::new(self.qualifier, scope)
    }

    /// Binds an object owned by the caller. It is handed out by the
    /// [`External`] strategy.
    ///
    /// [`External`]: crate::scope::External
    pub fn to_value(self, value: T) -> ValueBinding<T, Q, L>
    where
        T: Clone,
    {
        ValueBinding::new(value, self.qualifier, self.scope)
    }

    /// Binds a factory or a callable value. It is handed out by the
    /// [`Expr`] strategy.
    ///
    /// [`Expr`]: crate::scope::Expr
    pub fn to_expr<G>(self, entity: G) -> ExprBinding<T, E, G, Q, L, Plain>
    where
        E: Interface,
        G: Send + Sync + 'static,
    {
        ExprBinding::new(entity, self.qualifier, self.scope)
    }

    /// Binds a factory returning `Result<T, _>`. Its errors are reported
    /// by the container as construction failures.
    pub fn to_try_expr<G>(self, entity: G) -> ExprBinding<T, E, G, Q, L, Fallible>
    where
        E: Interface,
        G: Send + Sync + 'static,
    {
        ExprBinding::new(entity, self.qualifier, self.scope)
    }
}
