use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::entity::{Entity, Interface, Kind};
use crate::expression::Expression;
use crate::provider::{Evaluate, Provide};
use crate::scope::{Create, Delegation, Scope};

/// A strategy binding an entity which is either a factory or a callable
/// value, for the expected interface `E`.
///
/// The entity's invocation shape `Shape` is inferred when the strategy is
/// built (see [`Expression`]). So is the delegate `D`: the strategy that
/// finally creates the produced value, chosen from the produced type and
/// the requested strategy through [`Delegation`]. On creation, the delegate
/// is handed an [`Evaluate`] provider which invokes the entity.
///
/// Instances are not referable when `E` is itself a callable producing a
/// result, since every use must then evaluate afresh.
pub struct Expr<E, G, D, Shape>
where
    E: ?Sized + Interface,
    D: Scope,
{
    entity: G,
    delegate: D,
    _marker: PhantomData<(fn(&E), fn() -> Shape)>,
}

impl<E, G, D, Shape> Expr<E, G, D, Shape>
where
    E: ?Sized + Interface,
    D: Scope,
{
    /// Builds the strategy for requested type `T` and resolver `R`, with
    /// `scope` as the requested strategy.
    pub fn new<T, R, S>(entity: G, scope: S) -> Self
    where
        R: ?Sized,
        G: Expression<T, E, R, Shape, Output: Entity>,
        <G::Output as Entity>::Ownership: Delegation<S, Scope = D>,
    {
        Self {
            entity,
            delegate: <<G::Output as Entity>::Ownership as Delegation<S>>::delegate(scope),
            _marker: PhantomData,
        }
    }
}

impl<E, G, D, Shape> Debug for Expr<E, G, D, Shape>
where
    E: ?Sized + Interface,
    D: Scope + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Expr<E, G, D, Shape>")
            .field("delegate", &self.delegate)
            .finish_non_exhaustive()
    }
}

impl<E, G, D, Shape> Scope for Expr<E, G, D, Shape>
where
    E: ?Sized + Interface,
    D: Scope,
{
    const REFERABLE: bool = !<E::Kind as Kind>::PRODUCES_RESULT;
}

impl<T, N, R, O, E, G, D, Shape> Create<T, N, R, O> for Expr<E, G, D, Shape>
where
    R: ?Sized,
    E: ?Sized + Interface,
    G: Expression<T, E, R, Shape>,
    D: Create<T, N, R, G::Output>,
{
    type Wrapper = D::Wrapper;

    fn create<P>(&self, provider: &P) -> Self::Wrapper
    where
        P: Provide<Resolver = R, Output = O>,
    {
        let evaluate = Evaluate::<T, E, R, G, Shape>::new(provider.resolver(), &self.entity);
        self.delegate.create(&evaluate)
    }
}
