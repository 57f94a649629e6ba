use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::expression::Expression;
use crate::memory::Memory;
use crate::provider::Provide;

/// A [`Provide`] implementation which evaluates an [`Expression`] on each
/// call, invoking it according to its statically inferred shape.
pub struct Evaluate<'a, T, E, R, G, S>
where
    E: ?Sized,
    R: ?Sized,
    G: Expression<T, E, R, S>,
{
    resolver: &'a R,
    entity: &'a G,
    _marker: PhantomData<(fn() -> T, fn(&E), fn() -> S)>,
}

impl<'a, T, E, R, G, S> Evaluate<'a, T, E, R, G, S>
where
    E: ?Sized,
    R: ?Sized,
    G: Expression<T, E, R, S>,
{
    pub fn new(resolver: &'a R, entity: &'a G) -> Self {
        Self {
            resolver,
            entity,
            _marker: PhantomData,
        }
    }
}

impl<T, E, R, G, S> Debug for Evaluate<'_, T, E, R, G, S>
where
    E: ?Sized,
    R: ?Sized,
    G: Expression<T, E, R, S>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Evaluate<T, E, R, G, S>")
            .finish_non_exhaustive()
    }
}

impl<T, E, R, G, S> Provide for Evaluate<'_, T, E, R, G, S>
where
    E: ?Sized,
    R: ?Sized,
    G: Expression<T, E, R, S>,
{
    type Resolver = R;

    type Output = G::Output;

    fn resolver(&self) -> &Self::Resolver {
        self.resolver
    }

    fn obtain_in<M: Memory>(&self, _memory: M) -> Self::Output {
        self.entity.evaluate(self.resolver)
    }
}
