use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::memory::Memory;
use crate::provider::Provide;

/// The provider a resolver hands to a binding's strategy.
///
/// It exposes the resolver but has no raw value of its own: external
/// strategies always supply their own object or factory, so its output is
/// `()`.
pub struct Seed<'a, R>
where
    R: ?Sized,
{
    resolver: &'a R,
}

impl<'a, R> Seed<'a, R>
where
    R: ?Sized,
{
    pub fn new(resolver: &'a R) -> Self {
        Self { resolver }
    }
}

impl<R> Debug for Seed<'_, R>
where
    R: ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Seed<R>").finish_non_exhaustive()
    }
}

impl<R> Provide for Seed<'_, R>
where
    R: ?Sized,
{
    type Resolver = R;

    type Output = ();

    fn resolver(&self) -> &Self::Resolver {
        self.resolver
    }

    fn obtain_in<M: Memory>(&self, _memory: M) -> Self::Output {}
}
