use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::memory::Memory;
use crate::provider::Provide;

/// A [`Provide`] implementation which always returns the object held by a
/// passthrough strategy, whatever the memory hint says.
///
/// The held object is cloned on each call. For shared handles such as
/// [`Arc`] and `&Arc<T>` this only hands out another pointer to the same
/// object.
///
/// [`Arc`]: std::sync::Arc
pub struct Supply<'a, R, U>
where
    R: ?Sized,
    U: Clone,
{
    resolver: &'a R,
    object: &'a U,
}

impl<'a, R, U> Supply<'a, R, U>
where
    R: ?Sized,
    U: Clone,
{
    pub fn new(resolver: &'a R, object: &'a U) -> Self {
        Self { resolver, object }
    }
}

impl<R, U> Debug for Supply<'_, R, U>
where
    R: ?Sized,
    U: Clone,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Supply<R, U>").finish_non_exhaustive()
    }
}

impl<R, U> Provide for Supply<'_, R, U>
where
    R: ?Sized,
    U: Clone,
{
    type Resolver = R;

    type Output = U;

    fn resolver(&self) -> &Self::Resolver {
        self.resolver
    }

    fn obtain_in<M: Memory>(&self, _memory: M) -> Self::Output {
        self.object.clone()
    }
}
