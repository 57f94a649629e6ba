use crate::entity::Entity;
use crate::provider::Provide;
use crate::scope::{Create, Scope};

/// The terminal strategy: the provider's value is handed out as is.
///
/// The only decision taken is the ownership wrapper, made from the static
/// type of the value: a shared handle ([`Arc<T>`] or `&Arc<T>`) becomes a
/// [`Shared`] pointing at the same object, anything else becomes a
/// [`Unique`]. See [`Entity`].
///
/// [`Arc<T>`]: std::sync::Arc
/// [`Shared`]: crate::wrapper::Shared
/// [`Unique`]: crate::wrapper::Unique
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direct;

impl Scope for Direct {
    const REFERABLE: bool = true;
}

impl<T, N, R, O> Create<T, N, R, O> for Direct
where
    R: ?Sized,
    O: Entity,
{
    type Wrapper = O::Wrapper;

    fn create<P>(&self, provider: &P) -> Self::Wrapper
    where
        P: Provide<Resolver = R, Output = O>,
    {
        provider.obtain().wrap()
    }
}
