use crate::provider::Provide;
use crate::scope::{Create, Scope};
use crate::wrapper::Unique;

/// A strategy which obtains a fresh value on every creation and hands it
/// out with sole ownership.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transient;

impl Scope for Transient {
    const REFERABLE: bool = false;
}

impl<T, N, R, O> Create<T, N, R, O> for Transient
where
    R: ?Sized,
{
    type Wrapper = Unique<O>;

    fn create<P>(&self, provider: &P) -> Self::Wrapper
    where
        P: Provide<Resolver = R, Output = O>,
    {
        Unique::new(provider.obtain())
    }
}
