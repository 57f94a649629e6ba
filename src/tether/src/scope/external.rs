use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::provider::{Provide, Supply};
use crate::scope::{Create, Scope};

/// A passthrough strategy binding an existing object `U` while reusing the
/// creation logic of another strategy `S` unchanged.
///
/// On creation, `S` is handed a [`Supply`] provider which returns the held
/// object whatever memory hint it is given. Referability is a property of
/// `S` and is forwarded as is.
///
/// The object lives as long as the strategy, which the resolver owns.
pub struct External<U, S>
where
    U: Clone,
    S: Scope,
{
    object: U,
    scope: S,
}

impl<U, S> External<U, S>
where
    U: Clone,
    S: Scope,
{
    pub fn new(object: U, scope: S) -> Self {
        Self { object, scope }
    }
}

impl<U, S> Debug for External<U, S>
where
    U: Clone,
    S: Scope + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("External<U, S>")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl<U, S> Scope for External<U, S>
where
    U: Clone,
    S: Scope,
{
    const REFERABLE: bool = S::REFERABLE;
}

impl<T, N, R, O, U, S> Create<T, N, R, O> for External<U, S>
where
    R: ?Sized,
    U: Clone,
    S: Create<T, N, R, U>,
{
    type Wrapper = S::Wrapper;

    fn create<P>(&self, provider: &P) -> Self::Wrapper
    where
        P: Provide<Resolver = R, Output = O>,
    {
        let supply = Supply::new(provider.resolver(), &self.object);
        self.scope.create(&supply)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::provider::Seed;
    use crate::scope::{Direct, Singleton, Transient};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Config {
        name: &'static str,
    }

    #[test]
    fn external_forwards_referability() {
        assert!(External::<i32, Direct>::REFERABLE);
        assert!(External::<i32, Singleton>::REFERABLE);
        assert!(!External::<i32, Transient>::REFERABLE);
    }

    #[test]
    fn external_supplies_held_object_to_wrapped_scope() {
        let resolver = ();
        let scope = External::new(Config { name: "external" }, Transient);

        let wrapper = Create::<Config, (), _, _>::create(&scope, &Seed::new(&resolver));
        assert_eq!(wrapper.into_inner(), Config { name: "external" });
    }

    #[test]
    fn external_over_direct_keeps_shared_pointee() {
        let resolver = ();
        let handle = Arc::new(Config { name: "shared" });
        let scope = External::new(Arc::clone(&handle), Direct);

        let first = Create::<Config, (), _, _>::create(&scope, &Seed::new(&resolver));
        let second = Create::<Config, (), _, _>::create(&scope, &Seed::new(&resolver));
        assert!(first.ptr_eq(&handle));
        assert!(second.ptr_eq(&handle));
    }

    #[test]
    fn external_over_singleton_does_not_copy_per_request() {
        let resolver = ();
        let scope = External::new(Config { name: "once" }, Singleton::new());

        let first = Create::<Config, (), _, _>::create(&scope, &Seed::new(&resolver)).into_arc();
        let second = Create::<Config, (), _, _>::create(&scope, &Seed::new(&resolver)).into_arc();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
