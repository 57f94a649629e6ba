//! Lifetime strategies and the external-binding strategies built on them.
//!
//! A strategy answers two questions for the resolver. [`Scope::REFERABLE`]
//! tells the caching layer whether a produced instance may be reused. The
//! [`Create`] bound is the capability query: a binding is accepted only if
//! its strategy implements [`Create`] for the requested type and the
//! resolver's provider, and [`Create::Wrapper`] is the ownership wrapper the
//! creation would produce. Both are settled by the type checker, so a
//! misconfigured binding never compiles.
//!
//! ```
//! use tether::container::Container;
//! use tether::scope::{assert_creatable, Direct, Transient};
//!
//! assert_creatable::<Direct, u32, (), Container, u32>();
//! assert_creatable::<Transient, u32, (), Container, std::rc::Rc<u32>>();
//! ```
//!
//! [`Direct`] only accepts values it can classify as an [`Entity`]:
//!
//! ```compile_fail
//! use tether::container::Container;
//! use tether::scope::{assert_creatable, Direct};
//!
//! assert_creatable::<Direct, u32, (), Container, std::rc::Rc<u32>>();
//! ```
//!
//! An expression matching no invocation shape is rejected:
//!
//! ```compile_fail
//! use tether::prelude::*;
//!
//! fn configure(configurer: &mut dyn Configurer) {
//!     bind::<u32>().to_expr(42u32).set_on(configurer);
//! }
//! ```
//!
//! So is one whose product cannot be handed out as the requested type:
//!
//! ```compile_fail
//! use tether::prelude::*;
//!
//! fn configure(configurer: &mut dyn Configurer) {
//!     bind::<u32>().to_expr(|| String::new()).set_on(configurer);
//! }
//! ```
//!
//! A stored value must itself be callable when the expected interface is a
//! function:
//!
//! ```compile_fail
//! use tether::prelude::*;
//!
//! fn configure(configurer: &mut dyn Configurer) {
//!     bind::<u32>()
//!         .expecting::<dyn Fn() -> u32 + Send + Sync>()
//!         .to_expr(5u32)
//!         .set_on(configurer);
//! }
//! ```
//!
//! A closure whose parameter type is left open matches no shape until it is
//! annotated:
//!
//! ```compile_fail
//! use tether::prelude::*;
//!
//! fn configure(configurer: &mut dyn Configurer) {
//!     bind::<u32>().to_expr(|_| 1u32).set_on(configurer);
//! }
//! ```

mod direct;
mod expr;
mod external;
mod singleton;
mod transient;

use crate::entity::{Entity, Exclusive, Shareable};
use crate::provider::Provide;

pub use direct::Direct;
pub use expr::Expr;
pub use external::External;
pub use singleton::Singleton;
pub use transient::Transient;

/// A policy governing how long a produced instance is reused.
pub trait Scope {
    /// Whether an instance produced by this strategy may be reused across
    /// several requests for the same type.
    const REFERABLE: bool;
}

/// Creation of a requested type `T`, qualified by `N`, for any provider
/// whose resolver is `R` and whose raw output is `O`.
///
/// Whether `S: Create<T, N, R, O>` holds is the capability query for a
/// binding. It is checked without running anything.
pub trait Create<T, N, R, O>: Scope
where
    R: ?Sized,
{
    /// The ownership wrapper produced on creation.
    type Wrapper;

    /// Obtains a raw value from `provider` and wraps it.
    fn create<P>(&self, provider: &P) -> Self::Wrapper
    where
        P: Provide<Resolver = R, Output = O>;
}

/// The wrapper type a capability query resolves to. Naming it is only
/// well-formed for a valid binding.
pub type TryCreate<S, T, N, R, O> = <S as Create<T, N, R, O>>::Wrapper;

/// Compiles only if `S` can create `T` from a provider with resolver `R`
/// and output `O`. Does nothing at runtime.
pub fn assert_creatable<S, T, N, R, O>()
where
    S: Create<T, N, R, O>,
    R: ?Sized,
{
}

/// Selection of the strategy which finally creates a value produced by an
/// expression, from the value's [`Ownership`] and the requested strategy
/// `S`.
///
/// Exclusively owned values keep the requested strategy. Shared handles
/// produced under a strategy which constructs afresh ([`Transient`] or
/// [`Direct`]) are redirected to [`Direct`], which wraps them in a shared
/// wrapper pointing at the produced object. Under [`Singleton`] the handle
/// itself is cached, so the factory still runs once and every consumer gets
/// the same object.
///
/// [`Ownership`]: crate::entity::Ownership
pub trait Delegation<S> {
    type Scope;

    fn delegate(scope: S) -> Self::Scope;
}

impl<S> Delegation<S> for Exclusive {
    type Scope = S;

    fn delegate(scope: S) -> Self::Scope {
        scope
    }
}

impl Delegation<Transient> for Shareable {
    type Scope = Direct;

    fn delegate(_scope: Transient) -> Self::Scope {
        Direct
    }
}

impl Delegation<Direct> for Shareable {
    type Scope = Direct;

    fn delegate(scope: Direct) -> Self::Scope {
        scope
    }
}

impl Delegation<Singleton> for Shareable {
    type Scope = Singleton;

    fn delegate(scope: Singleton) -> Self::Scope {
        scope
    }
}

/// The strategy an expression producing `O` delegates to, given the
/// requested strategy `S`.
pub type Delegate<S, O> = <<O as Entity>::Ownership as Delegation<S>>::Scope;
