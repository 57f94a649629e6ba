//! Classification of bound entities into invocation shapes.
//!
//! An entity bound through an expression is exactly one of:
//!
//! - [`Stored`]: the expected interface and the entity are both callables
//!   producing a result, so the entity is data and is handed out unchanged.
//! - [`Nullary`]: `Fn() -> O`, called with no arguments.
//! - [`ResolverAware`]: `Fn(&R) -> O`, called with the active resolver.
//! - [`DescriptorAware`]: `Fn(&R, &dyn Site) -> O`, called with the active
//!   resolver and the binding site's [`Descriptor`].
//!
//! The shapes are a partition rather than a priority list: [`Stored`] needs
//! an interface and an entity of [`Function`] kind while the others need an
//! interface of [`Object`] kind,
//! and a Rust closure has exactly one call signature. The shape is a type
//! parameter inferred once, when the binding is declared. An entity matching
//! no shape, or whose shape cannot be inferred, fails to compile.
//!
//! [`Function`]: crate::entity::Function
//! [`Object`]: crate::entity::Object

mod descriptor;

use crate::entity::{Function, Interface, Object};

pub use descriptor::{Descriptor, Site, TypeMeta};

/// The entity is returned as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stored;

/// The entity is called with no arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nullary;

/// The entity is called with the active resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolverAware;

/// The entity is called with the active resolver and a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DescriptorAware;

/// An entity bound for requested type `T` and expected interface `E`, which
/// produces a value when evaluated against a resolver `R`. `Shape` is one of
/// [`Stored`], [`Nullary`], [`ResolverAware`] and [`DescriptorAware`].
pub trait Expression<T, E, R, Shape>: 'static
where
    E: ?Sized,
    R: ?Sized,
{
    /// The value produced on each evaluation.
    type Output;

    /// Produces a value, invoking `self` according to `Shape`.
    fn evaluate(&self, resolver: &R) -> Self::Output;
}

impl<T, E, R, G> Expression<T, E, R, Stored> for G
where
    E: ?Sized + Interface<Kind = Function>,
    R: ?Sized,
    G: Interface<Kind = Function> + Clone + 'static,
{
    type Output = G;

    fn evaluate(&self, _resolver: &R) -> Self::Output {
        self.clone()
    }
}

impl<T, E, R, F, O> Expression<T, E, R, Nullary> for F
where
    E: ?Sized + Interface<Kind = Object>,
    R: ?Sized,
    F: Fn() -> O + 'static,
{
    type Output = O;

    fn evaluate(&self, _resolver: &R) -> Self::Output {
        self()
    }
}

impl<T, E, R, F, O> Expression<T, E, R, ResolverAware> for F
where
    E: ?Sized + Interface<Kind = Object>,
    R: ?Sized,
    F: Fn(&R) -> O + 'static,
{
    type Output = O;

    fn evaluate(&self, resolver: &R) -> Self::Output {
        self(resolver)
    }
}

impl<T, E, R, F, O> Expression<T, E, R, DescriptorAware> for F
where
    T: 'static,
    E: ?Sized + Interface<Kind = Object> + 'static,
    R: ?Sized,
    F: Fn(&R, &dyn Site) -> O + 'static,
{
    type Output = O;

    fn evaluate(&self, resolver: &R) -> Self::Output {
        let descriptor = Descriptor::<T, E, F>::new();
        self(resolver, &descriptor)
    }
}
