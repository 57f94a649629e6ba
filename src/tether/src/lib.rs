//! Resolution of externally supplied bindings for a compile-time
//! dependency injection container.
//!
//! A binding pairs a [`key`] with a strategy from [`scope`]. Whether a
//! strategy can create the requested type is decided by the type system:
//! see [`scope::Create`].

#![allow(clippy::new_without_default)]

extern crate self as tether;

pub mod container;
pub mod entity;
pub mod expression;
pub mod key;
pub mod memory;
pub mod module;
pub mod provider;
pub mod scope;
pub mod wrapper;
mod util;

pub use tether_derive::{interface, Entity};

pub mod prelude {
    pub use crate::container::registry::{Configurer, RegistryError, TypedConfigurer};
    pub use crate::container::{Container, ResolveError};
    pub use crate::expression::Site;
    pub use crate::key;
    pub use crate::module::{bind, bind_key, Configuration, Module};
    pub use crate::{interface, Entity};
}
