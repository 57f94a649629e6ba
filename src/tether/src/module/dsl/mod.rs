//! A builder DSL over [`TypedConfigurer::register`].
//!
//! ```
//! use std::error::Error;
//! use std::sync::Arc;
//!
//! use tether::prelude::*;
//! use tether::scope::Singleton;
//!
//! struct AppModule;
//!
//! impl Module for AppModule {
//!     fn configure(
//!         &self,
//!         configurer: &mut dyn Configurer,
//!     ) -> Result<(), Box<dyn Error + Send + Sync>> {
//!         bind::<u16>().qualified_by("port").to_value(8080).set_on(configurer);
//!         bind::<Arc<String>>()
//!             .within(Singleton::new())
//!             .to_expr(|c: &Container| {
//!                 let port = c.get(key::named::<u16>("port")).unwrap_or_default();
//!                 Arc::new(format!("localhost:{port}"))
//!             })
//!             .set_on(configurer);
//!         Ok(())
//!     }
//! }
//!
//! let container = Container::init(AppModule).unwrap();
//! assert_eq!(*container.get(key::of::<Arc<String>>()).unwrap(), "localhost:8080");
//! ```
//!
//! [`TypedConfigurer::register`]: crate::container::registry::TypedConfigurer::register

pub mod expr_helper;
pub mod metadata_helper;
pub mod value_helper;

use metadata_helper::MetadataBinding;

use crate::container::Managed;
use crate::key::TypedKey;
use crate::scope::Scope;

/// The strategy of a binding which never called `within`. Value bindings
/// then use [`Direct`], expression bindings use [`Transient`].
///
/// [`Direct`]: crate::scope::Direct
/// [`Transient`]: crate::scope::Transient
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultScope;

#[allow(private_bounds)]
pub trait ToScope<F>: Sealed
where
    F: Scope + Default,
{
    type Scope: Scope;

    fn into_scope(self) -> Self::Scope;
}

impl<S, F> ToScope<F> for S
where
    S: Scope,
    F: Scope + Default,
{
    type Scope = S;

    fn into_scope(self) -> Self::Scope {
        self
    }
}

impl<F> ToScope<F> for DefaultScope
where
    F: Scope + Default,
{
    type Scope = F;

    fn into_scope(self) -> Self::Scope {
        F::default()
    }
}

trait Sealed {}

impl<S: Scope> Sealed for S {}

impl Sealed for DefaultScope {}

pub fn bind<T>() -> MetadataBinding<T, T, (), DefaultScope>
where
    T: Managed,
{
    MetadataBinding::new((), DefaultScope)
}

pub fn bind_key<K>(key: K) -> MetadataBinding<K::Target, K::Target, K::Qualifier, DefaultScope>
where
    K: TypedKey,
{
    MetadataBinding::new(key.qualifier(), DefaultScope)
}
