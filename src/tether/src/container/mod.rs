pub mod registry;

mod binding;
mod constructing;
mod core;
mod handle;

use std::error::Error;
use std::sync::Arc;

use snafu::prelude::*;

use crate::key::Key;
use crate::util::any::AsAny;

pub(crate) use binding::{Binding, ScopedBinding};
pub use handle::Container;

/// An object which can be stored in and handed out by a [`Container`].
pub trait Managed: AsAny + Send + Sync + 'static {}

impl<T> Managed for T where T: AsAny + Send + Sync + 'static {}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ResolveError {
    #[snafu(display("could not find the binding identified by the given key {key}"))]
    #[non_exhaustive]
    NotFound { key: Box<dyn Key> },
    #[snafu(display("could not resolve the object {key} which depends on itself somehow"))]
    #[non_exhaustive]
    CyclicDependency { key: Box<dyn Key> },
    #[snafu(display("could not construct the object {key}"))]
    #[non_exhaustive]
    ObjectConstruction {
        key: Box<dyn Key>,
        source: Arc<dyn Error + Send + Sync>,
    },
}

impl Clone for ResolveError {
    fn clone(&self) -> Self {
        match self {
            Self::NotFound { key } => Self::NotFound {
                key: key.dyn_clone(),
            },
            Self::CyclicDependency { key } => Self::CyclicDependency {
                key: key.dyn_clone(),
            },
            Self::ObjectConstruction { key, source } => Self::ObjectConstruction {
                key: key.dyn_clone(),
                source: Arc::clone(source),
            },
        }
    }
}
