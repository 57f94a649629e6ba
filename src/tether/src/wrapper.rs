//! Ownership wrappers produced by resolution.
//!
//! Which wrapper a strategy produces is decided statically from the produced
//! type (see [`Entity`]). The container then converts the wrapper into the
//! form the consuming site asks for through [`Extract`].
//!
//! [`Entity`]: crate::entity::Entity

use std::error::Error;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::ops::Deref;
use std::sync::Arc;

/// An error reported by a factory while producing an object.
pub type ConstructionError = Box<dyn Error + Send + Sync>;

/// A wrapper with sole ownership of its object. It is deliberately not
/// [`Clone`].
pub struct Unique<T> {
    object: T,
}

impl<T> Unique<T> {
    pub fn new(object: T) -> Self {
        Self { object }
    }

    pub fn into_inner(self) -> T {
        self.object
    }
}

impl<T> Deref for Unique<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.object
    }
}

impl<T: Debug> Debug for Unique<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("Unique").field(&self.object).finish()
    }
}

/// A reference-counted wrapper whose object may be shared by any number of
/// consumers.
pub struct Shared<T: ?Sized> {
    object: Arc<T>,
}

impl<T: ?Sized> Shared<T> {
    pub fn new(object: Arc<T>) -> Self {
        Self { object }
    }

    pub fn into_arc(self) -> Arc<T> {
        self.object
    }

    /// Returns true if both wrappers point to the same object.
    pub fn ptr_eq(&self, other: &Arc<T>) -> bool {
        Arc::ptr_eq(&self.object, other)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            object: Arc::clone(&self.object),
        }
    }
}

impl<T: ?Sized> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.object
    }
}

impl<T: ?Sized + Debug> Debug for Shared<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("Shared").field(&&*self.object).finish()
    }
}

/// Conversion of a wrapper into the form `U` expected by a consuming site.
///
/// The only failure is a factory that produced an [`Err`], which surfaces
/// as the factory's own error.
pub trait Extract<U> {
    /// Unwraps `self` into `U`.
    ///
    /// # Errors
    ///
    /// Returns the factory's error if the wrapped object is an [`Err`].
    fn extract(self) -> Result<U, ConstructionError>;
}

impl<T> Extract<T> for Unique<T> {
    fn extract(self) -> Result<T, ConstructionError> {
        Ok(self.object)
    }
}

impl<T, E> Extract<T> for Unique<Result<T, E>>
where
    E: Into<ConstructionError>,
{
    fn extract(self) -> Result<T, ConstructionError> {
        self.object.map_err(Into::into)
    }
}

impl<T: ?Sized> Extract<Arc<T>> for Shared<T> {
    fn extract(self) -> Result<Arc<T>, ConstructionError> {
        Ok(self.object)
    }
}

impl<T: Clone> Extract<T> for Shared<T> {
    fn extract(self) -> Result<T, ConstructionError> {
        Ok(T::clone(&self.object))
    }
}
