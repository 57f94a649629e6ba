use std::any::{self, TypeId};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;

/// The identity of a type, comparable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeMeta {
    id: TypeId,
    name: &'static str,
}

impl TypeMeta {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    pub fn of_val<T: ?Sized + 'static>(_: &T) -> Self {
        Self::of::<T>()
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// An object-safe view of a binding site, handed to descriptor-aware
/// factories. A closure cannot name its own type, so it cannot accept a
/// [`Descriptor`] by value.
pub trait Site: Debug {
    /// The type requested by the consumer.
    fn requested(&self) -> TypeMeta;

    /// The interface the binding was declared for.
    fn expected(&self) -> TypeMeta;

    /// The type of the bound entity itself.
    fn given(&self) -> TypeMeta;
}

/// A zero-sized bundle of the requested type `T`, the expected interface `E`
/// and the given entity type `G` of one binding site.
pub struct Descriptor<T, E, G>
where
    T: 'static,
    E: ?Sized + 'static,
    G: 'static,
{
    _marker: PhantomData<(fn() -> T, fn(&E), fn() -> G)>,
}

impl<T, E, G> Descriptor<T, E, G>
where
    T: 'static,
    E: ?Sized + 'static,
    G: 'static,
{
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T, E, G> Default for Descriptor<T, E, G>
where
    T: 'static,
    E: ?Sized + 'static,
    G: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E, G> Clone for Descriptor<T, E, G>
where
    T: 'static,
    E: ?Sized + 'static,
    G: 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E, G> Copy for Descriptor<T, E, G>
where
    T: 'static,
    E: ?Sized + 'static,
    G: 'static,
{
}

impl<T, E, G> Debug for Descriptor<T, E, G>
where
    T: 'static,
    E: ?Sized + 'static,
    G: 'static,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Descriptor")
            .field("requested", &any::type_name::<T>())
            .field("expected", &any::type_name::<E>())
            .field("given", &any::type_name::<G>())
            .finish()
    }
}

impl<T, E, G> Site for Descriptor<T, E, G>
where
    T: 'static,
    E: ?Sized + 'static,
    G: 'static,
{
    fn requested(&self) -> TypeMeta {
        TypeMeta::of::<T>()
    }

    fn expected(&self) -> TypeMeta {
        TypeMeta::of::<E>()
    }

    fn given(&self) -> TypeMeta {
        TypeMeta::of::<G>()
    }
}
