//! Static classification of bound and produced types.
//!
//! Rust offers no specialization, so every property the strategies branch
//! on is an associated type drawn from a closed, sealed set. A type either
//! has exactly one classification or does not participate at all, which
//! turns any unsupported binding into a configuration-time compile error.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use crate::wrapper::{Shared, Unique};

mod sealed {
    pub trait Sealed {}
}

/// Whether an interface is a plain object or an expression that yields a
/// typed result when called.
pub trait Kind: sealed::Sealed {
    /// True for callable interfaces exposing a result type.
    const PRODUCES_RESULT: bool;
}

/// A concrete, reusable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Object;

/// A callable which yields a typed result, e.g. `dyn Fn() -> i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Function;

impl sealed::Sealed for Object {}

impl sealed::Sealed for Function {}

impl Kind for Object {
    const PRODUCES_RESULT: bool = false;
}

impl Kind for Function {
    const PRODUCES_RESULT: bool = true;
}

/// A type that may be expected by a binding.
///
/// Implemented for common std types, callables and smart pointers. Use
/// `#[derive(Entity)]` for your own types and `#[interface]` for your own
/// traits.
pub trait Interface {
    type Kind: Kind;
}

/// How a produced value is owned once wrapped.
pub trait Ownership: sealed::Sealed {
    const SHAREABLE: bool;
}

/// Sole ownership, wrapped in [`Unique`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exclusive;

/// Reference-counted ownership, wrapped in [`Shared`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shareable;

impl sealed::Sealed for Exclusive {}

impl sealed::Sealed for Shareable {}

impl Ownership for Exclusive {
    const SHAREABLE: bool = false;
}

impl Ownership for Shareable {
    const SHAREABLE: bool = true;
}

/// A value that can be produced by a provider and wrapped for its consumer.
///
/// Shared-ownership handles ([`Arc<T>`] and `&Arc<T>`) are wrapped in
/// [`Shared`] pointing at the same object; everything else is wrapped in
/// [`Unique`].
pub trait Entity: Sized {
    type Ownership: Ownership;

    type Wrapper;

    fn wrap(self) -> Self::Wrapper;
}

impl<T: ?Sized> Entity for Arc<T> {
    type Ownership = Shareable;

    type Wrapper = Shared<T>;

    fn wrap(self) -> Self::Wrapper {
        Shared::new(self)
    }
}

impl<T: ?Sized> Entity for &Arc<T> {
    type Ownership = Shareable;

    type Wrapper = Shared<T>;

    fn wrap(self) -> Self::Wrapper {
        Shared::new(Arc::clone(self))
    }
}

impl<T: ?Sized + Interface> Interface for Arc<T> {
    type Kind = T::Kind;
}

impl<T: ?Sized + Interface> Interface for Box<T> {
    type Kind = T::Kind;
}

impl<T: ?Sized> Entity for Box<T> {
    type Ownership = Exclusive;

    type Wrapper = Unique<Self>;

    fn wrap(self) -> Self::Wrapper {
        Unique::new(self)
    }
}

macro_rules! impl_object {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Interface for $ty {
                type Kind = Object;
            }

            impl Entity for $ty {
                type Ownership = Exclusive;

                type Wrapper = Unique<Self>;

                fn wrap(self) -> Self::Wrapper {
                    Unique::new(self)
                }
            }
        )*
    };
}

impl_object!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

macro_rules! impl_generic_object {
    ($(<$($param:ident),*> $ty:ty),* $(,)?) => {
        $(
            impl<$($param),*> Interface for $ty {
                type Kind = Object;
            }

            impl<$($param),*> Entity for $ty {
                type Ownership = Exclusive;

                type Wrapper = Unique<Self>;

                fn wrap(self) -> Self::Wrapper {
                    Unique::new(self)
                }
            }
        )*
    };
}

impl_generic_object!(
    <T> Vec<T>,
    <T> Option<T>,
    <T, E> Result<T, E>,
    <K, V, H> HashMap<K, V, H>,
    <T, H> HashSet<T, H>,
    <K, V> BTreeMap<K, V>,
);

macro_rules! for_all_arities {
    ($implementation:ident) => {
        $implementation!();
        $implementation!(A1);
        $implementation!(A1, A2);
        $implementation!(A1, A2, A3);
        $implementation!(A1, A2, A3, A4);
        $implementation!(A1, A2, A3, A4, A5);
        $implementation!(A1, A2, A3, A4, A5, A6);
        $implementation!(A1, A2, A3, A4, A5, A6, A7);
        $implementation!(A1, A2, A3, A4, A5, A6, A7, A8);
    };
}

macro_rules! impl_tuple {
    () => {};
    ($($arg:ident),+) => {
        impl<$($arg,)+> Interface for ($($arg,)+) {
            type Kind = Object;
        }

        impl<$($arg,)+> Entity for ($($arg,)+) {
            type Ownership = Exclusive;

            type Wrapper = Unique<Self>;

            fn wrap(self) -> Self::Wrapper {
                Unique::new(self)
            }
        }
    };
}

macro_rules! impl_function {
    ($($arg:ident),*) => {
        impl<O, $($arg,)*> Interface for dyn Fn($($arg,)*) -> O {
            type Kind = Function;
        }

        impl<O, $($arg,)*> Interface for dyn Fn($($arg,)*) -> O + Send + Sync {
            type Kind = Function;
        }

        impl<O, $($arg,)*> Interface for fn($($arg,)*) -> O {
            type Kind = Function;
        }

        impl<O, $($arg,)*> Entity for fn($($arg,)*) -> O {
            type Ownership = Exclusive;

            type Wrapper = Unique<Self>;

            fn wrap(self) -> Self::Wrapper {
                Unique::new(self)
            }
        }
    };
}

for_all_arities!(impl_tuple);
for_all_arities!(impl_function);
