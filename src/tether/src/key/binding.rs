use std::any;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::container::Managed;
use crate::key::{Qualifier, TypedKey};

/// Identifies the binding of `T` selected by `qualifier`.
///
/// The target type lives only in the type parameter, so two keys of the
/// same type compare by qualifier alone. Keys of different targets are told
/// apart when erased behind [`Key`](crate::key::Key).
pub struct BindingKey<T, Q> {
    qualifier: Q,
    target: PhantomData<fn() -> T>,
}

impl<T, Q: Qualifier> BindingKey<T, Q> {
    pub(crate) fn new(qualifier: Q) -> Self {
        Self {
            qualifier,
            target: PhantomData,
        }
    }

    fn target_name() -> &'static str {
        any::type_name::<T>()
    }
}

impl<T, Q: Qualifier> Clone for BindingKey<T, Q> {
    fn clone(&self) -> Self {
        Self::new(self.qualifier)
    }
}

impl<T, Q: Qualifier> Copy for BindingKey<T, Q> {}

impl<T, Q: Qualifier> PartialEq for BindingKey<T, Q> {
    fn eq(&self, other: &Self) -> bool {
        self.qualifier == other.qualifier
    }
}

impl<T, Q: Qualifier> Eq for BindingKey<T, Q> {}

impl<T, Q: Qualifier> Hash for BindingKey<T, Q> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::target_name().hash(state);
        self.qualifier.hash(state);
    }
}

impl<T, Q: Qualifier> Debug for BindingKey<T, Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("BindingKey")
            .field("target", &Self::target_name())
            .field("qualifier", &self.qualifier)
            .finish()
    }
}

impl<T, Q: Qualifier> Display for BindingKey<T, Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}@{:?}", Self::target_name(), self.qualifier)
    }
}

impl<T: Managed, Q: Qualifier> TypedKey for BindingKey<T, Q> {
    type Target = T;

    type Qualifier = Q;

    fn qualifier(&self) -> Self::Qualifier {
        self.qualifier
    }
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;
    use std::collections::HashSet;
    use std::sync::Arc;

    use crate::key::Key;

    use super::*;

    #[test]
    fn erased_key_reports_its_target() {
        let key: Box<dyn Key> = Box::new(BindingKey::<Arc<str>, _>::new("shared"));
        assert_eq!(key.target_type(), TypeId::of::<Arc<str>>());
    }

    #[test]
    fn erased_keys_differ_by_target_or_qualifier() {
        let mut keys: HashSet<Box<dyn Key>> = HashSet::new();
        assert!(keys.insert(Box::new(BindingKey::<u8, _>::new(()))));
        assert!(keys.insert(Box::new(BindingKey::<u16, _>::new(()))));
        assert!(keys.insert(Box::new(BindingKey::<u8, _>::new(1u32))));
        assert!(keys.insert(Box::new(BindingKey::<u8, _>::new(2u32))));
        assert!(!keys.insert(BindingKey::<u8, _>::new(1u32).dyn_clone()));
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn key_is_shown_with_target_and_qualifier() {
        let key = BindingKey::<u64, _>::new("port");
        assert_eq!(key.to_string(), "u64@\"port\"");
        assert_eq!(
            format!("{key:?}"),
            "BindingKey { target: \"u64\", qualifier: \"port\" }"
        );
    }
}
