use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::provider::Provide;
use crate::scope::{Create, Scope};
use crate::wrapper::Shared;

/// A strategy which obtains a value on the first creation only and shares
/// it with every later consumer.
///
/// The provider is called without holding the cache lock, so a provider
/// may resolve other objects. If two threads race on the first creation,
/// the first value stored wins and both receive it.
#[derive(Default)]
pub struct Singleton {
    objects: Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl Singleton {
    pub fn new() -> Self {
        Self::default()
    }

    fn cached<O>(&self) -> Option<Arc<O>>
    where
        O: Send + Sync + 'static,
    {
        let objects = self.objects.lock();
        let object = objects.get(&TypeId::of::<O>())?;
        Arc::clone(object).downcast::<O>().ok()
    }

    fn store<O>(&self, object: O) -> Arc<O>
    where
        O: Send + Sync + 'static,
    {
        let mut objects = self.objects.lock();
        let stored = objects
            .entry(TypeId::of::<O>())
            .or_insert_with(|| Arc::new(object));
        match Arc::clone(stored).downcast::<O>() {
            Ok(object) => object,
            Err(_) => unreachable!("objects are stored under their own `TypeId`"),
        }
    }
}

impl Debug for Singleton {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Singleton")
            .field("constructed", &self.objects.lock().len())
            .finish()
    }
}

impl Scope for Singleton {
    const REFERABLE: bool = true;
}

impl<T, N, R, O> Create<T, N, R, O> for Singleton
where
    R: ?Sized,
    O: Send + Sync + 'static,
{
    type Wrapper = Shared<O>;

    fn create<P>(&self, provider: &P) -> Self::Wrapper
    where
        P: Provide<Resolver = R, Output = O>,
    {
        if let Some(object) = self.cached::<O>() {
            return Shared::new(object);
        }
        Shared::new(self.store(provider.obtain()))
    }
}
