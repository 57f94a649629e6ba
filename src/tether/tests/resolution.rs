use std::error::Error;
use std::sync::Arc;

use mockall::automock;
use parking_lot::Mutex;
use tether::prelude::*;
use tether::scope::{Direct, Singleton, Transient};

#[automock]
trait Source: Send + Sync {
    fn next(&self) -> u32;
}

struct FnModule<F>(F);

impl<F> Module for FnModule<F>
where
    F: Fn(&mut dyn Configurer) + 'static,
{
    fn configure(
        &self,
        configurer: &mut dyn Configurer,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        (self.0)(configurer);
        Ok(())
    }
}

fn container<F>(setup: F) -> Container
where
    F: Fn(&mut dyn Configurer) + 'static,
{
    Container::init(FnModule(setup)).unwrap()
}

fn innermost(mut err: &ResolveError) -> &ResolveError {
    while let ResolveError::ObjectConstruction { source, .. } = err {
        match source.downcast_ref::<ResolveError>() {
            Some(inner) => err = inner,
            None => break,
        }
    }
    err
}

#[test]
fn external_value_round_trips() {
    let container = container(|c| {
        bind::<String>()
            .within(Direct)
            .to_value(String::from("value"))
            .set_on(c);
        bind::<String>()
            .qualified_by("transient")
            .within(Transient)
            .to_value(String::from("copy"))
            .set_on(c);
    });

    assert_eq!(container.get(key::of::<String>()).unwrap(), "value");
    assert_eq!(container.get(key::of::<String>()).unwrap(), "value");
    assert_eq!(container.get(key::named::<String>("transient")).unwrap(), "copy");
}

#[test]
fn external_shared_value_keeps_identity() {
    let shared = Arc::new(String::from("shared"));
    let bound = Arc::clone(&shared);
    let container = container(move |c| {
        bind::<Arc<String>>()
            .to_value(Arc::clone(&bound))
            .set_on(c);
    });

    let first = container.get(key::of::<Arc<String>>()).unwrap();
    let second = container.get(key::of::<Arc<String>>()).unwrap();
    assert!(Arc::ptr_eq(&first, &shared));
    assert!(Arc::ptr_eq(&second, &shared));
}

#[test]
fn factory_is_invoked_per_resolution() {
    let mut source = MockSource::new();
    source.expect_next().times(3).return_const(7u32);
    let source = Arc::new(source);

    let container = container(move |c| {
        let source = Arc::clone(&source);
        bind::<u32>().to_expr(move || source.next()).set_on(c);
    });

    for _ in 0..3 {
        assert_eq!(container.get(key::of::<u32>()).unwrap(), 7);
    }
}

#[test]
fn singleton_factory_is_invoked_once() {
    let mut source = MockSource::new();
    source.expect_next().times(1).return_const(9u32);
    let source = Arc::new(source);

    let container = container(move |c| {
        let source = Arc::clone(&source);
        bind::<u32>()
            .within(Singleton::new())
            .to_expr(move || source.next())
            .set_on(c);
    });

    for _ in 0..3 {
        assert_eq!(container.get(key::of::<u32>()).unwrap(), 9);
    }
}

#[test]
fn shared_product_is_handed_out_as_is() {
    let produced = Arc::new(Mutex::new(Vec::<Arc<u64>>::new()));
    let recorder = Arc::clone(&produced);
    let container = container(move |c| {
        let recorder = Arc::clone(&recorder);
        bind::<Arc<u64>>()
            .to_expr(move || {
                let object = Arc::new(64);
                recorder.lock().push(Arc::clone(&object));
                object
            })
            .set_on(c);
    });

    let object = container.get(key::of::<Arc<u64>>()).unwrap();
    let produced = produced.lock();
    assert_eq!(produced.len(), 1);
    assert!(Arc::ptr_eq(&object, &produced[0]));
}

#[test]
fn singleton_shared_factory_is_invoked_once() {
    let mut source = MockSource::new();
    source.expect_next().times(1).return_const(5u32);
    let source = Arc::new(source);

    let container = container(move |c| {
        let source = Arc::clone(&source);
        bind::<Arc<u32>>()
            .within(Singleton::new())
            .to_expr(move || Arc::new(source.next()))
            .set_on(c);
    });

    let first = container.get(key::of::<Arc<u32>>()).unwrap();
    let second = container.get(key::of::<Arc<u32>>()).unwrap();
    assert_eq!(*first, 5);
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn integer_literal_factory_takes_the_requested_type() {
    let container = container(|c| {
        bind::<u64>().to_expr(|| 5).set_on(c);
        bind::<u8>()
            .within(Singleton::new())
            .to_expr(|| 6)
            .set_on(c);
        bind::<i16>()
            .to_try_expr(|| Ok::<_, std::num::ParseIntError>(-7))
            .set_on(c);
    });

    assert_eq!(container.get(key::of::<u64>()).unwrap(), 5);
    assert_eq!(container.get(key::of::<u8>()).unwrap(), 6);
    assert_eq!(container.get(key::of::<i16>()).unwrap(), -7);
}

#[test]
fn factory_receives_the_resolving_container() {
    let seen = Arc::new(Mutex::new(None::<usize>));
    let recorder = Arc::clone(&seen);
    let container = container(move |c| {
        let recorder = Arc::clone(&recorder);
        bind::<u8>()
            .to_expr(move |resolver: &Container| {
                *recorder.lock() = Some(resolver as *const Container as usize);
                1u8
            })
            .set_on(c);
    });

    container.get(key::of::<u8>()).unwrap();
    assert_eq!(*seen.lock(), Some(&container as *const Container as usize));
}

#[test]
fn factory_resolves_its_dependencies() {
    let container = container(|c| {
        bind::<u16>().qualified_by("port").to_value(8080).set_on(c);
        bind::<String>()
            .to_try_expr(|resolver: &Container| {
                resolver
                    .get(key::named::<u16>("port"))
                    .map(|port| format!("localhost:{port}"))
            })
            .set_on(c);
    });

    assert_eq!(container.get(key::of::<String>()).unwrap(), "localhost:8080");
}

#[test]
fn factory_receives_its_descriptor() {
    let container = container(|c| {
        bind::<Vec<String>>()
            .to_expr(|_: &Container, site: &dyn Site| {
                vec![
                    site.requested().name().to_owned(),
                    site.expected().name().to_owned(),
                ]
            })
            .set_on(c);
    });

    let names = container.get(key::of::<Vec<String>>()).unwrap();
    assert_eq!(names[0], std::any::type_name::<Vec<String>>());
    assert_eq!(names[1], std::any::type_name::<Vec<String>>());
}

#[test]
fn referability_follows_strategy() {
    type Callback = dyn Fn(u32) -> u32 + Send + Sync;

    let container = container(|c| {
        bind::<i32>().within(Transient).to_value(1).set_on(c);
        bind::<i64>().to_value(2).set_on(c);
        bind::<u32>().to_expr(|| 3).set_on(c);
        bind::<Arc<Callback>>()
            .to_expr(Arc::new(|v: u32| v) as Arc<Callback>)
            .set_on(c);
    });

    assert_eq!(container.is_referable(&key::of::<i32>()), Some(false));
    assert_eq!(container.is_referable(&key::of::<i64>()), Some(true));
    assert_eq!(container.is_referable(&key::of::<u32>()), Some(true));
    assert_eq!(container.is_referable(&key::of::<Arc<Callback>>()), Some(false));
    assert_eq!(container.is_referable(&key::of::<u64>()), None);
}

#[test]
fn cyclic_dependency_is_reported() {
    let container = container(|c| {
        bind::<u32>()
            .to_try_expr(|resolver: &Container| resolver.get(key::of::<u64>()).map(|v| v as u32))
            .set_on(c);
        bind::<u64>()
            .to_try_expr(|resolver: &Container| resolver.get(key::of::<u32>()).map(u64::from))
            .set_on(c);
    });

    let err = container.get(key::of::<u32>()).unwrap_err();
    assert!(matches!(err, ResolveError::ObjectConstruction { .. }));
    assert!(matches!(
        innermost(&err),
        ResolveError::CyclicDependency { .. }
    ));

    assert!(container.get(key::of::<u32>()).is_err());
}

#[test]
fn unbound_key_is_not_found() {
    let container = container(|c| {
        bind::<i32>().to_value(1).set_on(c);
    });

    let err = container.get(key::named::<i32>("missing")).unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { .. }));
}

#[test]
fn factory_error_is_reported() {
    let container = container(|c| {
        bind::<i32>()
            .to_try_expr(|| "not a number".parse::<i32>())
            .set_on(c);
    });

    let err = container.get(key::of::<i32>()).unwrap_err();
    let ResolveError::ObjectConstruction { source, .. } = err else {
        panic!("the factory error should be reported");
    };
    assert!(source
        .downcast_ref::<std::num::ParseIntError>()
        .is_some());
}

#[test]
fn duplicated_binding_is_rejected() {
    let result = Container::init(FnModule(|c: &mut dyn Configurer| {
        bind::<i32>().to_value(1).set_on(c);
        bind::<i32>().to_expr(|| 2).set_on(c);
    }));

    assert!(matches!(result, Err(RegistryError::KeyDuplicated { .. })));
}
