use std::error::Error;
use std::fmt;
use std::sync::Arc;

use tether::prelude::*;
use tether::scope::{Direct, Singleton, Transient};

#[derive(Debug)]
struct Misconfigured;

impl fmt::Display for Misconfigured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("misconfigured")
    }
}

impl Error for Misconfigured {}

type Handler = dyn Fn(u32) -> bool + Send + Sync;

struct AppModule;

impl Module for AppModule {
    fn configure(
        &self,
        configurer: &mut dyn Configurer,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        // External values under every strategy.
        bind::<u32>().to_value(1).set_on(configurer);
        bind::<u32>()
            .qualified_by("transient")
            .within(Transient)
            .to_value(2)
            .set_on(configurer);
        bind::<Arc<str>>()
            .within(Direct)
            .to_value(Arc::from("shared"))
            .set_on(configurer);
        bind::<Vec<u8>>()
            .within(Singleton::new())
            .to_value(vec![1, 2, 3])
            .set_on(configurer);

        // Factories of every shape.
        bind::<u64>().to_expr(|| 64).set_on(configurer);
        bind::<i64>()
            .to_expr(|c: &Container| c.get(key::of::<u32>()).map_or(-1, i64::from))
            .set_on(configurer);
        bind::<&'static str>()
            .to_expr(|_: &Container, site: &dyn Site| site.requested().name())
            .set_on(configurer);
        bind::<Arc<String>>()
            .within(Singleton::new())
            .to_expr(|| Arc::new(String::from("singleton")))
            .set_on(configurer);
        bind::<Box<u16>>().to_expr(|| Box::new(16)).set_on(configurer);
        bind::<u16>()
            .qualified_by("fallible")
            .to_try_expr(|| Ok::<_, Misconfigured>(17))
            .set_on(configurer);
        bind::<i8>()
            .to_try_expr(|| Err::<i8, _>(Misconfigured))
            .set_on(configurer);

        // A stored callable.
        bind::<Arc<Handler>>()
            .to_expr(Arc::new(|v: u32| v % 2 == 0) as Arc<Handler>)
            .set_on(configurer);
        bind::<fn(u8) -> u8>()
            .qualified_by("double")
            .to_expr((|v: u8| v * 2) as fn(u8) -> u8)
            .set_on(configurer);

        Ok(())
    }
}

fn main() {
    let container = Container::init(AppModule).unwrap();

    assert_eq!(container.get(key::of::<u32>()).unwrap(), 1);
    assert_eq!(container.get(key::named::<u32>("transient")).unwrap(), 2);
    assert_eq!(&*container.get(key::of::<Arc<str>>()).unwrap(), "shared");
    assert_eq!(container.get(key::of::<Vec<u8>>()).unwrap(), [1, 2, 3]);
    assert_eq!(container.get(key::of::<u64>()).unwrap(), 64);
    assert_eq!(container.get(key::of::<i64>()).unwrap(), 1);
    assert_eq!(container.get(key::of::<&str>()).unwrap(), "&str");
    assert_eq!(*container.get(key::of::<Arc<String>>()).unwrap(), "singleton");
    assert_eq!(*container.get(key::of::<Box<u16>>()).unwrap(), 16);
    assert!(container.get(key::of::<i8>()).is_err());
    assert_eq!(container.get(key::named::<u16>("fallible")).unwrap(), 17);
    assert_eq!((*container.get(key::of::<Arc<Handler>>()).unwrap())(4), true);
    assert_eq!(container.get(key::named::<fn(u8) -> u8>("double")).unwrap()(3), 6);
}
