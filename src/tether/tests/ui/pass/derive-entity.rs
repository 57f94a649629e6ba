use std::error::Error;
use std::sync::Arc;

use tether::prelude::*;
use tether::scope::Singleton;

#[derive(Debug, Clone, PartialEq, Entity)]
pub struct Endpoint<P> {
    pub host: String,
    pub port: P,
}

#[interface]
pub trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

pub struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        String::from("hello")
    }
}

struct AppModule;

impl Module for AppModule {
    fn configure(
        &self,
        configurer: &mut dyn Configurer,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        bind::<Endpoint<u16>>()
            .to_expr(|| Endpoint {
                host: String::from("localhost"),
                port: 8080u16,
            })
            .set_on(configurer);

        bind::<Arc<dyn Greeter + Send + Sync>>()
            .expecting::<dyn Greeter + Send + Sync>()
            .within(Singleton::new())
            .to_expr(|| Arc::new(English) as Arc<dyn Greeter + Send + Sync>)
            .set_on(configurer);

        Ok(())
    }
}

fn main() {
    let container = Container::init(AppModule).unwrap();

    let endpoint = container.get(key::of::<Endpoint<u16>>()).unwrap();
    assert_eq!(endpoint.port, 8080);

    let greeter = container
        .get(key::of::<Arc<dyn Greeter + Send + Sync>>())
        .unwrap();
    assert_eq!(greeter.greet(), "hello");
}
