use std::error::Error;
use std::sync::Arc;

use tether::prelude::*;

fn main() {
    let container = Container::init(AppModule::new("greeter")).unwrap();
    let app = container.get(key::of::<App>()).unwrap();
    app.run();
}

struct AppModule {
    app_name: &'static str,
}

impl AppModule {
    fn new(app_name: &'static str) -> Self {
        Self { app_name }
    }
}

impl Module for AppModule {
    fn configure(
        &self,
        configurer: &mut dyn Configurer,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        bind::<&'static str>()
            .to_value(self.app_name)
            .qualified_by("app_name")
            .set_on(configurer);

        bind::<Arc<dyn Logger>>()
            .to_value(Arc::new(ConsoleLogger) as Arc<dyn Logger>)
            .set_on(configurer);

        bind::<Arc<dyn Greeter>>()
            .qualified_by(GreeterKind::English)
            .to_try_expr(|c: &Container| -> Result<Arc<dyn Greeter>, ResolveError> {
                Ok(Arc::new(EnglishGreeter::new(c.get(key::of::<Arc<dyn Logger>>())?)))
            })
            .set_on(configurer);

        bind::<Arc<dyn Greeter>>()
            .qualified_by(GreeterKind::Chinese)
            .to_try_expr(|c: &Container| -> Result<Arc<dyn Greeter>, ResolveError> {
                Ok(Arc::new(ChineseGreeter::new(c.get(key::of::<Arc<dyn Logger>>())?)))
            })
            .set_on(configurer);

        bind::<App>().to_try_expr(App::new).set_on(configurer);

        Ok(())
    }
}

#[interface]
trait Logger: Send + Sync + 'static {
    fn log(&self, app_name: &str, message: &str);
}

struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, app_name: &str, message: &str) {
        eprintln!("[{}] {}", app_name, message);
    }
}

#[interface]
trait Greeter: Send + Sync + 'static {
    fn greet(&self, app_name: &str);
}

struct EnglishGreeter {
    logger: Arc<dyn Logger>,
}

impl EnglishGreeter {
    fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl Greeter for EnglishGreeter {
    fn greet(&self, app_name: &str) {
        self.logger.log(app_name, "Hello World!");
    }
}

struct ChineseGreeter {
    logger: Arc<dyn Logger>,
}

impl ChineseGreeter {
    fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl Greeter for ChineseGreeter {
    fn greet(&self, app_name: &str) {
        self.logger.log(app_name, "你好世界!");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum GreeterKind {
    English,
    Chinese,
}

#[derive(Entity)]
struct App {
    app_name: &'static str,
    logger: Arc<dyn Logger>,
    greeters: Vec<Arc<dyn Greeter>>,
}

impl App {
    fn new(container: &Container) -> Result<Self, ResolveError> {
        Ok(Self {
            app_name: container.get(key::named::<&'static str>("app_name"))?,
            logger: container.get(key::of::<Arc<dyn Logger>>())?,
            greeters: vec![
                container.get(key::qualified::<Arc<dyn Greeter>, _>(GreeterKind::English))?,
                container.get(key::qualified::<Arc<dyn Greeter>, _>(GreeterKind::Chinese))?,
            ],
        })
    }

    fn run(&self) {
        self.logger
            .log(self.app_name, "Greeting from tether managed objects:");
        for greeter in &self.greeters {
            greeter.greet(self.app_name);
        }
    }
}
