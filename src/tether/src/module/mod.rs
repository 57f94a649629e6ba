pub mod dsl;

use std::any;
use std::error::Error;

use crate::container::registry::Configurer;

pub use dsl::{bind, bind_key};

/// A unit of configuration which registers bindings on a [`Configurer`].
pub trait Module: 'static {
    fn setup(&self, configurer: &mut dyn Configurer) {
        if let Err(err) = self.configure(configurer) {
            configurer.report_module_error(any::type_name::<Self>(), err);
        }
    }

    fn configure(&self, configurer: &mut dyn Configurer)
        -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// A list of modules, set up in insertion order.
#[derive(Default)]
pub struct Configuration {
    modules: Vec<Box<dyn Module>>,
}

impl Configuration {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with<M: Module>(mut self, module: M) -> Self {
        self.modules.push(Box::new(module));
        self
    }

    pub fn compose(mut self, mut other: Configuration) -> Self {
        self.modules.append(&mut other.modules);
        self
    }
}

impl Module for Configuration {
    fn setup(&self, configurer: &mut dyn Configurer) {
        self.modules
            .iter()
            .for_each(|module| module.setup(configurer));
    }

    fn configure(
        &self,
        configurer: &mut dyn Configurer,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.setup(configurer);
        Ok(())
    }
}
