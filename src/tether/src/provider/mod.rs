mod evaluate;
mod seed;
mod supply;

use crate::memory::{Heap, Memory};

pub use evaluate::Evaluate;
pub use seed::Seed;
pub use supply::Supply;

/// An ephemeral, resolution-scoped source of raw values for a strategy.
///
/// A [`Provide`] implementation is built for a single resolution and
/// dropped right after. Strategies call [`Provide::obtain`] to get the raw
/// value they wrap, and factories reach the active resolver through
/// [`Provide::resolver`].
///
/// Whether a strategy can work with a provider is decided by the
/// provider's [`Provide::Output`] alone, without calling anything. See
/// [`Create`].
///
/// [`Create`]: crate::scope::Create
pub trait Provide {
    /// The active resolver.
    type Resolver: ?Sized;

    /// The raw value produced on each call.
    type Output;

    /// Returns the active resolver.
    fn resolver(&self) -> &Self::Resolver;

    /// Produces a raw value, given a hint about where it should live.
    fn obtain_in<M: Memory>(&self, memory: M) -> Self::Output;

    /// Produces a raw value with the default [`Heap`] hint.
    fn obtain(&self) -> Self::Output {
        self.obtain_in(Heap)
    }
}
