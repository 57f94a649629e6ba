/// A hint telling a provider where the caller would like the object to live.
///
/// Providers are free to ignore the hint. The external providers do, since
/// the object already exists.
pub trait Memory: Copy + Default + Send + Sync + 'static {}

/// Allocate on the heap. This is the default hint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Heap;

/// Keep the object inline in its owner.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stack;

impl Memory for Heap {}

impl Memory for Stack {}
