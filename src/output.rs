//! Output side of a pipeline component.
//!
//! Implemented by producers and transformers; names the item type a component
//! emits and the stream it emits on.

use futures::Stream;

/// Trait for components that produce an output stream.
pub trait Output
where
  Self::Output: Send + 'static,
{
  /// Item type emitted by this component.
  type Output;
  /// The stream of output items.
  type OutputStream: Stream<Item = Self::Output> + Send + 'static;
}
