//! Input side of a pipeline component.
//!
//! Implemented by transformers and consumers; names the item type a component
//! accepts and the stream it is fed from. Together with [`crate::output::Output`]
//! this is what lets the pipeline builder check connections at compile time.

use futures::Stream;

/// Trait for components that consume an input stream.
pub trait Input
where
  Self::Input: Send + 'static,
{
  /// Item type accepted by this component.
  type Input;
  /// The stream of input items. Concrete components use a pinned boxed
  /// stream so upstream stages of any shape can feed them.
  type InputStream: Stream<Item = Self::Input> + Send + 'static;
}
