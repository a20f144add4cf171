//! Error handling for pipeline components.
//!
//! Components carry an [`ErrorStrategy`] deciding what happens when an item
//! fails: stop the pipeline, skip the item, retry, or defer to a custom
//! handler. [`StreamError`] wraps the failure with a timestamp, the offending
//! item, and identification of the component that raised it.
//!
//! The domain error of the smoothing core lives next to it in
//! [`crate::averager::CapacityError`]; this module is the shared plumbing.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Action taken when an error occurs in a pipeline component.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorAction {
  /// Stop processing immediately.
  Stop,
  /// Skip the item that caused the error and continue.
  Skip,
  /// Retry the operation that caused the error.
  Retry,
}

type CustomErrorHandler<T> = Arc<dyn Fn(&StreamError<T>) -> ErrorAction + Send + Sync>;

/// Strategy a component applies when one of its items fails.
pub enum ErrorStrategy<T> {
  /// Stop processing immediately. The default; surfaces the failure rather
  /// than producing partial results.
  Stop,
  /// Skip items that cause errors and continue.
  Skip,
  /// Retry failed operations up to the given number of times.
  Retry(usize),
  /// Custom handling based on the full error context.
  Custom(CustomErrorHandler<T>),
}

impl<T: fmt::Debug + Clone + Send + Sync> ErrorStrategy<T> {
  /// Creates a custom strategy from a handler function.
  pub fn new_custom<F>(f: F) -> Self
  where
    F: Fn(&StreamError<T>) -> ErrorAction + Send + Sync + 'static,
  {
    Self::Custom(Arc::new(f))
  }
}

impl<T: fmt::Debug + Clone + Send + Sync> Clone for ErrorStrategy<T> {
  fn clone(&self) -> Self {
    match self {
      ErrorStrategy::Stop => ErrorStrategy::Stop,
      ErrorStrategy::Skip => ErrorStrategy::Skip,
      ErrorStrategy::Retry(n) => ErrorStrategy::Retry(*n),
      ErrorStrategy::Custom(handler) => ErrorStrategy::Custom(handler.clone()),
    }
  }
}

impl<T: fmt::Debug + Clone + Send + Sync> fmt::Debug for ErrorStrategy<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ErrorStrategy::Stop => write!(f, "ErrorStrategy::Stop"),
      ErrorStrategy::Skip => write!(f, "ErrorStrategy::Skip"),
      ErrorStrategy::Retry(n) => write!(f, "ErrorStrategy::Retry({})", n),
      ErrorStrategy::Custom(_) => write!(f, "ErrorStrategy::Custom"),
    }
  }
}

impl<T: fmt::Debug + Clone + Send + Sync> PartialEq for ErrorStrategy<T> {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (ErrorStrategy::Stop, ErrorStrategy::Stop) => true,
      (ErrorStrategy::Skip, ErrorStrategy::Skip) => true,
      (ErrorStrategy::Retry(n1), ErrorStrategy::Retry(n2)) => n1 == n2,
      (ErrorStrategy::Custom(_), ErrorStrategy::Custom(_)) => true,
      _ => false,
    }
  }
}

/// Error raised during stream processing, with component identification and
/// retry tracking.
#[derive(Debug)]
pub struct StreamError<T> {
  /// The original error.
  pub source: Box<dyn Error + Send + Sync>,
  /// When and on which item the error occurred.
  pub context: ErrorContext<T>,
  /// The component that raised it.
  pub component: ComponentInfo,
  /// Number of times this error has been retried.
  pub retries: usize,
}

impl<T: fmt::Debug + Clone + Send + Sync> StreamError<T> {
  /// Creates a stream error with a retry count of zero.
  pub fn new(
    source: Box<dyn Error + Send + Sync>,
    context: ErrorContext<T>,
    component: ComponentInfo,
  ) -> Self {
    Self {
      source,
      context,
      component,
      retries: 0,
    }
  }
}

impl<T: fmt::Debug + Clone + Send + Sync> Clone for StreamError<T> {
  fn clone(&self) -> Self {
    Self {
      source: Box::new(StringError(self.source.to_string())),
      context: self.context.clone(),
      component: self.component.clone(),
      retries: self.retries,
    }
  }
}

impl<T: fmt::Debug + Clone + Send + Sync> fmt::Display for StreamError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "error in {} ({}): {}",
      self.component.name, self.component.type_name, self.source
    )
  }
}

impl<T: fmt::Debug + Clone + Send + Sync> Error for StreamError<T> {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    Some(self.source.as_ref())
  }
}

/// An error type wrapping a plain string message.
#[derive(Debug)]
pub struct StringError(
  /// The message.
  pub String,
);

impl fmt::Display for StringError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Error for StringError {}

/// When and where an error occurred.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext<T> {
  /// Timestamp of the error.
  pub timestamp: chrono::DateTime<chrono::Utc>,
  /// The item being processed, when available.
  pub item: Option<T>,
  /// Name of the component involved.
  pub component_name: String,
  /// Type of the component involved.
  pub component_type: String,
}

impl<T: fmt::Debug + Clone + Send + Sync> Default for ErrorContext<T> {
  fn default() -> Self {
    Self {
      timestamp: chrono::Utc::now(),
      item: None,
      component_name: "default".to_string(),
      component_type: "default".to_string(),
    }
  }
}

/// Identifies a pipeline component in logs and errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentInfo {
  /// Component name, usually set through the component's `with_name`.
  pub name: String,
  /// Rust type name of the component.
  pub type_name: String,
}

impl ComponentInfo {
  /// Creates component info from a name and type name.
  pub fn new(name: String, type_name: String) -> Self {
    Self { name, type_name }
  }
}

impl Default for ComponentInfo {
  fn default() -> Self {
    Self {
      name: "default".to_string(),
      type_name: "default".to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_strategy_equality() {
    assert_eq!(ErrorStrategy::<i32>::Stop, ErrorStrategy::Stop);
    assert_eq!(ErrorStrategy::<i32>::Retry(3), ErrorStrategy::Retry(3));
    assert_ne!(ErrorStrategy::<i32>::Retry(3), ErrorStrategy::Retry(4));
    assert_ne!(ErrorStrategy::<i32>::Stop, ErrorStrategy::Skip);
  }

  #[test]
  fn test_custom_strategy_invocation() {
    let strategy = ErrorStrategy::<i32>::new_custom(|error| {
      if error.retries < 2 {
        ErrorAction::Retry
      } else {
        ErrorAction::Stop
      }
    });
    let mut error = StreamError::new(
      Box::new(StringError("boom".to_string())),
      ErrorContext::default(),
      ComponentInfo::default(),
    );
    if let ErrorStrategy::Custom(handler) = &strategy {
      assert_eq!(handler(&error), ErrorAction::Retry);
      error.retries = 2;
      assert_eq!(handler(&error), ErrorAction::Stop);
    } else {
      panic!("expected custom strategy");
    }
  }

  #[test]
  fn test_stream_error_display_names_component() {
    let error = StreamError::<i32>::new(
      Box::new(StringError("sensor gone".to_string())),
      ErrorContext::default(),
      ComponentInfo::new("accel".to_string(), "ChannelProducer".to_string()),
    );
    let rendered = error.to_string();
    assert!(rendered.contains("accel"));
    assert!(rendered.contains("sensor gone"));
  }

  #[test]
  fn test_stream_error_clone_preserves_message() {
    let error = StreamError::<i32>::new(
      Box::new(StringError("boom".to_string())),
      ErrorContext::default(),
      ComponentInfo::default(),
    );
    let cloned = error.clone();
    assert_eq!(cloned.source.to_string(), "boom");
    assert_eq!(cloned.retries, 0);
  }
}
