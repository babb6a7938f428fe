use std::collections::HashMap;

use serde::Serialize;

/// A zero-argument callback that operands reference as `@name`.
///
/// Implemented for every `Fn() -> T` whose result converts into a
/// [`serde_json::Value`], so plain closures returning `bool`, numbers or
/// strings can be registered directly.
pub trait Callback {
    /// Runs the callback and returns its result.
    fn invoke(&self) -> serde_json::Value;
}

impl<F, T> Callback for F
    where F: Fn() -> T,
          T: Into<serde_json::Value>
{
    fn invoke(&self) -> serde_json::Value {
        self().into()
    }
}

/// The host-supplied source of variables and callbacks.
///
/// The evaluator only reads from an environment; it never stores anything in
/// it.
pub trait Environment {
    /// Looks up the root variable `name` (the part of a `$` operand before
    /// the first `.`).
    fn variable(&self, name: &str) -> Option<&serde_json::Value>;

    /// Looks up the callback `name` (the part of an `@` operand after the
    /// `@`).
    fn callback(&self, name: &str) -> Option<&dyn Callback>;
}

/// A ready-made [`Environment`] backed by hash maps.
///
/// # Example
/// ```
/// use qualex::interpreter::environment::{Environment, Scope};
/// use serde_json::json;
///
/// let scope = Scope::new().with_variable("env", json!({ "mode": "production" }))
///                         .with_callback("isEnabled", || true);
///
/// assert_eq!(scope.variable("env"), Some(&json!({ "mode": "production" })));
/// assert!(scope.callback("isEnabled").is_some());
/// assert!(scope.callback("missing").is_none());
/// ```
#[derive(Default)]
pub struct Scope {
    variables: HashMap<String, serde_json::Value>,
    callbacks: HashMap<String, Box<dyn Callback>>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a variable and returns the scope, for chaining.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>)
                         -> Self {
        self.set_variable(name, value);
        self
    }

    /// Binds or replaces a variable.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Binds a structured record as a variable.
    ///
    /// The record is serialized to a JSON object, so each of its serialized
    /// fields can be reached with a dotted path such as `$app.debug`.
    ///
    /// # Errors
    /// Returns the serializer error if the record cannot be represented as
    /// JSON (for example a map with non-string keys).
    pub fn bind<T: Serialize>(&mut self, name: impl Into<String>, record: &T)
                              -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(record)?;
        self.variables.insert(name.into(), value);
        Ok(())
    }

    /// Registers a callback and returns the scope, for chaining.
    #[must_use]
    pub fn with_callback(mut self, name: impl Into<String>, callback: impl Callback + 'static)
                         -> Self {
        self.register_callback(name, callback);
        self
    }

    /// Registers or replaces a callback.
    pub fn register_callback(&mut self,
                             name: impl Into<String>,
                             callback: impl Callback + 'static) {
        self.callbacks.insert(name.into(), Box::new(callback));
    }
}

impl Environment for Scope {
    fn variable(&self, name: &str) -> Option<&serde_json::Value> {
        self.variables.get(name)
    }

    fn callback(&self, name: &str) -> Option<&dyn Callback> {
        self.callbacks.get(name).map(|callback| &**callback)
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut callbacks: Vec<&String> = self.callbacks.keys().collect();
        callbacks.sort();
        f.debug_struct("Scope")
         .field("variables", &self.variables)
         .field("callbacks", &callbacks)
         .finish()
    }
}
