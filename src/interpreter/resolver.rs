use tracing::trace;

use crate::interpreter::{environment::Environment, value::core::Value};

/// Prefix marking a variable reference such as `$env.mode`.
pub const VARIABLE_SIGIL: char = '$';
/// Prefix marking a callback reference such as `@isEnabled`.
pub const CALLBACK_SIGIL: char = '@';

/// Converts one operand token into a value.
///
/// - `$path` looks up a variable and walks the remaining dotted segments.
/// - `@name` invokes a registered zero-argument callback.
/// - Anything else is a literal (see [`Value::from_literal`]).
///
/// Unresolvable variables, path segments and callbacks yield [`Value::Null`]
/// rather than an error.
///
/// # Example
/// ```
/// use qualex::interpreter::{environment::Scope, resolver::resolve_operand, value::core::Value};
/// use serde_json::json;
///
/// let scope = Scope::new().with_variable("env", json!({ "mode": "dev" }))
///                         .with_callback("isEnabled", || true);
///
/// assert_eq!(resolve_operand("$env.mode", &scope), Value::from("dev"));
/// assert_eq!(resolve_operand("@isEnabled", &scope), Value::Bool(true));
/// assert_eq!(resolve_operand("$env.missing", &scope), Value::Null);
/// assert_eq!(resolve_operand("production", &scope), Value::from("production"));
/// ```
#[must_use]
pub fn resolve_operand(token: &str, env: &dyn Environment) -> Value {
    if let Some(path) = token.strip_prefix(VARIABLE_SIGIL) {
        resolve_variable(path, env)
    } else if let Some(name) = token.strip_prefix(CALLBACK_SIGIL) {
        resolve_callback(name, env)
    } else {
        Value::from_literal(token)
    }
}

/// Returns `true` if `token` is a literal rather than a `$` or `@`
/// reference.
#[must_use]
pub fn is_literal(token: &str) -> bool {
    !token.starts_with(VARIABLE_SIGIL) && !token.starts_with(CALLBACK_SIGIL)
}

/// Resolves a dotted variable path.
///
/// The first segment names the root variable. Each following segment selects
/// an object field by key or an array element by decimal index.
fn resolve_variable(path: &str, env: &dyn Environment) -> Value {
    let mut segments = path.split('.');
    let root = segments.next().unwrap_or_default();

    let Some(mut current) = env.variable(root) else {
        trace!(variable = root, "unbound variable resolves to null");
        return Value::Null;
    };

    for segment in segments {
        let next = match current {
            serde_json::Value::Object(fields) => fields.get(segment),
            serde_json::Value::Array(items) => {
                segment.parse::<usize>().ok().and_then(|index| items.get(index))
            },
            _ => None,
        };

        match next {
            Some(value) => current = value,
            None => {
                trace!(path, segment, "missing path segment resolves to null");
                return Value::Null;
            },
        }
    }

    Value::from(current)
}

/// Invokes the callback `name`, or yields `Null` if none is registered.
fn resolve_callback(name: &str, env: &dyn Environment) -> Value {
    env.callback(name).map_or_else(|| {
                                        trace!(callback = name,
                                               "unregistered callback resolves to null");
                                        Value::Null
                                    },
                                    |callback| Value::from(callback.invoke()))
}
