use crate::util::num::{format_number, parse_numeric};

/// Represents a runtime value in the evaluator.
///
/// Operands, intermediate queue entries and final results are all `Value`s.
/// Conversions between variants only happen through [`Value::to_number`],
/// [`Value::to_bool`] and [`Value::to_text`], which operators call on their
/// operands as needed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value. Produced by unresolved variables and callbacks.
    #[default]
    Null,
    /// A boolean value, produced by comparison and logical operators.
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A piece of text.
    String(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&serde_json::Value> for Value {
    /// Adapts a host value to the nearest variant.
    ///
    /// Booleans, numbers and strings keep their meaning; `null`, arrays and
    /// objects become [`Value::Null`].
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => Self::Null,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::String(s) => Self::String(s),
            other => Self::from(&other),
        }
    }
}

impl Value {
    /// Builds the value of a literal operand token.
    ///
    /// Numeric-looking text becomes a [`Value::Number`]; anything else is kept
    /// verbatim as a [`Value::String`].
    ///
    /// # Example
    /// ```
    /// use qualex::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_literal("5"), Value::Number(5.0));
    /// assert_eq!(Value::from_literal("production"), Value::from("production"));
    /// ```
    #[must_use]
    pub fn from_literal(text: &str) -> Self {
        parse_numeric(text).map_or_else(|| Self::String(text.to_string()), Self::Number)
    }

    /// Converts the value to a number using loose rules.
    ///
    /// `true` is 1, `false` and `Null` are 0, numeric-looking text is parsed
    /// and any other text is 0.
    ///
    /// # Example
    /// ```
    /// use qualex::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("2.5").to_number(), 2.5);
    /// assert_eq!(Value::from("abc").to_number(), 0.0);
    /// assert_eq!(Value::Bool(true).to_number(), 1.0);
    /// ```
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Null | Self::Bool(false) => 0.0,
            Self::Bool(true) => 1.0,
            Self::Number(n) => *n,
            Self::String(s) => parse_numeric(s).unwrap_or(0.0),
        }
    }

    /// Converts the value to a boolean.
    ///
    /// `Null`, zero, the empty string, `"0"` and `"false"` (any case) are
    /// false; everything else is true.
    #[must_use]
    pub fn to_bool(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::String(s) => !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false")),
        }
    }

    /// Converts the value to text.
    ///
    /// `Null` is the empty string, booleans are `true`/`false` and integral
    /// numbers print without a fractional part.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::String(s) => s.clone(),
        }
    }

    /// Returns the number this value represents, if it is a number or
    /// numeric-looking text.
    #[must_use]
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::String(s) => parse_numeric(s),
            Self::Null | Self::Bool(_) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}
