use std::fmt;

/// A typed literal from a constraint argument.
///
/// The lexer keeps integers and floats apart, and so does this type: `1` is
/// an [`Value::Integer`] while `1.0` and `1e0` are [`Value::Float`].
///
/// # Examples
///
/// ```
/// use rsql_filter::Value;
///
/// let name = Value::String("John".to_string());
/// let age = Value::Integer(42);
/// let ratio = Value::Float(0.5);
/// let flag = Value::Boolean(true);
/// let missing = Value::Null;
///
/// assert_eq!(name.type_name(), "string");
/// assert!(age.is_orderable());
/// assert!(!flag.is_orderable());
/// assert!(!missing.is_orderable());
/// # let _ = ratio;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Identifier or bare string
    String(String),

    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit float
    Float(f64),

    /// `true` / `false`
    Boolean(bool),

    /// `null`
    Null,
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::Null => "null",
        }
    }

    /// Booleans and null have no ordering and cannot appear in membership lists.
    pub fn is_orderable(&self) -> bool {
        !matches!(self, Value::Boolean(_) | Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Debug rendering: strings are quoted, floats keep their decimal point.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s:?}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n:?}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}
