//! JSON value representation.

use std::collections::HashMap;
use std::fmt;

/// A JSON value.
///
/// Every node owns its children outright; a parse produces a tree rooted at
/// one top-level value with no sharing and no cycles.
#[derive(Clone, PartialEq)]
pub enum Json {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit floating-point number. The lexer makes no integer/float
    /// distinction; every JSON number coerces to this representation.
    Number(f64),
    /// UTF-8 string with escape sequences already resolved.
    String(String),
    /// Ordered sequence of values.
    Array(Vec<Json>),
    /// Mapping from unique string keys to values.
    Object(HashMap<String, Json>),
}

impl Json {
    /// Returns `true` if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Json::Null)
    }

    /// Returns the boolean value if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Json::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric value if this is a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Json::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Json::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an `Array`.
    pub fn as_array(&self) -> Option<&Vec<Json>> {
        match self {
            Json::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an `Object`.
    pub fn as_object(&self) -> Option<&HashMap<String, Json>> {
        match self {
            Json::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

impl fmt::Debug for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Json::Null => write!(f, "null"),
            Json::Bool(b) => write!(f, "{}", b),
            Json::Number(n) => write!(f, "{}", n),
            Json::String(s) => write!(f, "{:?}", s),
            Json::Array(values) => f.debug_list().entries(values).finish(),
            Json::Object(fields) => f.debug_map().entries(fields).finish(),
        }
    }
}

impl From<bool> for Json {
    fn from(b: bool) -> Self {
        Json::Bool(b)
    }
}

impl From<f64> for Json {
    fn from(n: f64) -> Self {
        Json::Number(n)
    }
}

impl From<String> for Json {
    fn from(s: String) -> Self {
        Json::String(s)
    }
}

impl From<&str> for Json {
    fn from(s: &str) -> Self {
        Json::String(s.to_string())
    }
}

impl From<Vec<Json>> for Json {
    fn from(values: Vec<Json>) -> Self {
        Json::Array(values)
    }
}

impl From<HashMap<String, Json>> for Json {
    fn from(fields: HashMap<String, Json>) -> Self {
        Json::Object(fields)
    }
}
