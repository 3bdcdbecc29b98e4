//! Shared key/value store scoped to one tree.
//!
//! The blackboard is the only data channel between sibling, ancestor, and
//! descendant nodes. Values are a closed tagged union rather than open
//! dynamic typing, so a mismatched read is an explicit `None` instead of a
//! silent coercion. [`Blackboard::get_or_default`] keeps the lenient
//! "type default on miss or mismatch" contract for callers that want it.

use std::collections::HashMap;

/// A single dynamically-kinded blackboard value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f32),
    Text(String),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

/// Typed extraction from a stored [`Value`].
///
/// Returns `None` when the stored kind does not match the requested type;
/// there is no cross-kind coercion.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// String-keyed store shared by every node of one tree.
///
/// Created once per tree and owned by it; independent trees never share a
/// blackboard. Overwriting a key replaces the prior value regardless of kind.
#[derive(Debug, Default)]
pub struct Blackboard {
    slots: HashMap<String, Value>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any prior value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.slots.insert(key.into(), value.into());
    }

    /// Reads the value under `key` as `T`.
    ///
    /// Returns `None` when the key is absent or the stored kind does not
    /// match `T`. Never fails any harder than that.
    pub fn get<T: FromValue>(&self, key: &str) -> Option<T> {
        self.slots.get(key).and_then(T::from_value)
    }

    /// Reads the value under `key` as `T`, falling back to `T::default()`
    /// on a miss or kind mismatch.
    pub fn get_or_default<T: FromValue + Default>(&self, key: &str) -> T {
        self.get(key).unwrap_or_default()
    }

    /// Returns the raw stored value under `key`, if any.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.slots.get(key)
    }

    /// Returns `true` if `key` holds a value of any kind.
    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_read_is_none() {
        let mut bb = Blackboard::new();
        bb.set("k", 5i64);

        assert_eq!(bb.get::<i64>("k"), Some(5));
        assert_eq!(bb.get::<String>("k"), None);
        assert_eq!(bb.get::<bool>("k"), None);
    }

    #[test]
    fn mismatched_read_defaults_instead_of_failing() {
        let mut bb = Blackboard::new();
        bb.set("k", 5i64);

        assert_eq!(bb.get_or_default::<String>("k"), String::new());
        assert!(!bb.get_or_default::<bool>("k"));
    }

    #[test]
    fn missing_key_defaults() {
        let bb = Blackboard::new();

        assert_eq!(bb.get::<i64>("absent"), None);
        assert_eq!(bb.get_or_default::<i64>("absent"), 0);
    }

    #[test]
    fn overwrite_replaces_prior_kind() {
        let mut bb = Blackboard::new();
        bb.set("k", 5i64);
        bb.set("k", "five");

        assert_eq!(bb.get::<i64>("k"), None);
        assert_eq!(bb.get::<String>("k"), Some("five".to_owned()));
    }

    #[test]
    fn float_and_bool_round_trip() {
        let mut bb = Blackboard::new();
        bb.set("speed", 2.5f32);
        bb.set("alerted", true);

        assert_eq!(bb.get::<f32>("speed"), Some(2.5));
        assert_eq!(bb.get::<bool>("alerted"), Some(true));
        assert!(bb.contains("speed"));
        assert!(!bb.contains("missing"));
    }
}
