//! The [`Value`] DOM type: a JSON value tree with owned storage.

use crate::map::Map;
use std::fmt::{self, Display};
use std::mem;

/// The seven JSON value kinds, with `true` and `false` distinguished at the
/// type-tag level rather than folded into a single "boolean" kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Type {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

/// A JSON value.
///
/// `Value` owns everything beneath it: dropping a `Value` recursively drops
/// every nested string, array element and object member. Cloning performs a
/// deep copy with disjoint storage.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Value::Null
    }
}

impl Value {
    /// Creates an empty array, allocating nothing.
    #[inline]
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Creates an empty array with `capacity` slots preallocated.
    #[inline]
    pub fn array_with_capacity(capacity: usize) -> Self {
        Value::Array(Vec::with_capacity(capacity))
    }

    /// Creates an empty object, allocating nothing.
    #[inline]
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    /// Creates an empty object with `capacity` members preallocated.
    #[inline]
    pub fn object_with_capacity(capacity: usize) -> Self {
        Value::Object(Map::with_capacity(capacity))
    }

    /// The value's type tag, distinguishing `true` from `false`.
    pub fn value_type(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::Bool(false) => Type::False,
            Value::Bool(true) => Type::True,
            Value::Number(_) => Type::Number,
            Value::String(_) => Type::String,
            Value::Array(_) => Type::Array,
            Value::Object(_) => Type::Object,
        }
    }

    /// Resets `self` to `Null` in place, dropping whatever payload was
    /// there.
    #[inline]
    pub fn clear(&mut self) {
        *self = Value::Null;
    }

    /// Replaces `self` with `Null` and returns the previous value.
    #[inline]
    pub fn take(&mut self) -> Value {
        mem::replace(self, Value::Null)
    }

    /// Swaps the full representations of `self` and `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Value) {
        mem::swap(self, other);
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Overwrites `self` with a boolean, dropping any previous payload.
    #[inline]
    pub fn set_bool(&mut self, b: bool) {
        *self = Value::Bool(b);
    }

    /// Overwrites `self` with a number, dropping any previous payload.
    #[inline]
    pub fn set_f64(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Overwrites `self` with a string, dropping any previous payload.
    #[inline]
    pub fn set_str(&mut self, s: impl Into<String>) {
        *self = Value::String(s.into());
    }

    // --- array operations -------------------------------------------------

    /// Number of elements, or `None` if `self` is not an array.
    pub fn array_len(&self) -> Option<usize> {
        self.as_array().map(<[Value]>::len)
    }

    /// Allocated element capacity, or `None` if `self` is not an array.
    pub fn array_capacity(&self) -> Option<usize> {
        match self {
            Value::Array(a) => Some(a.capacity()),
            _ => None,
        }
    }

    /// Reserves capacity for at least `additional` more elements. Panics if
    /// `self` is not an array.
    pub fn reserve_array(&mut self, additional: usize) {
        self.as_array_mut()
            .expect("reserve_array called on a non-array Value")
            .reserve(additional);
    }

    /// Shrinks array storage to fit its length, best-effort. Panics if
    /// `self` is not an array.
    pub fn shrink_array(&mut self) {
        self.as_array_mut()
            .expect("shrink_array called on a non-array Value")
            .shrink_to_fit();
    }

    /// Drops every element, releasing their storage. Capacity is unchanged.
    /// Panics if `self` is not an array.
    pub fn clear_array(&mut self) {
        self.as_array_mut()
            .expect("clear_array called on a non-array Value")
            .clear();
    }

    /// The element at `index`, or `None` if out of bounds or `self` is not
    /// an array.
    pub fn get_array_element(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|a| a.get(index))
    }

    /// A mutable reference to the element at `index`.
    pub fn get_array_element_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.as_array_mut().and_then(|a| a.get_mut(index))
    }

    /// Appends a fresh `Null` slot and returns a mutable reference to it.
    /// Grows by doubling (via [`Vec::push`]'s own amortized-doubling
    /// growth). Panics if `self` is not an array.
    pub fn push_array_element(&mut self) -> &mut Value {
        let array = self
            .as_array_mut()
            .expect("push_array_element called on a non-array Value");
        array.push(Value::Null);
        array.last_mut().unwrap()
    }

    /// Removes and returns the last element. Panics if `self` is not an
    /// array.
    pub fn pop_array_element(&mut self) -> Option<Value> {
        self.as_array_mut()
            .expect("pop_array_element called on a non-array Value")
            .pop()
    }

    /// Inserts a fresh `Null` slot at `index`, shifting later elements
    /// right, and returns a mutable reference to it. Panics if `self` is
    /// not an array or `index > len`.
    pub fn insert_array_element(&mut self, index: usize) -> &mut Value {
        let array = self
            .as_array_mut()
            .expect("insert_array_element called on a non-array Value");
        array.insert(index, Value::Null);
        &mut array[index]
    }

    /// Drops and removes `count` elements starting at `index`, shifting
    /// later elements left. Panics if `self` is not an array or the range is
    /// out of bounds.
    pub fn erase_array_elements(&mut self, index: usize, count: usize) {
        let array = self
            .as_array_mut()
            .expect("erase_array_elements called on a non-array Value");
        array.drain(index..index + count);
    }

    // --- object operations -------------------------------------------------

    /// Number of members, or `None` if `self` is not an object.
    pub fn object_len(&self) -> Option<usize> {
        self.as_object().map(Map::len)
    }

    /// Allocated member capacity, or `None` if `self` is not an object.
    pub fn object_capacity(&self) -> Option<usize> {
        self.as_object().map(Map::capacity)
    }

    /// Reserves capacity for at least `additional` more members. Panics if
    /// `self` is not an object.
    pub fn reserve_object(&mut self, additional: usize) {
        self.as_object_mut()
            .expect("reserve_object called on a non-object Value")
            .reserve(additional);
    }

    /// Shrinks object storage to fit its length, best-effort. Panics if
    /// `self` is not an object.
    pub fn shrink_object(&mut self) {
        self.as_object_mut()
            .expect("shrink_object called on a non-object Value")
            .shrink_to_fit();
    }

    /// Drops every member, releasing their storage. Capacity is unchanged.
    /// Panics if `self` is not an object.
    pub fn clear_object(&mut self) {
        self.as_object_mut()
            .expect("clear_object called on a non-object Value")
            .clear();
    }

    /// The `(key, value)` pair at position `index`.
    pub fn get_object_member(&self, index: usize) -> Option<(&str, &Value)> {
        self.as_object()
            .and_then(|o| o.get_index(index))
            .map(|m| (m.key(), m.value()))
    }

    /// The index of the first member whose key equals `key`.
    pub fn find_object_index(&self, key: &str) -> Option<usize> {
        self.as_object().and_then(|o| o.find_index(key))
    }

    /// The value of the first member whose key equals `key`.
    pub fn find_object_value(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.find_value(key))
    }

    /// Returns a handle to the value for `key`, inserting `(key, Null)` if
    /// absent. Idempotent: a second call with the same key returns the same
    /// slot without growing `object_len()`. Panics if `self` is not an
    /// object.
    pub fn set_object_value(&mut self, key: &str) -> &mut Value {
        self.as_object_mut()
            .expect("set_object_value called on a non-object Value")
            .entry_or_null(key)
    }

    /// Removes the member at `index`. Panics if `self` is not an object.
    pub fn remove_object_member(&mut self, index: usize) {
        self.as_object_mut()
            .expect("remove_object_member called on a non-object Value")
            .remove_index(index);
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        crate::stringify::write_pretty(self, f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Object(m)
    }
}
