//! Named parameters attached to a force.
//!
//! Values are looked up by string key at the time a force is applied, so a
//! parameter can be changed between evaluations without reloading the force.

use std::collections::HashMap;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    Double(f64),
    Int(i64),
}

impl ParamValue {
    fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Double(_) => "double",
            ParamValue::Int(_) => "int",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Params {
    data: HashMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_f64(&mut self, name: &str, value: f64) {
        self.data.insert(name.to_owned(), ParamValue::Double(value));
    }

    pub fn set_i64(&mut self, name: &str, value: i64) {
        self.data.insert(name.to_owned(), ParamValue::Int(value));
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.data.get(name)
    }

    /// Returns the double stored under `name`.
    ///
    /// Fails if the key is absent or holds a value of another type; a
    /// default is never substituted.
    pub fn get_f64(&self, name: &str) -> Result<f64> {
        match self.lookup(name)? {
            ParamValue::Double(v) => Ok(*v),
            _ => Err(Error::ParameterType {
                name: name.to_owned(),
                expected: "double",
            }),
        }
    }

    pub fn get_i64(&self, name: &str) -> Result<i64> {
        match self.lookup(name)? {
            ParamValue::Int(v) => Ok(*v),
            _ => Err(Error::ParameterType {
                name: name.to_owned(),
                expected: "int",
            }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.data.remove(name)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn lookup(&self, name: &str) -> Result<&ParamValue> {
        self.data.get(name).ok_or_else(|| Error::MissingParameter {
            name: name.to_owned(),
        })
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Double(v) => write!(f, "{v} ({})", self.type_name()),
            ParamValue::Int(v) => write!(f, "{v} ({})", self.type_name()),
        }
    }
}
