use std::rc::Rc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::pattern::{Pattern, PatternError};

/// String-keyed mapping with preserved insertion order.
pub type Record = IndexMap<String, Value>;

/// A value flowing through component props.
///
/// Every value carries exactly one variant tag. `Null` and `Undefined` are
/// distinct absence markers that compare equal to each other. Composite
/// variants share their payload behind an [`Rc`], so cloning a `Value` never
/// copies the tree and pointer identity is preserved across clones.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Undefined,
    Bool(bool),
    Number(f64),
    Str(String),
    Date(DateTime<Utc>),
    Pattern(Rc<Pattern>),
    List(Rc<Vec<Value>>),
    Record(Rc<Record>),
}

impl Value {
    /// Builds a list value from any iterable of values.
    pub fn list<I>(items: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        Value::List(Rc::new(items.into_iter().collect()))
    }

    /// Wraps a record map into a value.
    pub fn record(record: Record) -> Value {
        Value::Record(Rc::new(record))
    }

    /// Builds a date value from an epoch-millisecond offset.
    ///
    /// Returns `None` when the offset is outside the representable range.
    pub fn date_ms(ms: i64) -> Option<Value> {
        DateTime::from_timestamp_millis(ms).map(Value::Date)
    }

    /// Compiles `source` into a pattern value.
    pub fn pattern(source: &str) -> Result<Value, PatternError> {
        Ok(Value::Pattern(Rc::new(Pattern::new(source)?)))
    }

    /// True for either absence marker.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            Value::Pattern(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Variant name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Undefined => "undefined",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Date(_) => "date",
            Value::Pattern(_) => "pattern",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Value {
        Value::Date(d)
    }
}

impl From<Pattern> for Value {
    fn from(p: Pattern) -> Value {
        Value::Pattern(Rc::new(p))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::List(Rc::new(items))
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Value {
        Value::Record(Rc::new(record))
    }
}
