//! Ordered key/value fields attached to a record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key reserved for a record's format template
pub const FORMAT_KEY: &str = "Format";

/// Value type carried by a [`Field`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Uint(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

impl FieldValue {
    /// Capture any displayable value as a string field.
    pub fn display(value: impl fmt::Display) -> Self {
        FieldValue::String(value.to_string())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Uint(u) => serde_json::Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<char> for FieldValue {
    fn from(c: char) -> Self {
        FieldValue::String(c.to_string())
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty => $($t:ty),+) => {
        $(
            impl From<$t> for FieldValue {
                fn from(v: $t) -> Self {
                    FieldValue::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64 => i8, i16, i32, i64, isize);
impl_from_int!(Uint, u64 => u8, u16, u32, u64, usize);

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}

/// One ordered datum of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub order: usize,
    pub key: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new(order: usize, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            order,
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether this field carries the record's format template
    #[inline]
    pub fn is_format(&self) -> bool {
        self.key == FORMAT_KEY
    }
}

/// Positional fields keyed `Field<n>`, numbered from `start`.
pub fn build_fields<I, V>(start: usize, values: I) -> Vec<Field>
where
    I: IntoIterator<Item = V>,
    V: Into<FieldValue>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            let idx = start + i;
            Field::new(idx, format!("Field{}", idx), v)
        })
        .collect()
}

/// A `Format` field at order 1 followed by the arguments, also from order 1.
///
/// The template and the first argument share an order; stable sorting keeps
/// the template first.
pub fn build_format_fields<I, V>(template: &str, values: I) -> Vec<Field>
where
    I: IntoIterator<Item = V>,
    V: Into<FieldValue>,
{
    let mut fields = vec![Field::new(1, FORMAT_KEY, template)];
    fields.extend(build_fields(1, values));
    fields
}

/// Fields by ascending order; equal orders keep their emission order.
pub fn sorted(fields: &[Field]) -> Vec<&Field> {
    let mut out: Vec<&Field> = fields.iter().collect();
    out.sort_by_key(|f| f.order);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_fields_numbering() {
        let fields = build_fields(0, ["a", "b", "c"]);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], Field::new(0, "Field0", "a"));
        assert_eq!(fields[2].key, "Field2");
        assert_eq!(fields[2].order, 2);

        let fields = build_fields(4, [1, 2]);
        assert_eq!(fields[0].key, "Field4");
        assert_eq!(fields[1].order, 5);
    }

    #[test]
    fn test_build_format_fields() {
        let fields = build_format_fields("%s=%d", [FieldValue::from("n"), FieldValue::from(3)]);
        assert_eq!(fields.len(), 3);
        assert!(fields[0].is_format());
        assert_eq!(fields[0].order, 1);
        assert_eq!(fields[1], Field::new(1, "Field1", "n"));
        assert_eq!(fields[2], Field::new(2, "Field2", 3));
    }

    #[test]
    fn test_sorted_is_stable() {
        let fields = vec![
            Field::new(2, "c", "third"),
            Field::new(1, FORMAT_KEY, "%s%s"),
            Field::new(1, "a", "first"),
            Field::new(0, "z", "zeroth"),
        ];
        let keys: Vec<&str> = sorted(&fields).iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["z", FORMAT_KEY, "a", "c"]);
        // sorting borrows; the original order is untouched
        assert_eq!(fields[0].key, "c");
    }

    #[test]
    fn test_field_value_conversions() {
        assert_eq!(FieldValue::from(7u8), FieldValue::Uint(7));
        assert_eq!(FieldValue::from(-7i32), FieldValue::Int(-7));
        assert_eq!(FieldValue::from(None::<i32>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some("x")), FieldValue::String("x".into()));
        assert_eq!(FieldValue::display(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_field_value_json() {
        assert_eq!(FieldValue::from(3).to_json_value(), serde_json::json!(3));
        assert_eq!(FieldValue::Float(f64::NAN).to_json_value(), serde_json::Value::Null);
        assert_eq!(FieldValue::from(true).to_json_value(), serde_json::json!(true));
    }
}
