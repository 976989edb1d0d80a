//! Bindable parameter values.

use crate::error::QueryResult;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A positional parameter value, bound to one `?` placeholder.
///
/// Values are owned so statements can be cloned, rendered repeatedly, and kept
/// in a batch after the builder call that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
    Json(serde_json::Value),
}

impl Value {
    /// Serialize any value into a JSON parameter.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> QueryResult<Self> {
        Ok(Value::Json(serde_json::to_value(value)?))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

macro_rules! impl_from {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )+
    };
}

impl_from!(Bool: bool);
impl_from!(Int: i8, i16, i32, i64);
impl_from!(UInt: u8, u16, u32, u64);
impl_from!(Float: f32, f64);
impl_from!(Text: String, &str, &String);
impl_from!(Bytes: Vec<u8>, &[u8]);
impl_from!(Date: NaiveDate);
impl_from!(DateTime: NaiveDateTime);
impl_from!(Timestamp: DateTime<Utc>);
impl_from!(Uuid: Uuid);
impl_from!(Json: serde_json::Value);

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

/// Build a `Vec<Value>` from heterogeneous expressions.
///
/// ```
/// use sqlchain::{args, Value};
///
/// let params = args![10, "lol", true];
/// assert_eq!(params[1], Value::Text("lol".into()));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($v:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($v)),+]
    };
}
