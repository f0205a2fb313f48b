use chrono::NaiveDateTime;

/// A value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL `NULL`
    Null,

    Bool(bool),

    /// Any signed integer, widened to 64 bits
    I64(i64),

    /// Any unsigned integer, widened to 64 bits
    U64(u64),

    F64(f64),

    String(String),

    Bytes(Vec<u8>),

    /// A wall-clock timestamp without time zone
    Timestamp(NaiveDateTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

macro_rules! impl_from {
    ($variant:ident: $( $ty:ty ),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }
        )+
    };
}

impl_from!(Bool: bool);
impl_from!(I64: i8, i16, i32, i64);
impl_from!(U64: u8, u16, u32, u64);
impl_from!(F64: f32, f64);
impl_from!(String: String, &str, &String);
impl_from!(Bytes: Vec<u8>, &[u8]);
impl_from!(Timestamp: NaiveDateTime);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
