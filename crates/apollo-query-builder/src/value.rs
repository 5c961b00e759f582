use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::{string_value::StringLiteral, RenderError, Result};

/// The Value type represents a literal you could give as an argument, a
/// directive argument or a variable default.
///
/// *Value*:
///     Variable | IntValue | FloatValue | StringValue | BooleanValue | NullValue | EnumValue | ListValue | ObjectValue
///
/// Every [`InputValue`](crate::InputValue) converts into this enum before it is
/// rendered. Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#Value).
///
/// ### Example
/// ```rust
/// use apollo_query_builder::Value;
///
/// let value = Value::List(vec![Value::from(1), Value::from("derp")]);
///
/// assert_eq!(value.render().unwrap(), r#"[1, "derp"]"#);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    /// Name of a variable example: `$varName`
    Variable(String),
    /// Int value example: `7`
    ///
    /// Wide enough to hold every Rust integer type without wrapping.
    Int(i128),
    /// Float value example: `25.4`
    Float(f64),
    /// String value example: `"My string"`
    String(String),
    /// Boolean value example: `false`
    Boolean(bool),
    /// Null value example: `null`
    Null,
    /// Enum value example: `VARIANT_EXAMPLE`
    Enum(String),
    /// List value example: `[1, 2, 3]`
    List(Vec<Value>),
    /// Object value example: `{first: 1, second: 2}`
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Render the value as a GraphQL literal.
    pub fn render(&self) -> Result<String> {
        let mut text = String::new();
        self.write_to(&mut text)?;
        Ok(text)
    }

    /// Returns `true` if no variable appears anywhere in this value.
    pub fn is_const(&self) -> bool {
        match self {
            Self::Variable(_) => false,
            Self::List(list) => list.iter().all(Value::is_const),
            Self::Object(obj) => obj.values().all(Value::is_const),
            _ => true,
        }
    }

    fn write_to(&self, text: &mut String) -> Result<()> {
        match self {
            Self::Variable(v) => {
                let _ = write!(text, "${v}");
            }
            Self::Int(i) => {
                let _ = write!(text, "{i}");
            }
            Self::Float(fl) => {
                if !fl.is_finite() {
                    return Err(RenderError::NonFiniteFloat(*fl));
                }
                // Debug keeps the fraction, `1.0` stays a float literal.
                let _ = write!(text, "{fl:?}");
            }
            Self::String(s) => {
                let _ = write!(text, "{}", StringLiteral(s));
            }
            Self::Boolean(b) => {
                let _ = write!(text, "{b}");
            }
            Self::Null => text.push_str("null"),
            Self::Enum(val) => text.push_str(val),
            Self::List(list) => {
                text.push('[');
                for (i, elt) in list.iter().enumerate() {
                    if i > 0 {
                        text.push_str(", ");
                    }
                    elt.write_to(text)?;
                }
                text.push(']');
            }
            Self::Object(obj) => {
                text.push('{');
                for (i, (k, v)) in obj.iter().enumerate() {
                    if i > 0 {
                        text.push_str(", ");
                    }
                    let _ = write!(text, "{k}: ");
                    v.write_to(text)?;
                }
                text.push('}');
            }
        }

        Ok(())
    }
}

macro_rules! to_number_value {
    ($ty: path, $inner_type: path, $value_variant: ident) => {
        impl From<$ty> for Value {
            fn from(val: $ty) -> Self {
                Self::$value_variant(val as $inner_type)
            }
        }
    };
    ($({$ty: path, $inner_type: path, $value_variant: ident}),+) => {
        $(
            to_number_value!($ty, $inner_type, $value_variant);
        )+
    };
}

// Numbers
to_number_value!(
    {i64, i128, Int},
    {i32, i128, Int},
    {i16, i128, Int},
    {i8, i128, Int},
    {isize, i128, Int},
    {u64, i128, Int},
    {u32, i128, Int},
    {u16, i128, Int},
    {u8, i128, Int},
    {usize, i128, Int},
    {f64, f64, Float}
);

impl From<f32> for Value {
    fn from(val: f32) -> Self {
        // Widening with `as` prints the f32 rounding error, `0.1` would come
        // out as `0.10000000149011612`.
        Self::Float(val.to_string().parse().unwrap_or_else(|_| f64::from(val)))
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Self::String(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Self::String(val.to_string())
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Boolean(val)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(val: Option<T>) -> Self {
        val.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(val: Vec<T>) -> Self {
        Self::List(val.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(val: IndexMap<String, Value>) -> Self {
        Self::Object(val)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(val: serde_json::Value) -> Self {
        match val {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Self::Int(i.into()),
                (None, Some(u)) => Self::Int(u.into()),
                (None, None) => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(list) => Self::List(list.into_iter().map(Into::into).collect()),
            serde_json::Value::Object(obj) => {
                Self::Object(obj.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
