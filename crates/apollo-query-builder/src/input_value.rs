use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::{InputType, RenderError, Result, Value};

/// A Rust value that can be used as an argument, a directive argument or a
/// variable default.
///
/// The literal form ([`InputValue::render`]) and the type annotation
/// ([`InputValue::input_type`]) are independent: a bare map renders fine as an
/// object literal, but has no GraphQL type it could be declared as.
///
/// ### Example
/// ```rust
/// use apollo_query_builder::{InputType, InputValue, Value};
///
/// #[derive(Debug)]
/// enum Episode {
///     NewHope,
/// }
///
/// impl InputValue for Episode {
///     fn input_type() -> apollo_query_builder::Result<InputType> {
///         Ok(InputType::enum_type("Episode"))
///     }
///
///     fn to_value(&self) -> Value {
///         match self {
///             Episode::NewHope => Value::Enum("NEWHOPE".to_string()),
///         }
///     }
/// }
///
/// assert_eq!(Episode::input_type().unwrap().to_string(), "Episode");
/// assert_eq!(Episode::NewHope.render().unwrap(), "NEWHOPE");
/// ```
pub trait InputValue {
    /// The GraphQL type of this kind of value.
    fn input_type() -> Result<InputType>
    where
        Self: Sized;

    /// Convert into the literal representation.
    fn to_value(&self) -> Value;

    /// Render as a GraphQL literal.
    fn render(&self) -> Result<String> {
        self.to_value().render()
    }
}

/// A user-defined GraphQL input object.
///
/// Every implementor is an [`InputValue`] whose type is `TYPE_NAME` and whose
/// literal is `{field1: v1, field2: v2}` in the order returned by `fields`.
///
/// ### Example
/// ```rust
/// use apollo_query_builder::{InputObjectValue, InputValue, Value};
/// use indexmap::IndexMap;
///
/// struct UserInput {
///     id: i32,
/// }
///
/// impl InputObjectValue for UserInput {
///     const TYPE_NAME: &'static str = "UserInput";
///
///     fn fields(&self) -> IndexMap<String, Value> {
///         IndexMap::from([("id".to_string(), Value::from(self.id))])
///     }
/// }
///
/// assert_eq!(UserInput::input_type().unwrap().to_string(), "UserInput");
/// assert_eq!(UserInput { id: 1234 }.render().unwrap(), "{id: 1234}");
/// ```
pub trait InputObjectValue {
    /// Name of the input object type in the schema.
    const TYPE_NAME: &'static str;

    /// The object's fields, in rendering order.
    fn fields(&self) -> IndexMap<String, Value>;
}

impl<T: InputObjectValue> InputValue for T {
    fn input_type() -> Result<InputType> {
        Ok(InputType::object(T::TYPE_NAME))
    }

    fn to_value(&self) -> Value {
        Value::Object(self.fields())
    }
}

/// Non-null wrapper: renders exactly like `T`, declares `T!` as its type.
///
/// ### Example
/// ```rust
/// use apollo_query_builder::{InputValue, NonNullValue};
///
/// let value = NonNullValue::new("val");
///
/// assert_eq!(value.render().unwrap(), r#""val""#);
/// assert_eq!(NonNullValue::<&str>::input_type().unwrap().to_string(), "String!");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NonNullValue<T>(pub T);

impl<T> NonNullValue<T> {
    /// Create a new instance of NonNullValue.
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Unwrap the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: InputValue> InputValue for NonNullValue<T> {
    fn input_type() -> Result<InputType> {
        Ok(InputType::non_null(T::input_type()?))
    }

    fn to_value(&self) -> Value {
        self.0.to_value()
    }
}

macro_rules! scalar_input_value {
    ($graphql_name: literal: $($ty: ty),+) => {
        $(
            impl InputValue for $ty {
                fn input_type() -> Result<InputType> {
                    Ok(InputType::scalar($graphql_name))
                }

                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )+
    };
}

scalar_input_value!("Int": i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
scalar_input_value!("Float": f32, f64);
scalar_input_value!("Boolean": bool);
scalar_input_value!("String": &str);

impl InputValue for String {
    fn input_type() -> Result<InputType> {
        Ok(InputType::scalar("String"))
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: InputValue> InputValue for Vec<T> {
    fn input_type() -> Result<InputType> {
        Ok(InputType::list(T::input_type()?))
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(InputValue::to_value).collect())
    }
}

// GraphQL types are nullable by default, `None` is `null`.
impl<T: InputValue> InputValue for Option<T> {
    fn input_type() -> Result<InputType> {
        T::input_type()
    }

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, InputValue::to_value)
    }
}

impl<K: AsRef<str>, V: InputValue> InputValue for IndexMap<K, V> {
    fn input_type() -> Result<InputType> {
        Err(RenderError::UnrepresentableType(
            "a bare map without an input object type".to_string(),
        ))
    }

    fn to_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.to_value()))
                .collect(),
        )
    }
}

impl<K: AsRef<str>, V: InputValue> InputValue for BTreeMap<K, V> {
    fn input_type() -> Result<InputType> {
        Err(RenderError::UnrepresentableType(
            "a bare map without an input object type".to_string(),
        ))
    }

    fn to_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.to_value()))
                .collect(),
        )
    }
}

impl InputValue for Value {
    fn input_type() -> Result<InputType> {
        Err(RenderError::UnrepresentableType(
            "a dynamically typed value".to_string(),
        ))
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}

#[cfg(feature = "json")]
impl InputValue for serde_json::Value {
    fn input_type() -> Result<InputType> {
        Err(RenderError::UnrepresentableType("a JSON value".to_string()))
    }

    fn to_value(&self) -> Value {
        Value::from(self.clone())
    }
}
