use std::fmt::{self, Display};

/// GraphQL type annotation of an input value.
/// Can be a named `Scalar`, `Object` or `Enum`, a `List` or a `NonNull`.
///
/// This enum is responsible for encoding variable types such as `String!`,
/// `[Int!]!`, `[UserInput]`, etc. It is never stored on values; it is derived
/// from the Rust type through [`InputValue::input_type`](crate::InputValue::input_type).
///
/// ### Example
/// ```rust
/// use apollo_query_builder::InputType;
///
/// let ty = InputType::non_null(InputType::list(InputType::non_null(InputType::scalar("Int"))));
///
/// assert_eq!(ty.to_string(), "[Int!]!");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum InputType {
    /// A named scalar type, e.g. `String`.
    Scalar(String),
    /// A list of another input type.
    List(Box<InputType>),
    /// A named input object type.
    Object(String),
    /// A named enum type.
    Enum(String),
    /// The non-null version of another input type.
    NonNull(Box<InputType>),
}

impl InputType {
    /// Create a new instance of InputType::Scalar.
    pub fn scalar(name: impl Into<String>) -> Self {
        InputType::Scalar(name.into())
    }

    /// Create a new instance of InputType::Object.
    pub fn object(name: impl Into<String>) -> Self {
        InputType::Object(name.into())
    }

    /// Create a new instance of InputType::Enum.
    pub fn enum_type(name: impl Into<String>) -> Self {
        InputType::Enum(name.into())
    }

    /// Create a new instance of InputType::List.
    pub fn list(ty: InputType) -> Self {
        InputType::List(Box::new(ty))
    }

    /// Wrap `ty` as non-null. An already non-null type is returned unchanged,
    /// `T!!` is not a GraphQL type.
    pub fn non_null(ty: InputType) -> Self {
        match ty {
            InputType::NonNull(_) => ty,
            ty => InputType::NonNull(Box::new(ty)),
        }
    }

    /// Returns `true` if this type ends in `!`.
    pub fn is_non_null(&self) -> bool {
        matches!(self, InputType::NonNull(_))
    }
}

impl Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputType::List(ty) => write!(f, "[{ty}]"),
            InputType::NonNull(ty) => write!(f, "{ty}!"),
            InputType::Scalar(name) | InputType::Object(name) | InputType::Enum(name) => {
                write!(f, "{name}")
            }
        }
    }
}
