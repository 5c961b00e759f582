use crate::{
    directive::render_directives, error::non_empty_name, Directive, InputType, InputValue,
    RenderError, Result, Value,
};

/// The VariableDefinition type represents a typed operation variable.
///
/// *VariableDefinition*:
///     VariableName : Type DefaultValue? Directives?
///
/// The GraphQL type is derived from `T`. Operations hold variables of
/// different types, so a definition is [erased](VariableDefinition::erase)
/// before it is added to one. A definition is also an input value itself,
/// rendering as `$name` wherever it is used as an argument.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Language.Variables).
///
/// ### Example
/// ```rust
/// use apollo_query_builder::{InputValue, VariableDefinition};
///
/// let variable = VariableDefinition::with_default("stringVariable", "best_string".to_string());
///
/// assert_eq!(
///     variable.erase().unwrap().render().unwrap(),
///     r#"$stringVariable: String = "best_string""#
/// );
/// assert_eq!(variable.render().unwrap(), "$stringVariable");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition<T> {
    name: String,
    default_value: Option<T>,
    directives: Vec<Directive>,
}

impl<T> VariableDefinition<T> {
    /// Create an instance of VariableDefinition without a default value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: None,
            directives: Vec::new(),
        }
    }

    /// Create an instance of VariableDefinition with a default value.
    pub fn with_default(name: impl Into<String>, default_value: T) -> Self {
        Self {
            name: name.into(),
            default_value: Some(default_value),
            directives: Vec::new(),
        }
    }

    /// Add a directive.
    pub fn directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// The variable's name, without `$`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: InputValue> VariableDefinition<T> {
    /// Resolve the type annotation and the default literal, producing a
    /// definition that no longer depends on `T`.
    ///
    /// Fails if the name is empty, if `T` has no GraphQL type, if the default
    /// cannot be rendered, or if the default refers to a variable.
    pub fn erase(&self) -> Result<ErasedVariableDefinition> {
        non_empty_name("variable", &self.name)?;
        let ty = T::input_type()?;
        let default_value = match &self.default_value {
            Some(default_value) => {
                let value = default_value.to_value();
                if !value.is_const() {
                    return Err(RenderError::InvalidDefault {
                        variable: self.name.clone(),
                    });
                }
                Some(value.render()?)
            }
            None => None,
        };

        Ok(ErasedVariableDefinition {
            name: self.name.clone(),
            ty,
            default_value,
            directives: self.directives.clone(),
        })
    }
}

impl<T: InputValue> InputValue for VariableDefinition<T> {
    fn input_type() -> Result<InputType> {
        T::input_type()
    }

    fn to_value(&self) -> Value {
        Value::Variable(self.name.clone())
    }
}

/// A variable definition with its type and default already rendered.
///
/// Created by [`VariableDefinition::erase`].
#[derive(Debug, PartialEq, Clone)]
pub struct ErasedVariableDefinition {
    name: String,
    ty: InputType,
    default_value: Option<String>,
    directives: Vec<Directive>,
}

impl ErasedVariableDefinition {
    /// The variable's name, without `$`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variable's type.
    pub fn ty(&self) -> &InputType {
        &self.ty
    }

    /// The rendered default literal, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Render `$name: Type = default @directives`.
    pub fn render(&self) -> Result<String> {
        let mut text = format!("${}: {}", self.name, self.ty);
        if let Some(default_value) = &self.default_value {
            text.push_str(" = ");
            text.push_str(default_value);
        }
        text.push_str(&render_directives(&self.directives)?);

        Ok(text)
    }
}
