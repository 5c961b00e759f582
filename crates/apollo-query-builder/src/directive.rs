use crate::{argument::render_arguments, error::non_empty_name, Arguments, InputValue, Result};

/// The `Directive` type represents a Directive, it provides a way to describe alternate runtime execution and type validation behavior in a GraphQL document.
///
/// *Directive*:
///     @ Name Arguments?
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Language.Directives).
///
/// ### Example
/// ```rust
/// use apollo_query_builder::Directive;
///
/// let directive = Directive::new("myDirective").argument("first", 5);
///
/// assert_eq!(directive.render().unwrap(), "@myDirective(first: 5)");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Directive {
    name: String,
    arguments: Arguments,
}

impl Directive {
    /// Create an instance of Directive
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Arguments::new(),
        }
    }

    /// Add an argument to the directive. Setting the same name twice keeps
    /// the first position and the last value.
    pub fn argument(mut self, name: impl Into<String>, value: impl InputValue) -> Self {
        self.arguments.insert(name.into(), value.to_value());
        self
    }

    /// The directive's name, without `@`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render `@name` or `@name(k: v, ...)`.
    pub fn render(&self) -> Result<String> {
        let name = non_empty_name("directive", &self.name)?;
        Ok(format!("@{}{}", name, render_arguments(&self.arguments)?))
    }
}

/// Render a directive clause: one leading space, then every directive
/// separated by a space. Empty when there are no directives.
pub(crate) fn render_directives(directives: &[Directive]) -> Result<String> {
    let mut text = String::new();
    for directive in directives {
        text.push(' ');
        text.push_str(&directive.render()?);
    }

    Ok(text)
}
