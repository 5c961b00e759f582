use crate::{
    argument::render_arguments, directive::render_directives, error::non_empty_name, Arguments,
    Directive, FragmentSpread, InputValue, Result, Selection, SelectionSet,
};

/// Anything that can be placed in a selection set.
///
/// *Field*:
///     Alias? Name Arguments? Directives? SelectionSet?
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Language.Fields).
pub trait Field {
    /// The field's name in the schema.
    fn name(&self) -> &str;

    /// The alias the field's result is returned under, if any.
    fn alias(&self) -> Option<&str>;

    /// Directives attached to the field.
    fn directives(&self) -> &[Directive] {
        &[]
    }

    /// Render the field as it appears inside a selection set.
    fn render(&self) -> Result<String>;

    /// Render `"alias: "`, or nothing when the field is not aliased.
    fn render_alias(&self) -> String {
        match self.alias() {
            Some(alias) => format!("{alias}: "),
            None => String::new(),
        }
    }
}

/// Render every field on its own line, in order. Empty input renders as an
/// empty string.
pub fn serialize_fields<F: Field>(fields: &[F]) -> Result<String> {
    let rendered = fields
        .iter()
        .map(|field| field.render())
        .collect::<Result<Vec<_>>>()?;

    Ok(rendered.join("\n"))
}

/// A leaf field without a selection set.
///
/// ### Example
/// ```rust
/// use apollo_query_builder::{Directive, Field, Scalar};
///
/// let scalar = Scalar::new("scalar")
///     .alias("cool_alias")
///     .directive(Directive::new("include").argument("if", true));
///
/// assert_eq!(scalar.render().unwrap(), "cool_alias: scalar @include(if: true)");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Scalar {
    name: String,
    alias: Option<String>,
    directives: Vec<Directive>,
}

impl Scalar {
    /// Create a new instance of Scalar.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            directives: Vec::new(),
        }
    }

    /// Set the field's alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Add a directive.
    pub fn directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }
}

impl Field for Scalar {
    fn name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    fn directives(&self) -> &[Directive] {
        &self.directives
    }

    fn render(&self) -> Result<String> {
        let name = non_empty_name("field", &self.name)?;
        if let Some(alias) = &self.alias {
            non_empty_name("alias", alias)?;
        }

        Ok(format!(
            "{}{}{}",
            self.render_alias(),
            name,
            render_directives(&self.directives)?
        ))
    }
}

/// A composite field with arguments and a nested selection set.
///
/// The selection set must not be empty when the object is rendered.
///
/// ### Example
/// ```rust
/// use apollo_query_builder::{Field, Object, Scalar};
///
/// let object = Object::new("obj")
///     .alias("cool")
///     .argument("key", "value")
///     .field(Scalar::new("scalar2").alias("derp"));
///
/// assert_eq!(
///     object.render().unwrap(),
///     "cool: obj(key: \"value\") {\nderp: scalar2\n}"
/// );
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Object<'a> {
    name: String,
    alias: Option<String>,
    arguments: Arguments,
    directives: Vec<Directive>,
    selection_set: SelectionSet<'a>,
}

impl<'a> Object<'a> {
    /// Create a new instance of Object with an empty selection set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            arguments: Arguments::new(),
            directives: Vec::new(),
            selection_set: SelectionSet::new(),
        }
    }

    /// Set the field's alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Add an argument. Arguments render in insertion order.
    pub fn argument(mut self, name: impl Into<String>, value: impl InputValue) -> Self {
        self.arguments.insert(name.into(), value.to_value());
        self
    }

    /// Add a directive.
    pub fn directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Add a field to the selection set.
    pub fn field(mut self, field: impl Into<Selection<'a>>) -> Self {
        self.selection_set.field(field.into());
        self
    }

    /// Add a fragment spread to the selection set.
    pub fn fragment(mut self, fragment: FragmentSpread<'a>) -> Self {
        self.selection_set.fragment(fragment);
        self
    }

    /// The object's arguments.
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// The object's selection set.
    pub fn selection_set(&self) -> &SelectionSet<'a> {
        &self.selection_set
    }
}

impl Field for Object<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    fn directives(&self) -> &[Directive] {
        &self.directives
    }

    fn render(&self) -> Result<String> {
        let name = non_empty_name("field", &self.name)?;
        if let Some(alias) = &self.alias {
            non_empty_name("alias", alias)?;
        }
        let body = self.selection_set.render_body(name)?;

        Ok(format!(
            "{}{}{}{}{}",
            self.render_alias(),
            name,
            render_arguments(&self.arguments)?,
            render_directives(&self.directives)?,
            body
        ))
    }
}
