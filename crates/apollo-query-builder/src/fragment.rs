use crate::{directive::render_directives, Directive, Result, Selection, SelectionSet};

/// The FragmentDefinition type represents a fragment definition
///
/// *FragmentDefinition*:
///     fragment FragmentName TypeCondition Directives? SelectionSet
///
/// Construction is the only fallible step: a fragment named `on`, one with an
/// empty name or type condition, or one that selects nothing is never created.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#FragmentDefinition).
///
/// ### Example
/// ```rust
/// use apollo_query_builder::{Directive, FragmentDefinition, Scalar};
///
/// let fragment = FragmentDefinition::new("frag", "CoolType", vec![Scalar::new("scalar1").into()], vec![])
///     .unwrap()
///     .directive(Directive::new("cool").argument("best", "directive"));
///
/// assert_eq!(
///     fragment.render().unwrap(),
///     "fragment frag on CoolType @cool(best: \"directive\") {\nscalar1\n}"
/// );
/// assert!(FragmentDefinition::new("on", "CoolType", vec!["id".into()], vec![]).is_none());
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentDefinition<'a> {
    name: String,
    type_condition: String,
    directives: Vec<Directive>,
    selection_set: SelectionSet<'a>,
}

impl<'a> FragmentDefinition<'a> {
    /// Create an instance of FragmentDefinition.
    ///
    /// Returns `None` if `name` is empty or `on`, if `type_condition` is empty,
    /// or if there are neither fields nor fragment spreads.
    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
        fields: Vec<Selection<'a>>,
        fragments: Vec<FragmentSpread<'a>>,
    ) -> Option<Self> {
        let name = name.into();
        if name.is_empty() || name == "on" {
            log::debug!("rejecting fragment definition: `{name}` is not a valid fragment name");
            return None;
        }
        let type_condition = type_condition.into();
        if type_condition.is_empty() {
            log::debug!("rejecting fragment definition `{name}`: empty type condition");
            return None;
        }

        let selection_set = SelectionSet::with_selections(fields, fragments);
        if selection_set.is_empty() {
            log::debug!("rejecting fragment definition `{name}`: empty selection set");
            return None;
        }

        Some(Self {
            name,
            type_condition,
            directives: Vec::new(),
            selection_set,
        })
    }

    /// Add a directive.
    pub fn directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// The fragment's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type the fragment applies to.
    pub fn type_condition(&self) -> &str {
        &self.type_condition
    }

    /// The fragment's selection set.
    pub fn selection_set(&self) -> &SelectionSet<'a> {
        &self.selection_set
    }

    /// Every fragment definition this fragment spreads, directly or through
    /// nested fields and fragments, without duplicates.
    pub fn referenced_fragments(&self) -> Vec<&'a FragmentDefinition<'a>> {
        let mut found = Vec::new();
        self.selection_set.collect_fragments(&mut found);
        found
    }

    /// Render `fragment name on Type @directives {\n...\n}`.
    pub fn render(&self) -> Result<String> {
        log::trace!("rendering fragment `{}`", self.name);
        let body = self.selection_set.render_body(&self.name)?;

        Ok(format!(
            "fragment {} on {}{}{}",
            self.name,
            self.type_condition,
            render_directives(&self.directives)?,
            body
        ))
    }
}

/// The FragmentSpread type represents a named fragment used in a selection set.
///
/// *FragmentSpread*:
///     ... FragmentName
///
/// The spread borrows its definition, one definition can be spread from any
/// number of places.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#FragmentSpread).
///
/// ### Example
/// ```rust
/// use apollo_query_builder::{FragmentDefinition, FragmentSpread};
///
/// let definition = FragmentDefinition::new("myFragment", "User", vec!["id".into()], vec![]).unwrap();
/// let spread = FragmentSpread::new(&definition);
///
/// assert_eq!(spread.render(), "...myFragment");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentSpread<'a> {
    definition: &'a FragmentDefinition<'a>,
}

impl<'a> FragmentSpread<'a> {
    /// Create a new instance of FragmentSpread
    pub fn new(definition: &'a FragmentDefinition<'a>) -> Self {
        Self { definition }
    }

    /// The spread fragment definition.
    pub fn definition(&self) -> &'a FragmentDefinition<'a> {
        self.definition
    }

    /// Render `...name`.
    pub fn render(&self) -> String {
        format!("...{}", self.definition.name)
    }
}
