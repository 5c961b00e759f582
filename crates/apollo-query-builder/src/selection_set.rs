use std::ptr;

use crate::{
    field::serialize_fields, Directive, Field, FragmentDefinition, FragmentSpread, Object,
    RenderError, Result, Scalar,
};

/// The SelectionSet type represents the selection set of an object field, a
/// fragment definition or an operation.
///
/// *SelectionSet*:
///     { Selection+ }
///
/// Fields are rendered first, then fragment spreads, one per line and
/// without indentation.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Selection-Sets).
///
/// ### Example
/// ```rust
/// use apollo_query_builder::{Scalar, SelectionSet};
///
/// let mut selection_set = SelectionSet::new();
/// selection_set.field("id".into());
/// selection_set.field(Scalar::new("name").alias("nickname").into());
///
/// assert_eq!(selection_set.render_fields().unwrap(), "id\nnickname: name");
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
pub struct SelectionSet<'a> {
    fields: Vec<Selection<'a>>,
    fragments: Vec<FragmentSpread<'a>>,
}

impl<'a> SelectionSet<'a> {
    /// Create an empty instance of SelectionSet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an instance of SelectionSet given its fields and fragment spreads
    pub fn with_selections(fields: Vec<Selection<'a>>, fragments: Vec<FragmentSpread<'a>>) -> Self {
        Self { fields, fragments }
    }

    /// Add a field to the SelectionSet
    pub fn field(&mut self, field: Selection<'a>) {
        self.fields.push(field);
    }

    /// Add a fragment spread to the SelectionSet
    pub fn fragment(&mut self, fragment: FragmentSpread<'a>) {
        self.fragments.push(fragment);
    }

    /// Selected fields, in order.
    pub fn fields(&self) -> &[Selection<'a>] {
        &self.fields
    }

    /// Selected fragment spreads, in order.
    pub fn fragments(&self) -> &[FragmentSpread<'a>] {
        &self.fragments
    }

    /// Returns `true` if neither fields nor fragment spreads are selected.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.fragments.is_empty()
    }

    /// Render the fields joined by newlines, without fragment spreads.
    pub fn render_fields(&self) -> Result<String> {
        serialize_fields(&self.fields)
    }

    /// Render ` {\n<selections>\n}` for the node called `owner`, failing if
    /// nothing is selected.
    pub(crate) fn render_body(&self, owner: &str) -> Result<String> {
        if self.is_empty() {
            return Err(RenderError::EmptySelection {
                name: owner.to_string(),
            });
        }

        let mut lines = Vec::with_capacity(self.fields.len() + self.fragments.len());
        for field in &self.fields {
            lines.push(field.render()?);
        }
        for fragment in &self.fragments {
            lines.push(fragment.render());
        }

        Ok(format!(" {{\n{}\n}}", lines.join("\n")))
    }

    /// Push every fragment definition reachable from this selection set that
    /// is not in `found` yet, in first-seen order.
    pub(crate) fn collect_fragments(&self, found: &mut Vec<&'a FragmentDefinition<'a>>) {
        for field in &self.fields {
            if let Selection::Object(object) = field {
                object.selection_set().collect_fragments(found);
            }
        }
        for spread in &self.fragments {
            let definition = spread.definition();
            if found.iter().any(|seen| ptr::eq(*seen, definition)) {
                continue;
            }
            found.push(definition);
            definition.selection_set().collect_fragments(found);
        }
    }
}

/// The Selection type represents a field in a selection set.
///
/// Fragment spreads are kept apart in [`SelectionSet`] since they always
/// render after the fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    /// A leaf field
    Scalar(Scalar),
    /// A field with its own selection set
    Object(Object<'a>),
}

impl Field for Selection<'_> {
    fn name(&self) -> &str {
        match self {
            Selection::Scalar(scalar) => scalar.name(),
            Selection::Object(object) => object.name(),
        }
    }

    fn alias(&self) -> Option<&str> {
        match self {
            Selection::Scalar(scalar) => Field::alias(scalar),
            Selection::Object(object) => Field::alias(object),
        }
    }

    fn directives(&self) -> &[Directive] {
        match self {
            Selection::Scalar(scalar) => scalar.directives(),
            Selection::Object(object) => object.directives(),
        }
    }

    fn render(&self) -> Result<String> {
        match self {
            Selection::Scalar(scalar) => scalar.render(),
            Selection::Object(object) => object.render(),
        }
    }
}

impl From<Scalar> for Selection<'_> {
    fn from(scalar: Scalar) -> Self {
        Selection::Scalar(scalar)
    }
}

impl<'a> From<Object<'a>> for Selection<'a> {
    fn from(object: Object<'a>) -> Self {
        Selection::Object(object)
    }
}

impl From<&str> for Selection<'_> {
    fn from(name: &str) -> Self {
        Selection::Scalar(Scalar::new(name))
    }
}

impl From<String> for Selection<'_> {
    fn from(name: String) -> Self {
        Selection::Scalar(Scalar::new(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_encodes_fields_before_fragments() {
        let fragment = FragmentDefinition::new("myFragment", "User", vec!["id".into()], vec![])
            .unwrap();
        let mut selection_set = SelectionSet::new();
        selection_set.fragment(FragmentSpread::new(&fragment));
        selection_set.field(Scalar::new("myField").alias("myAlias").into());

        assert_eq!(
            selection_set.render_body("User").unwrap(),
            " {\nmyAlias: myField\n...myFragment\n}"
        );
    }

    #[test]
    fn it_encodes_deeper_selection_set() {
        let third = Object::new("third").field("fourth");
        let second = Object::new("second").field(third);
        let first = Object::new("first").field(second);
        let selection_set = SelectionSet::with_selections(vec![first.into()], vec![]);

        assert_eq!(
            selection_set.render_fields().unwrap(),
            "first {\nsecond {\nthird {\nfourth\n}\n}\n}"
        );
    }

    #[test]
    fn it_rejects_empty_selection_set() {
        let selection_set = SelectionSet::new();

        assert!(selection_set.is_empty());
        assert_eq!(selection_set.render_fields().unwrap(), "");
        assert_eq!(
            selection_set.render_body("obj"),
            Err(RenderError::EmptySelection {
                name: "obj".to_string()
            })
        );
    }

    #[test]
    fn it_delegates_field_capability() {
        let selection = Selection::from(Object::new("obj").alias("cool").field("id"));

        assert_eq!(selection.name(), "obj");
        assert_eq!(selection.alias(), Some("cool"));
        assert_eq!(selection.render_alias(), "cool: ");
    }

    #[test]
    fn it_collects_fragments_once() {
        let leaf = FragmentDefinition::new("leaf", "User", vec!["id".into()], vec![]).unwrap();
        let middle = FragmentDefinition::new(
            "middle",
            "User",
            vec!["name".into()],
            vec![FragmentSpread::new(&leaf)],
        )
        .unwrap();
        let mut selection_set = SelectionSet::new();
        selection_set.field(
            Object::new("friends")
                .fragment(FragmentSpread::new(&leaf))
                .into(),
        );
        selection_set.fragment(FragmentSpread::new(&middle));
        selection_set.fragment(FragmentSpread::new(&leaf));

        let mut found = Vec::new();
        selection_set.collect_fragments(&mut found);
        let names: Vec<&str> = found.iter().map(|fragment| fragment.name()).collect();

        assert_eq!(names, vec!["leaf", "middle"]);
    }
}
