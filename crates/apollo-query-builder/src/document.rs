use std::ptr;

use crate::{FragmentDefinition, Operation, RenderError, Result};

/// The `Document` type represents the full text sent as the `query` of a
/// GraphQL request: operations followed by the fragment definitions they
/// spread.
///
/// *Document*:
///     OperationDefinition*
///     FragmentDefinition*
///
/// Adding an operation also adds every fragment definition reachable from
/// it, so the rendered document is self-contained. Definitions are separated
/// by a blank line.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Document).
///
/// ### Example
/// ```rust
/// use apollo_query_builder::{Document, FragmentDefinition, FragmentSpread, Object, Operation};
/// use indoc::indoc;
///
/// let user_fields = FragmentDefinition::new("userFields", "User", vec!["id".into(), "name".into()], vec![])
///     .unwrap();
/// let operation = Operation::query("Viewer")
///     .field(Object::new("viewer").fragment(FragmentSpread::new(&user_fields)));
///
/// assert_eq!(
///     Document::from_operation(operation).render().unwrap(),
///     indoc! {"
///         query Viewer {
///         viewer {
///         ...userFields
///         }
///         }
///
///         fragment userFields on User {
///         id
///         name
///         }"
///     }
/// );
/// ```
#[derive(Debug, Default, Clone)]
pub struct Document<'a> {
    operations: Vec<Operation<'a>>,
    fragments: Vec<&'a FragmentDefinition<'a>>,
}

impl<'a> Document<'a> {
    /// Create an empty Document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Document holding `operation` and the fragments it spreads.
    pub fn from_operation(operation: Operation<'a>) -> Self {
        Self::new().operation(operation)
    }

    /// Add an operation and every fragment definition it spreads.
    pub fn operation(mut self, operation: Operation<'a>) -> Self {
        for fragment in operation.referenced_fragments() {
            self.push_fragment(fragment);
        }
        self.operations.push(operation);
        self
    }

    /// Add a fragment definition and every fragment definition it spreads.
    pub fn fragment(mut self, fragment: &'a FragmentDefinition<'a>) -> Self {
        self.push_fragment(fragment);
        for nested in fragment.referenced_fragments() {
            self.push_fragment(nested);
        }
        self
    }

    /// The operations, in insertion order.
    pub fn operations(&self) -> &[Operation<'a>] {
        &self.operations
    }

    /// The fragment definitions, in first-seen order.
    pub fn fragments(&self) -> &[&'a FragmentDefinition<'a>] {
        &self.fragments
    }

    fn push_fragment(&mut self, fragment: &'a FragmentDefinition<'a>) {
        if self.fragments.iter().any(|seen| ptr::eq(*seen, fragment)) {
            log::debug!("fragment `{}` is already in the document", fragment.name());
            return;
        }
        self.fragments.push(fragment);
    }

    /// Render every operation, then every fragment definition.
    ///
    /// Fails if two different fragment definitions share a name.
    pub fn render(&self) -> Result<String> {
        for (i, fragment) in self.fragments.iter().enumerate() {
            let clash = self.fragments[..i]
                .iter()
                .any(|seen| seen.name() == fragment.name());
            if clash {
                return Err(RenderError::DuplicateFragment {
                    name: fragment.name().to_string(),
                });
            }
        }

        let mut definitions = Vec::with_capacity(self.operations.len() + self.fragments.len());
        for operation in &self.operations {
            definitions.push(operation.render()?);
        }
        for fragment in &self.fragments {
            definitions.push(fragment.render()?);
        }

        Ok(definitions.join("\n\n"))
    }
}
