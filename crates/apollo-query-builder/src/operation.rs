use std::{fmt, str::FromStr};

use crate::{
    directive::render_directives, error::UnknownOperationType, Directive,
    ErasedVariableDefinition, FragmentDefinition, FragmentSpread, Result, Selection, SelectionSet,
};

/// The OperationDefinition type represents a named query, mutation or
/// subscription.
///
/// *OperationDefinition*:
///     OperationType Name VariableDefinitions? Directives? SelectionSet
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Language.Operations).
///
/// ### Example
/// ```rust
/// use apollo_query_builder::{Directive, Operation, OperationType, VariableDefinition};
///
/// let variable = VariableDefinition::<String>::new("derp").erase().unwrap();
/// let operation = Operation::new(OperationType::Mutation, "Mutation")
///     .variable_definition(variable)
///     .directive(Directive::new("cool").argument("best", "directive"))
///     .field("name");
///
/// assert_eq!(
///     operation.render().unwrap(),
///     "mutation Mutation($derp: String) @cool(best: \"directive\") {\nname\n}"
/// );
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Operation<'a> {
    operation_type: OperationType,
    name: String,
    variable_definitions: Vec<ErasedVariableDefinition>,
    directives: Vec<Directive>,
    selection_set: SelectionSet<'a>,
}

impl<'a> Operation<'a> {
    /// Create a new instance of Operation with an empty selection set.
    pub fn new(operation_type: OperationType, name: impl Into<String>) -> Self {
        Self {
            operation_type,
            name: name.into(),
            variable_definitions: Vec::new(),
            directives: Vec::new(),
            selection_set: SelectionSet::new(),
        }
    }

    /// Create a new query.
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(OperationType::Query, name)
    }

    /// Create a new mutation.
    pub fn mutation(name: impl Into<String>) -> Self {
        Self::new(OperationType::Mutation, name)
    }

    /// Create a new subscription.
    pub fn subscription(name: impl Into<String>) -> Self {
        Self::new(OperationType::Subscription, name)
    }

    /// Add a variable definition.
    pub fn variable_definition(mut self, variable_definition: ErasedVariableDefinition) -> Self {
        self.variable_definitions.push(variable_definition);
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

    /// The kind of operation.
    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    /// The operation's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared variables, in order.
    pub fn variable_definitions(&self) -> &[ErasedVariableDefinition] {
        &self.variable_definitions
    }

    /// The operation's selection set.
    pub fn selection_set(&self) -> &SelectionSet<'a> {
        &self.selection_set
    }

    /// Every fragment definition the operation spreads, directly or through
    /// nested fields and fragments, without duplicates.
    pub fn referenced_fragments(&self) -> Vec<&'a FragmentDefinition<'a>> {
        let mut found = Vec::new();
        self.selection_set.collect_fragments(&mut found);
        found
    }

    /// Render the operation as GraphQL text.
    pub fn render(&self) -> Result<String> {
        log::trace!("rendering {} `{}`", self.operation_type, self.name);
        let body = self.selection_set.render_body(&self.name)?;

        let mut text = format!("{} {}", self.operation_type, self.name);
        if !self.variable_definitions.is_empty() {
            let variables = self
                .variable_definitions
                .iter()
                .map(ErasedVariableDefinition::render)
                .collect::<Result<Vec<_>>>()?;
            text.push('(');
            text.push_str(&variables.join(", "));
            text.push(')');
        }
        text.push_str(&render_directives(&self.directives)?);
        text.push_str(&body);

        Ok(text)
    }
}

/// The OperationType type represents the kind of operation
///
/// *OperationType*:
///     query | mutation | subscription
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#OperationType).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// Represents a query operation
    Query,
    /// Represents a mutation operation
    Mutation,
    /// Represents a subscription operation
    Subscription,
}

impl OperationType {
    /// The keyword starting the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationType {
    type Err = UnknownOperationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "query" => Ok(OperationType::Query),
            "mutation" => Ok(OperationType::Mutation),
            "subscription" => Ok(OperationType::Subscription),
            other => Err(UnknownOperationType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        InputObjectValue, InputType, InputValue, NonNullValue, Object, RenderError, Scalar, Value,
        VariableDefinition,
    };
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    struct UserInput;

    impl InputObjectValue for UserInput {
        const TYPE_NAME: &'static str = "UserInput";

        fn fields(&self) -> IndexMap<String, Value> {
            IndexMap::from([
                ("id".to_string(), Value::from(1234)),
                ("name".to_string(), Value::from("cool_user")),
            ])
        }
    }

    enum UserEnumInput {
        MyCase,
    }

    impl InputValue for UserEnumInput {
        fn input_type() -> Result<InputType> {
            Ok(InputType::enum_type("UserEnumInput"))
        }

        fn to_value(&self) -> Value {
            match self {
                UserEnumInput::MyCase => Value::Enum("MY_CASE".to_string()),
            }
        }
    }

    #[test]
    fn it_encodes_query() {
        let operation = Operation::new(OperationType::Query, "Query").field(Scalar::new("name"));

        assert_eq!(operation.render().unwrap(), "query Query {\nname\n}");
    }

    #[test]
    fn it_encodes_mutation_with_variable() {
        let variable = VariableDefinition::<String>::new("derp").erase().unwrap();
        let operation = Operation::mutation("Mutation")
            .field("name")
            .variable_definition(variable);

        assert_eq!(
            operation.render().unwrap(),
            "mutation Mutation($derp: String) {\nname\n}"
        );
    }

    #[test]
    fn it_encodes_directives_after_variables() {
        let variable = VariableDefinition::<String>::new("derp").erase().unwrap();
        let operation = Operation::mutation("Mutation")
            .field("name")
            .variable_definition(variable)
            .directive(Directive::new("cool").argument("best", "directive"));

        assert_eq!(
            operation.render().unwrap(),
            "mutation Mutation($derp: String) @cool(best: \"directive\") {\nname\n}"
        );
    }

    #[test]
    fn it_encodes_variable_definitions() {
        let string_variable = VariableDefinition::with_default("stringVariable", "best_string");
        let variable_variable =
            VariableDefinition::<VariableDefinition<String>>::new("variableVariable");
        let object_variable = VariableDefinition::<UserInput>::new("userInput");
        let non_optional_list_variable =
            VariableDefinition::<NonNullValue<Vec<NonNullValue<i32>>>>::new(
                "nonOptionalListVariable",
            );
        let optional_list_object_variable =
            VariableDefinition::<Vec<UserInput>>::new("optionalListObjectVariable");
        let enum_variable = VariableDefinition::<UserEnumInput>::new("enumVariable");

        let operation = Operation::mutation("Mutation")
            .field("name")
            .variable_definition(string_variable.erase().unwrap())
            .variable_definition(variable_variable.erase().unwrap())
            .variable_definition(object_variable.erase().unwrap())
            .variable_definition(non_optional_list_variable.erase().unwrap())
            .variable_definition(optional_list_object_variable.erase().unwrap())
            .variable_definition(enum_variable.erase().unwrap());

        assert_eq!(
            operation.render().unwrap(),
            "mutation Mutation($stringVariable: String = \"best_string\", $variableVariable: String, $userInput: UserInput, $nonOptionalListVariable: [Int!]!, $optionalListObjectVariable: [UserInput], $enumVariable: UserEnumInput) {\nname\n}"
        );
    }

    #[test]
    fn it_encodes_variables_used_as_arguments() {
        let id = VariableDefinition::<NonNullValue<String>>::new("id");
        let role = VariableDefinition::with_default("role", UserEnumInput::MyCase);
        let operation = Operation::query("User")
            .variable_definition(id.erase().unwrap())
            .variable_definition(role.erase().unwrap())
            .field(
                Object::new("user")
                    .argument("id", id)
                    .argument("role", role)
                    .field("name"),
            );

        assert_eq!(
            operation.render().unwrap(),
            "query User($id: String!, $role: UserEnumInput = MY_CASE) {\nuser(id: $id, role: $role) {\nname\n}\n}"
        );
    }

    #[test]
    fn it_fails_without_selections() {
        let variable = VariableDefinition::<String>::new("derp").erase().unwrap();
        let operation = Operation::subscription("Updates").variable_definition(variable);

        assert_eq!(
            operation.render(),
            Err(RenderError::EmptySelection {
                name: "Updates".to_string()
            })
        );
    }

    #[test]
    fn it_encodes_fragment_spreads_after_fields() {
        let fragment =
            FragmentDefinition::new("userFields", "User", vec!["id".into()], vec![]).unwrap();
        let operation = Operation::query("Viewer")
            .fragment(FragmentSpread::new(&fragment))
            .field("name");

        assert_eq!(
            operation.render().unwrap(),
            "query Viewer {\nname\n...userFields\n}"
        );
        assert_eq!(operation.referenced_fragments(), vec![&fragment]);
    }

    #[test]
    fn it_parses_operation_types() {
        for operation_type in [
            OperationType::Query,
            OperationType::Mutation,
            OperationType::Subscription,
        ] {
            assert_eq!(
                operation_type.to_string().parse::<OperationType>(),
                Ok(operation_type)
            );
        }
        assert_eq!(
            "fragment".parse::<OperationType>(),
            Err(UnknownOperationType("fragment".to_string()))
        );
    }
}
