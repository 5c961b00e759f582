//! Rendered documents must parse as GraphQL without syntax errors.

use apollo_parser::Parser;
use apollo_query_builder::{
    Directive, Document, Field, FragmentDefinition, FragmentSpread, IndexMap, InputObjectValue,
    NonNullValue, Object, Operation, RenderError, Scalar, Value, VariableDefinition,
};

fn syntax_errors(source: &str) -> Vec<String> {
    let tree = Parser::new(source).parse();
    tree.errors().map(|err| format!("{err:?}")).collect()
}

fn assert_valid(source: &str) {
    let errors = syntax_errors(source);
    assert!(errors.is_empty(), "{source}\n\nparsing error(s): {}", errors.join(", "));
}

struct ReviewInput {
    stars: i32,
    commentary: Option<String>,
    tags: Vec<String>,
}

impl InputObjectValue for ReviewInput {
    const TYPE_NAME: &'static str = "ReviewInput";

    fn fields(&self) -> IndexMap<String, Value> {
        IndexMap::from([
            ("stars".to_string(), Value::from(self.stars)),
            ("commentary".to_string(), Value::from(self.commentary.clone())),
            ("tags".to_string(), Value::from(self.tags.clone())),
        ])
    }
}

#[test]
fn query_with_fragments_and_directives() {
    let character = FragmentDefinition::new(
        "characterFields",
        "Character",
        vec![Scalar::new("name").into(), Scalar::new("id").alias("characterId").into()],
        vec![],
    )
    .unwrap()
    .directive(Directive::new("cacheControl").argument("maxAge", 60));
    let episode = VariableDefinition::<NonNullValue<String>>::new("episode");
    let with_friends = VariableDefinition::with_default("withFriends", true);

    let operation = Operation::query("Hero")
        .variable_definition(episode.erase().unwrap())
        .variable_definition(with_friends.erase().unwrap())
        .directive(Directive::new("live"))
        .field(
            Object::new("hero")
                .argument("episode", episode)
                .fragment(FragmentSpread::new(&character))
                .field(
                    Object::new("friends")
                        .alias("allies")
                        .argument("first", 3)
                        .directive(Directive::new("include").argument("if", with_friends))
                        .fragment(FragmentSpread::new(&character)),
                ),
        );

    assert_valid(&Document::from_operation(operation).render().unwrap());
}

#[test]
fn mutation_with_input_object_and_escaped_strings() {
    let review = ReviewInput {
        stars: 5,
        commentary: Some("She said \"wow\"\nthen left \\o/".to_string()),
        tags: vec!["classic".to_string()],
    };
    let default_review = VariableDefinition::with_default(
        "review",
        ReviewInput {
            stars: 1,
            commentary: None,
            tags: Vec::new(),
        },
    );

    let operation = Operation::mutation("CreateReview")
        .variable_definition(default_review.erase().unwrap())
        .field(
            Object::new("createReview")
                .argument("review", review)
                .argument("ratio", 0.5)
                .argument("filters", IndexMap::from([("deleted", false)]))
                .field("stars")
                .field("commentary"),
        );

    let text = operation.render().unwrap();
    assert!(text.contains(r#"commentary: "She said \"wow\"\nthen left \\o/""#));
    assert_valid(&text);
}

#[test]
fn subscription_with_list_variables() {
    let ids = VariableDefinition::<NonNullValue<Vec<NonNullValue<i32>>>>::new("ids");
    let operation = Operation::subscription("Updates")
        .variable_definition(ids.erase().unwrap())
        .field(Object::new("updates").argument("ids", ids).field("id"));

    assert_valid(&operation.render().unwrap());
}

#[test]
fn nested_fragment_definitions() {
    let leaf = FragmentDefinition::new("leaf", "Node", vec!["id".into()], vec![]).unwrap();
    let branch =
        FragmentDefinition::new("branch", "Node", vec![], vec![FragmentSpread::new(&leaf)])
            .unwrap();
    let document = Document::new().fragment(&branch);

    assert_eq!(document.fragments().len(), 2);
    assert_valid(&document.render().unwrap());
}

#[test]
fn bare_fields_render_like_scalars() {
    let object = Object::new("viewer").field("login").field(Scalar::new("login"));

    let text = object.render().unwrap();
    assert_eq!(text, "viewer {\nlogin\nlogin\n}");
    assert_valid(&format!("{{ {text} }}"));
}

#[test]
fn fragment_named_on_is_not_graphql() {
    assert!(!syntax_errors("fragment on on User {\nid\n}").is_empty());
    assert!(FragmentDefinition::new("on", "User", vec!["id".into()], vec![]).is_none());
}

#[test]
fn wide_integers_and_f32_stay_valid_literals() {
    let object = Object::new("stats")
        .argument("since", u64::MAX)
        .argument("ratio", 0.1f32)
        .field("count");

    let text = object.render().unwrap();
    assert_eq!(
        text,
        "stats(since: 18446744073709551615, ratio: 0.1) {\ncount\n}"
    );
    assert_valid(&format!("{{ {text} }}"));
}

#[test]
fn empty_names_never_render() {
    assert!(!syntax_errors("{ obj {\n\n} }").is_empty());
    assert_eq!(
        Object::new("obj").field(Scalar::new("")).render(),
        Err(RenderError::EmptyName { kind: "field" })
    );
    assert!(FragmentDefinition::new("", "User", vec!["id".into()], vec![]).is_none());
}
