use indexmap::IndexMap;

use crate::{Result, Value};

/// Ordered arguments of a field or a directive, `name: value`.
///
/// Insertion order is the rendering order.
pub type Arguments = IndexMap<String, Value>;

/// Render `(k1: v1, k2: v2)`, or nothing at all when there are no arguments.
///
/// *Arguments*:
///     ( Argument+ )
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Language.Arguments).
pub(crate) fn render_arguments(arguments: &Arguments) -> Result<String> {
    if arguments.is_empty() {
        return Ok(String::new());
    }

    let mut text = String::from("(");
    for (i, (name, value)) in arguments.iter().enumerate() {
        if i > 0 {
            text.push_str(", ");
        }
        text.push_str(name);
        text.push_str(": ");
        text.push_str(&value.render()?);
    }
    text.push(')');

    Ok(text)
}
