//! <div align="center">
//!   <h1><code>apollo-query-builder</code></h1>
//!
//!   <p>
//!     <strong>A library to build GraphQL operations from typed Rust values.</strong>
//!   </p>
//! </div>
//!
//! Operations, fields, fragments, variables and directives are assembled as
//! plain Rust values and rendered to GraphQL text. Rendering either returns
//! syntactically valid GraphQL or a [`RenderError`] saying which part of the
//! tree is malformed; partial text is never returned.
//!
//! Arguments, directive arguments and variable defaults accept anything that
//! implements [`InputValue`]: strings, numbers, booleans, `Vec`s, `Option`s,
//! [`NonNullValue`], variables and your own [`InputObjectValue`] types. The
//! type of a variable is derived from its Rust type, so `$ids: [Int!]!` comes
//! from `VariableDefinition<NonNullValue<Vec<NonNullValue<i32>>>>`.
//!
//! ## Getting started
//! Add this to your `Cargo.toml` to start using `apollo-query-builder`:
//! ```toml
//! # Just an example, change to the necessary package version.
//! [dependencies]
//! apollo-query-builder = "0.1.0"
//! ```
//!
//! ## Example
//! ```rust
//! use apollo_query_builder::{
//!     Directive, Document, FragmentDefinition, FragmentSpread, NonNullValue, Object, Operation,
//!     Scalar, VariableDefinition,
//! };
//! use indoc::indoc;
//!
//! let id = VariableDefinition::<NonNullValue<String>>::new("id");
//! let with_friends = VariableDefinition::with_default("withFriends", false);
//!
//! let user_fields = FragmentDefinition::new(
//!     "userFields",
//!     "User",
//!     vec![Scalar::new("name").into(), Scalar::new("avatarUrl").alias("avatar").into()],
//!     vec![],
//! )
//! .unwrap();
//!
//! let operation = Operation::query("UserProfile")
//!     .variable_definition(id.erase().unwrap())
//!     .variable_definition(with_friends.erase().unwrap())
//!     .field(
//!         Object::new("user")
//!             .argument("id", id)
//!             .fragment(FragmentSpread::new(&user_fields))
//!             .field(
//!                 Object::new("friends")
//!                     .argument("first", 10)
//!                     .directive(Directive::new("include").argument("if", with_friends))
//!                     .fragment(FragmentSpread::new(&user_fields)),
//!             ),
//!     );
//!
//! assert_eq!(
//!     Document::from_operation(operation).render().unwrap(),
//!     indoc! {r#"
//!         query UserProfile($id: String!, $withFriends: Boolean = false) {
//!         user(id: $id) {
//!         friends(first: 10) @include(if: $withFriends) {
//!         ...userFields
//!         }
//!         ...userFields
//!         }
//!         }
//!
//!         fragment userFields on User {
//!         name
//!         avatar: avatarUrl
//!         }"#
//!     }
//! );
//! ```
//!
//! ## Features
//! - `json`: use `serde_json::Value`s as argument and default literals.
//!
//! ## License
//! Licensed under either of
//!
//! - Apache License, Version 2.0 ([LICENSE-APACHE] or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT] or <https://opensource.org/licenses/MIT>)
//!
//! at your option.
//!
//! [LICENSE-APACHE]: https://github.com/apollographql/apollo-rs/blob/main/LICENSE-APACHE
//! [LICENSE-MIT]: https://github.com/apollographql/apollo-rs/blob/main/LICENSE-MIT

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, future_incompatible, unreachable_pub, rust_2018_idioms)]

mod argument;
mod directive;
mod document;
mod error;
mod field;
mod fragment;
mod input_type;
mod input_value;
mod operation;
mod selection_set;
mod string_value;
mod value;
mod variable;

pub use argument::Arguments;
pub use directive::Directive;
pub use document::Document;
pub use error::{RenderError, Result, UnknownOperationType};
pub use field::{serialize_fields, Field, Object, Scalar};
pub use fragment::{FragmentDefinition, FragmentSpread};
pub use indexmap::IndexMap;
pub use input_type::InputType;
pub use input_value::{InputObjectValue, InputValue, NonNullValue};
pub use operation::{Operation, OperationType};
pub use selection_set::{Selection, SelectionSet};
pub use value::Value;
pub use variable::{ErasedVariableDefinition, VariableDefinition};
