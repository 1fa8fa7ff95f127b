//! Edge transitions for schema-derived GraphQL query graphs.
//!
//! A query graph has one vertex per (service, type) pair and one edge per
//! way of moving between them. Every edge is labeled with a [`Transition`]
//! describing what traversing it means in terms of the schema: selecting a
//! field, narrowing an abstract type, hopping between services by key, or
//! the free move out of a root vertex.
//!
//! Transitions borrow the schema elements they describe. The [`schema`] and
//! [`types`] modules provide that schema model, loaded from GraphQL SDL.

pub mod loc;
pub mod schema;
mod transition;
pub mod types;

pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use transition::free_transition;
pub use transition::Transition;
pub use transition::TransitionKind;
pub use transition::FREE_TRANSITION;
