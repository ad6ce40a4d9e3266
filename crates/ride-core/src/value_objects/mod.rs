//! Value objects - immutable types that represent domain concepts

mod actor_id;
mod actor_kind;

pub use actor_id::{ActorId, ActorIdParseError};
pub use actor_kind::ActorKind;
