// ── Mutation intents ──
//
// Presentation hands the controller one of these; the controller sends it
// through the backend and then reloads the whole collection.

pub mod form;

use strum::{Display, IntoStaticStr};

use foodlist_api::FoodPayload;

use crate::model::FoodId;

pub use form::{FieldError, FoodForm, FormField, ValidationErrors};

/// A create, update, or delete request against the collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create(FoodPayload),
    Update { id: FoodId, payload: FoodPayload },
    Delete { id: FoodId },
}

/// Which kind of [`Mutation`] was issued; used for messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl Mutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            Self::Create(_) => MutationKind::Create,
            Self::Update { .. } => MutationKind::Update,
            Self::Delete { .. } => MutationKind::Delete,
        }
    }

    /// Target record, if the mutation addresses an existing one.
    pub fn target(&self) -> Option<&FoodId> {
        match self {
            Self::Create(_) => None,
            Self::Update { id, .. } | Self::Delete { id } => Some(id),
        }
    }
}
