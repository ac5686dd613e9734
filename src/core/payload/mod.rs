//! Message payloads
//!
//! Wire tags: transaction = 0, milestone = 1, indexation = 2. Anything
//! else decodes to [`Payload::Unknown`] at message level.

pub mod indexation;
pub mod milestone;
pub mod transaction;

pub use indexation::{IndexationPayload, INDEXATION_INDEX_MAX_BYTES};
pub use milestone::MilestonePayload;
pub use transaction::{
    Output, OutputKind, TransactionEssence, TransactionPayload, UnlockBlock, UtxoInput,
};

use serde::Serialize;

pub const PAYLOAD_TYPE_TRANSACTION: u32 = 0;
pub const PAYLOAD_TYPE_MILESTONE: u32 = 1;
pub const PAYLOAD_TYPE_INDEXATION: u32 = 2;

/// Payload carried by a message. Each variant exclusively owns its data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    Transaction(Box<TransactionPayload>),
    Milestone(Box<MilestonePayload>),
    Indexation(IndexationPayload),
    Unknown,
}
