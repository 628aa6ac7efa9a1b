pub mod resource_id;
pub mod statement;

pub use resource_id::ResourceId;
pub use statement::{Object, ObjectKind, Statement, StatementId, UNASSIGNED_ID};
