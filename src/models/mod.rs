pub mod collection_time;
pub mod coordinates;
pub mod record;
pub mod record_kind;

pub use collection_time::CollectionTime;
pub use coordinates::Coordinates;
pub use record::{Record, VLOG_VALUE};
pub use record_kind::RecordKind;
