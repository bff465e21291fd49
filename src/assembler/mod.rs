//! Result assembly subsystem
//!
//! Given the surviving candidate set, fetches the full entity projection
//! exactly once per identifier and applies sort and pagination. Sorting
//! and windowing happen only after the full candidate set is known —
//! never on relation-expanded rows, because there are none.

mod assemble;
mod result;

pub use assemble::ResultAssembler;
pub use result::{ResultEntity, ResultStream};
