//! Writes the manifest and the planned template outputs to disk.
//!
//! - `operation`: What happens to a single output path
//! - `processor`: Rendering instructions into operations and applying them

pub mod operation;
pub mod processor;

pub use operation::EmitOperation;
pub use processor::Emitter;
