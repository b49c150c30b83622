pub mod code_fence;
pub mod tag;

pub use code_fence::{CodeFence, CodeFenceProcessor};
pub use tag::{SpanState, TagProcessor, TagSpan};
