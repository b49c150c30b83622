//! # Block Processing
//!
//! Documents are cut into blank-line separated blocks and offered, one at a
//! time, to the registered block processors.
//!
//! ## Modules
//!
//! - **`types`**: `Block`, a paragraph-sized piece of raw text plus its separator
//! - **`queue`**: `split_blocks` and `BlockQueue` (cursor + re-insertion queue)
//! - **`processor`**: the `BlockProcessor` trait
//! - **`open`**: decides whether a fence or a tag opens first in a block
//! - **`kinds`**: the built-in processors (`CodeFenceProcessor`, `TagProcessor`)
//! - **`content`**: blank-line trimming shared by the processors
//!
//! ## Key Invariants
//!
//! - Fenced code is a raw zone: no tag or markdown parsing inside
//! - A fence beats a tag marker that starts later in the same block
//! - A processor that declines leaves the queue untouched

pub mod content;
pub mod kinds;
pub mod open;
pub mod processor;
pub mod queue;
pub mod types;

pub use processor::BlockProcessor;
pub use queue::{BlockQueue, split_blocks};
pub use types::Block;
