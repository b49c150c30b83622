use super::queue::BlockQueue;
use super::types::Block;
use crate::markup::Element;
use crate::parsing::error::ParseError;
use crate::parsing::pipeline::ParseContext;

/// A block-level extension registered on the [`Pipeline`](crate::parsing::Pipeline).
///
/// The pipeline offers the next block to each processor in descending
/// priority. `consume` sees the queue with that block still at the front; it
/// may take further blocks and push leftovers back. Returning `Ok(false)`
/// means the processor declined and must leave the queue as it found it.
pub trait BlockProcessor: Send + Sync {
    fn name(&self) -> &'static str;

    fn accepts(&self, block: &Block) -> bool;

    fn consume(
        &self,
        cx: &mut ParseContext<'_>,
        parent: &mut Element,
        blocks: &mut BlockQueue,
    ) -> Result<bool, ParseError>;
}
