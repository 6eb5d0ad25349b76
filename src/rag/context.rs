//! Context assembly from retrieved chunks

use crate::index::ScoredChunk;

/// Builds the prompt context block from retrieved chunks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextAssembler;

impl ContextAssembler {
    /// Chunk contents are joined with a blank line.
    const SEPARATOR: &'static str = "\n\n";

    /// Create a new context assembler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Join chunk contents in retrieval order.
    ///
    /// The index returns matches ranked best-first and that order is kept
    /// as-is; no score threshold or re-ranking is applied. Zero chunks
    /// produce an empty context.
    #[must_use]
    pub fn assemble(&self, chunks: &[ScoredChunk]) -> String {
        chunks
            .iter()
            .map(|chunk| chunk.content.as_str())
            .collect::<Vec<_>>()
            .join(Self::SEPARATOR)
    }
}
