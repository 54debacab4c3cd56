#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Run one full scan pass over the document.
    RunScan,
    /// Clear every processed marker so the next scan re-evaluates all nodes.
    ResetProcessed,
}
