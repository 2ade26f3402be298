/// Multi-canvas allocation over a shared draining catalog
pub mod allocation;
/// Random pool sampling from the available catalog
pub mod pool;
/// Bitset-backed working copy of the catalog
pub mod remaining;
/// Hero plus greedy-fill selection for a single canvas row
pub mod selection;
