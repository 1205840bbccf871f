//! Console collaborators for the `avl-tree` crate: random unique samples
//! and text tree rendering. Everything here is a stateless consumer of the
//! tree's public contract (`insert`, `remove`, `contains`, `size`, `root`).

pub mod render;
pub mod sample;
