//! Decoding core for the ability-tree scanner.
//!
//! Consumes one grid cell at a time: [`classify_cell`] decides whether a
//! cell is a node, a connector tile, or noise; [`decode_node`] turns a node
//! cell's styled title and lore into a [`tree_schema::SkillNode`] plus its
//! unlock state; and [`ConnectorShape`] resolves connector tiles, including
//! merging two partial shapes observed at the same grid position. The grid
//! iteration itself and node-to-node adjacency linking belong to the
//! external assembler.

mod classifier;
mod connection;
mod decoder;

pub use classifier::{classify_cell, CellKind};
pub use connection::{ConnectionError, ConnectorShape, DirectionMask};
pub use decoder::decode_node;
