//! Per-cell classification.
//!
//! Every tree cell renders with the same tile item; what distinguishes a
//! node from a connector is the display name alone. Connectors all carry a
//! blank single-space name regardless of shape; nodes carry a bolded title
//! with optional decoration around it.

use tree_schema::{GridCell, StyledText, PAGE_SLOTS, TREE_TILE_ITEM};

/// What a grid cell turned out to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Node,
    Connector,
    Empty,
}

/// Classify one grid cell. Pure function of the cell contents and slot.
pub fn classify_cell(cell: &GridCell, slot: u32) -> CellKind {
    if cell.item_kind != TREE_TILE_ITEM {
        return CellKind::Empty;
    }
    if is_connector_name(&cell.name) {
        return CellKind::Connector;
    }
    if slot < PAGE_SLOTS && matches_node_name(&cell.name) {
        return CellKind::Node;
    }
    CellKind::Empty
}

// Color and format are ignored, run boundaries are not: the marker is
// exactly one run whose text is a single space.
fn is_connector_name(name: &StyledText) -> bool {
    name.part_count() == 1 && name.parts()[0].text == " "
}

/// Node titles are an optional non-bold `"Unlock "` prefix, the bolded name
/// itself, and an optional trailing `" ability"` decoration.
pub(crate) fn matches_node_name(name: &StyledText) -> bool {
    let parts = name.parts();
    let mut idx = 0;
    if let Some(first) = parts.first() {
        if !first.style.bold && first.text == "Unlock " {
            idx = 1;
        }
    }
    let Some(title) = parts.get(idx) else {
        return false;
    };
    if !title.style.bold {
        return false;
    }
    parts[idx + 1..]
        .iter()
        .all(|part| part.style.bold || part.text == " ability")
}
