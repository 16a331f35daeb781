//! Shared fixtures: styled-text builders shaped like the tree UI's output.

use tree_schema::{GridCell, PartStyle, StyledPart, StyledText, TextColor, TREE_TILE_ITEM};

pub fn gray(text: &str) -> StyledPart {
    StyledPart::new(text, PartStyle::colored(TextColor::Gray))
}

pub fn bold(text: &str) -> StyledPart {
    StyledPart::new(text, PartStyle::bold_colored(TextColor::Aqua))
}

/// Title of an unlockable node as the UI renders it.
pub fn unlockable_title(name: &str) -> StyledText {
    StyledText::from_parts(vec![gray("Unlock "), bold(name), gray(" ability")])
}

/// Title of a locked node: a single bolded run.
pub fn locked_title(name: &str) -> StyledText {
    StyledText::from_parts(vec![StyledPart::new(
        name,
        PartStyle::bold_colored(TextColor::Gray),
    )])
}

/// The blank single-space name every connector tile carries.
pub fn connector_name() -> StyledText {
    StyledText::from_parts(vec![StyledPart::new(
        " ",
        PartStyle::colored(TextColor::DarkGray),
    )])
}

pub fn line(text: &str) -> StyledText {
    StyledText::from_plain(text)
}

pub fn node_cell(name: StyledText, lore: Vec<StyledText>, variant: i32) -> GridCell {
    GridCell {
        item_kind: TREE_TILE_ITEM,
        variant,
        name,
        lore,
    }
}

pub fn connector_cell(variant: i32) -> GridCell {
    GridCell {
        item_kind: TREE_TILE_ITEM,
        variant,
        name: connector_name(),
        lore: vec![],
    }
}
