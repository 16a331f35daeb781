//! Node decoding.
//!
//! Turns a node cell's styled title and lore into a [`SkillNode`] plus its
//! unlock state. The title's run structure decides the tentative state
//! (locked vs unlockable); the lore is then scanned line by line against an
//! ordered set of matchers, first match wins per line. Unmatched lines are
//! flavor text and ignored.

use tracing::debug;

use tree_schema::{
    ArchetypeRequirement, GridCell, ItemInfo, NodeState, SkillNode, StyledText, TreeLocation,
};

const BLOCKED_LINE: &str = "Blocked by another ability";
const UNLOCKED_LINE: &str = "You already unlocked this ability";

/// Decode one node cell into a [`SkillNode`] and its [`NodeState`].
///
/// `id` is assigned by the caller and unique within one tree snapshot.
/// The node's `connections` list is left empty for the assembler to fill.
pub fn decode_node(cell: &GridCell, page: u32, slot: u32, id: u32) -> (SkillNode, NodeState) {
    let mut state;
    let actual_name;
    if cell.name.part_count() == 1 {
        state = NodeState::Locked;
        actual_name = cell.name.clone();
    } else {
        // The bolded run is the actual name; the rest is decoration.
        state = NodeState::Unlockable;
        actual_name = cell.name.retain_bold();
    }

    let mut lore: &[StyledText] = &cell.lore;
    if state == NodeState::Unlockable {
        // Unlockable lore always ends with a blank line plus the "click
        // here to unlock" call to action.
        lore = &lore[..lore.len().saturating_sub(2)];
    }
    // TODO: footers of the other states are not trimmed; their lines fall
    // through the matchers below as flavor text.

    let mut cost = 0;
    let mut blocks = Vec::new();
    let mut required_ability = None;
    let mut required_archetype = None;
    let mut archetype = None;

    for line in lore {
        let plain = line.plain();

        if let Some(value) = match_point_cost(&plain) {
            cost = value;
            continue;
        }
        if let Some(name) = match_blocks_ability(&plain) {
            blocks.push(name.to_string());
            continue;
        }
        if let Some(name) = match_required_ability(&plain) {
            required_ability = Some(name.to_string());
            continue;
        }
        if let Some(requirement) = match_required_archetype(&plain) {
            required_archetype = Some(requirement);
            continue;
        }
        if let Some(name) = match_archetype(line, &plain) {
            archetype = Some(name.to_string());
            continue;
        }
        if plain == BLOCKED_LINE {
            state = NodeState::Blocked;
            continue;
        }
        if plain == UNLOCKED_LINE {
            state = NodeState::Unlocked;
            continue;
        }
    }

    let item_info = ItemInfo {
        kind: cell.item_kind,
        // Store the Locked-baseline code so the same art compares equal
        // across unlock states.
        variant: state.normalize(cell.variant),
    };

    let node = SkillNode {
        id,
        name: actual_name.plain(),
        formatted_name: actual_name.formatted(),
        description: lore.iter().map(StyledText::plain).collect(),
        item_info,
        cost,
        blocks,
        required_ability,
        required_archetype,
        archetype,
        location: TreeLocation::new(page, slot),
        connections: Vec::new(),
    };

    debug!(id, name = %node.name, ?state, page, slot, "decoded ability node");

    (node, state)
}

// Stat lines open with a single icon glyph and a space; the icon varies per
// class, so strip it by shape rather than by value.
fn strip_icon(plain: &str) -> &str {
    match plain.char_indices().nth(1) {
        Some((idx, ' ')) => &plain[idx + 1..],
        _ => plain,
    }
}

fn match_point_cost(plain: &str) -> Option<u32> {
    strip_icon(plain)
        .strip_prefix("Ability Points: ")?
        .parse()
        .ok()
}

fn match_blocks_ability(plain: &str) -> Option<&str> {
    plain.strip_prefix("- ")
}

fn match_required_ability(plain: &str) -> Option<&str> {
    strip_icon(plain).strip_prefix("Required Ability: ")
}

// "Min <name> Archetype: <current>/<required>"; current progress is
// deliberately discarded.
fn match_required_archetype(plain: &str) -> Option<ArchetypeRequirement> {
    let rest = strip_icon(plain).strip_prefix("Min ")?;
    let (name, counts) = rest.split_once(" Archetype: ")?;
    let (_current, required) = counts.split_once('/')?;
    Some(ArchetypeRequirement {
        name: name.to_string(),
        required: required.parse().ok()?,
    })
}

// Membership header is a fully bolded "<name> Archetype" line.
fn match_archetype<'a>(line: &StyledText, plain: &'a str) -> Option<&'a str> {
    if line.parts().iter().any(|part| !part.style.bold) {
        return None;
    }
    plain.strip_suffix(" Archetype")
}
