//! Drives the core the way the external assembler does: walk a page of
//! cells, classify each one, decode nodes, and accumulate connector shapes
//! per slot by merging repeated observations.

mod common;

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use common::{connector_cell, line, locked_title, node_cell, unlockable_title};
use tree_core::{classify_cell, decode_node, CellKind, ConnectorShape};
use tree_schema::{GridCell, ItemKind, NodeState, SkillNode, StyledText};

fn scan_page(
    page: u32,
    cells: &[(u32, GridCell)],
) -> Result<(Vec<(SkillNode, NodeState)>, HashMap<u32, ConnectorShape>)> {
    let mut nodes = Vec::new();
    let mut connectors: HashMap<u32, ConnectorShape> = HashMap::new();
    let mut next_id = 0;

    for (slot, cell) in cells {
        match classify_cell(cell, *slot) {
            CellKind::Node => {
                let id = next_id;
                next_id += 1;
                nodes.push(decode_node(cell, page, *slot, id));
            }
            CellKind::Connector => {
                let (shape, _) = ConnectorShape::from_code(cell.variant)
                    .ok_or_else(|| anyhow!("unknown connector code {}", cell.variant))?;
                let resolved = match connectors.get(slot) {
                    Some(existing) => ConnectorShape::merge(*existing, shape)
                        .with_context(|| format!("merging connectors at slot {slot}"))?,
                    None => shape,
                };
                connectors.insert(*slot, resolved);
            }
            CellKind::Empty => {}
        }
    }

    Ok((nodes, connectors))
}

#[test]
fn page_scan_assembles_nodes_and_connectors() -> Result<()> {
    let cells = vec![
        (
            4,
            node_cell(
                locked_title("Bash"),
                vec![line("✦ Ability Points: 1")],
                41,
            ),
        ),
        // Vertical segment between Bash and Haste, lit both ways.
        (13, connector_cell(42)),
        (
            22,
            node_cell(
                unlockable_title("Haste"),
                vec![
                    line("✦ Ability Points: 3"),
                    line(""),
                    line("Click here to unlock!"),
                ],
                101,
            ),
        ),
        // Crossing: a lit vertical and a lit horizontal share slot 31.
        (31, connector_cell(42)),
        (31, connector_cell(44)),
        // Non-tree item in the page border; skipped.
        (
            45,
            GridCell {
                item_kind: ItemKind(1),
                variant: 0,
                name: StyledText::from_plain("Next Page"),
                lore: vec![],
            },
        ),
    ];

    let (nodes, connectors) = scan_page(0, &cells)?;

    assert_eq!(nodes.len(), 2);
    let (bash, bash_state) = &nodes[0];
    assert_eq!(bash.name, "Bash");
    assert_eq!(*bash_state, NodeState::Locked);
    let (haste, haste_state) = &nodes[1];
    assert_eq!(haste.name, "Haste");
    assert_eq!(*haste_state, NodeState::Unlockable);
    assert_eq!(haste.item_info.variant, 100);

    assert_eq!(connectors.get(&13), Some(&ConnectorShape::Vertical));
    assert_eq!(connectors.get(&31), Some(&ConnectorShape::FourWay));
    assert!(!connectors.contains_key(&45));

    Ok(())
}

#[test]
fn desynced_connector_pair_surfaces_the_merge_error() {
    let cells = vec![
        // TurnDownRight and Vertical cannot legally share a cell; a scan
        // desync is the only way to observe this.
        (31, connector_cell(39)),
        (31, connector_cell(41)),
    ];

    let err = scan_page(0, &cells).expect_err("incompatible shapes");
    let chain = format!("{err:#}");
    assert!(chain.contains("invalid connector combination"), "{chain}");
}
