//! Shared data model for the ability-tree decoding core.
//!
//! Everything here is a plain value type: the styled-text runs handed over
//! by the grid scanner, the per-cell input record, and the decoded
//! [`SkillNode`] the assembler consumes. No decoding logic lives in this
//! crate; see `tree_core` for the classifier, decoder and connection
//! catalog.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Number of slots in one inventory page of the tree UI.
pub const PAGE_SLOTS: u32 = 54;

/// Width of one inventory row; slots are laid out row-major.
pub const ROW_WIDTH: u32 = 9;

/// Item registry id that every ability-tree tile renders with. Nodes and
/// connectors share the same item and differ only in name and variant code.
pub const TREE_TILE_ITEM: ItemKind = ItemKind(716);

/// Equality-comparable token identifying an item kind in the game's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKind(pub u32);

/// The sixteen legacy text colors the game UI can attach to a styled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl TextColor {
    /// Legacy single-character code used when re-rendering formatted text.
    pub fn code(self) -> char {
        match self {
            TextColor::Black => '0',
            TextColor::DarkBlue => '1',
            TextColor::DarkGreen => '2',
            TextColor::DarkAqua => '3',
            TextColor::DarkRed => '4',
            TextColor::DarkPurple => '5',
            TextColor::Gold => '6',
            TextColor::Gray => '7',
            TextColor::DarkGray => '8',
            TextColor::Blue => '9',
            TextColor::Green => 'a',
            TextColor::Aqua => 'b',
            TextColor::Red => 'c',
            TextColor::LightPurple => 'd',
            TextColor::Yellow => 'e',
            TextColor::White => 'f',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        let color = match code.to_ascii_lowercase() {
            '0' => TextColor::Black,
            '1' => TextColor::DarkBlue,
            '2' => TextColor::DarkGreen,
            '3' => TextColor::DarkAqua,
            '4' => TextColor::DarkRed,
            '5' => TextColor::DarkPurple,
            '6' => TextColor::Gold,
            '7' => TextColor::Gray,
            '8' => TextColor::DarkGray,
            '9' => TextColor::Blue,
            'a' => TextColor::Green,
            'b' => TextColor::Aqua,
            'c' => TextColor::Red,
            'd' => TextColor::LightPurple,
            'e' => TextColor::Yellow,
            'f' => TextColor::White,
            _ => return None,
        };
        Some(color)
    }
}

/// Style attributes of one styled run. The scanner guarantees at least bold
/// and color; other decorations are not needed by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PartStyle {
    pub bold: bool,
    pub color: Option<TextColor>,
}

impl PartStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn bold() -> Self {
        Self {
            bold: true,
            color: None,
        }
    }

    pub fn colored(color: TextColor) -> Self {
        Self {
            bold: false,
            color: Some(color),
        }
    }

    pub fn bold_colored(color: TextColor) -> Self {
        Self {
            bold: true,
            color: Some(color),
        }
    }
}

/// One run of a styled-text value: a text fragment with its resolved style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyledPart {
    pub text: String,
    pub style: PartStyle,
}

impl StyledPart {
    pub fn new(text: impl Into<String>, style: PartStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Ordered sequence of styled runs, as exposed by the game's inventory UI
/// for item names and lore lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StyledText {
    parts: Vec<StyledPart>,
}

impl StyledText {
    pub fn from_parts(parts: Vec<StyledPart>) -> Self {
        Self { parts }
    }

    /// A single unstyled run.
    pub fn from_plain(text: impl Into<String>) -> Self {
        Self {
            parts: vec![StyledPart::new(text, PartStyle::plain())],
        }
    }

    pub fn parts(&self) -> &[StyledPart] {
        &self.parts
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|part| part.text.is_empty())
    }

    /// Concatenated text with all styling stripped.
    pub fn plain(&self) -> String {
        self.parts.iter().map(|part| part.text.as_str()).collect()
    }

    /// Deterministic re-rendering with legacy `§` codes: color code, then
    /// bold code, then the run's text.
    pub fn formatted(&self) -> String {
        let mut out = String::new();
        for part in &self.parts {
            if let Some(color) = part.style.color {
                out.push('§');
                out.push(color.code());
            }
            if part.style.bold {
                out.push_str("§l");
            }
            out.push_str(&part.text);
        }
        out
    }

    /// Keep only the bold runs. Used to recover a node's actual name from a
    /// decorated title, where the non-bold runs are prefix/suffix dressing.
    pub fn retain_bold(&self) -> StyledText {
        StyledText {
            parts: self
                .parts
                .iter()
                .filter(|part| part.style.bold)
                .cloned()
                .collect(),
        }
    }
}

/// Raw contents of one grid cell as supplied by the external grid scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub item_kind: ItemKind,
    /// Raw variant/damage code; for node cells this also encodes the unlock
    /// state as an offset (see [`NodeState`]).
    pub variant: i32,
    pub name: StyledText,
    pub lore: Vec<StyledText>,
}

/// Position of a cell in the paged tree UI. Immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeLocation {
    pub page: u32,
    pub slot: u32,
}

impl TreeLocation {
    pub fn new(page: u32, slot: u32) -> Self {
        Self { page, slot }
    }

    pub fn row(self) -> u32 {
        self.slot / ROW_WIDTH
    }

    pub fn col(self) -> u32 {
        self.slot % ROW_WIDTH
    }
}

/// Item identity of a decoded node: the tile item kind plus the variant
/// code normalized back to the `Locked` baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemInfo {
    pub kind: ItemKind,
    pub variant: i32,
}

/// Archetype gate on a node: the named archetype must have at least
/// `required` points invested before the node can be unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeRequirement {
    pub name: String,
    pub required: u32,
}

/// Unlock status of a node at scan time. Derived once per decode and
/// returned alongside the node, never stored in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeState {
    Locked,
    Unlockable,
    Unlocked,
    Blocked,
}

impl NodeState {
    /// Offset the UI adds to a tile's baseline variant code to select this
    /// state's rendering.
    pub fn variant_offset(self) -> i32 {
        match self {
            NodeState::Locked => 0,
            NodeState::Unlockable => 1,
            NodeState::Unlocked => 2,
            NodeState::Blocked => 3,
        }
    }

    /// Apply this state's offset to a baseline (`Locked`) variant code.
    pub fn apply_to(self, base: i32) -> i32 {
        base + self.variant_offset()
    }

    /// Strip this state's offset from a raw variant code, recovering the
    /// baseline. Inverse of [`NodeState::apply_to`].
    pub fn normalize(self, raw: i32) -> i32 {
        raw - self.variant_offset()
    }
}

/// One decoded ability node.
///
/// `connections` is empty at decode time; the external tree assembler
/// appends adjacent node ids once every node of the snapshot is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillNode {
    pub id: u32,
    pub name: String,
    pub formatted_name: String,
    pub description: Vec<String>,
    pub item_info: ItemInfo,
    pub cost: u32,
    pub blocks: Vec<String>,
    pub required_ability: Option<String>,
    pub required_archetype: Option<ArchetypeRequirement>,
    pub archetype: Option<String>,
    pub location: TreeLocation,
    pub connections: Vec<u32>,
}

// Identity is id + name + location; attribute drift (cost, description)
// must not break equality between scans.
impl PartialEq for SkillNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.location == other.location
    }
}

impl Eq for SkillNode {}

impl Hash for SkillNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.location.hash(state);
    }
}
