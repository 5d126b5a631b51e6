//! Slotting of a page's blocks into rendering regions.
//!
//! Slot membership and presentation are decided independently: every block is
//! resolved with its index in the whole page, never its index within a slot.
//! Masonry relies on this since its column rhythm follows page positions.

use crate::resolver::resolve_block;
use pagecraft_model::{Block, LayoutId, PresentationType};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Masonry pages flow into this many columns.
pub const MASONRY_COLUMNS: u8 = 3;

/// Named region of an arranged page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotName {
    Main,
    Sidebar,
    Featured,
    Grid,
    Flow,
}

impl SlotName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Sidebar => "sidebar",
            Self::Featured => "featured",
            Self::Grid => "grid",
            Self::Flow => "flow",
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Container treatment of the arranged page as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum ContainerStyle {
    /// Vertical stack.
    Stack,
    /// Responsive multi-column grid.
    Grid,
    /// Single-column list.
    List,
    /// Fixed number of side-by-side columns.
    Columns { count: u8 },
    /// Sidebar on the left of the main region.
    SidebarLeft,
    /// Sidebar on the right of the main region.
    SidebarRight,
    /// Featured block above a grid.
    Hero,
    /// Column-balanced flow.
    Masonry { columns: u8 },
}

/// A block placed in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement<'a> {
    /// Position of the block in the page.
    pub index: usize,
    pub block: &'a Block,
    pub presentation: PresentationType,
    /// The item must not be split across flow columns.
    pub avoid_break: bool,
}

/// A named sub-sequence of the page's blocks, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot<'a> {
    pub name: SlotName,
    pub placements: Vec<Placement<'a>>,
}

impl<'a> Slot<'a> {
    fn new(name: SlotName, placements: Vec<Placement<'a>>) -> Self {
        Self { name, placements }
    }

    /// Page positions of the blocks in this slot.
    pub fn indices(&self) -> Vec<usize> {
        self.placements.iter().map(|p| p.index).collect()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// A page's blocks partitioned into slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arrangement<'a> {
    pub container: ContainerStyle,
    pub slots: Vec<Slot<'a>>,
}

impl<'a> Arrangement<'a> {
    /// Returns the slot with the given name, if this arrangement has one.
    pub fn slot(&self, name: SlotName) -> Option<&Slot<'a>> {
        self.slots.iter().find(|s| s.name == name)
    }

    /// Iterates every placement, slot by slot.
    pub fn placements(&self) -> impl Iterator<Item = &Placement<'a>> {
        self.slots.iter().flat_map(|s| s.placements.iter())
    }

    /// Whether the blocks were split across more than one region.
    pub fn is_split(&self) -> bool {
        self.slots.len() > 1
    }

    /// Presentation types in page order.
    pub fn presentations(&self) -> Vec<PresentationType> {
        let mut placed: Vec<_> = self.placements().map(|p| (p.index, p.presentation)).collect();
        placed.sort_by_key(|(index, _)| *index);
        placed.into_iter().map(|(_, presentation)| presentation).collect()
    }
}

/// Partitions `blocks` into slots for `layout`.
///
/// - `left-sidebar` with two or more blocks: `sidebar` = first block, `main` = rest
/// - `right-sidebar` with two or more blocks: `main` = all but last, `sidebar` = last
/// - `hero` with at least one block: `featured` = first block, `grid` = rest
/// - `masonry`: a single `flow` slot
/// - everything else, including split layouts with too few blocks: a single `main` slot
pub fn arrange<'a>(layout: &LayoutId, blocks: &'a [Block]) -> Arrangement<'a> {
    let total = blocks.len();
    let avoid_break = matches!(layout, LayoutId::Masonry);
    let place = |range: std::ops::Range<usize>| -> Vec<Placement<'a>> {
        blocks[range.clone()]
            .iter()
            .zip(range)
            .map(|(block, index)| Placement {
                index,
                block,
                presentation: resolve_block(layout, index, block, total),
                avoid_break,
            })
            .collect()
    };

    let arrangement = match layout {
        LayoutId::LeftSidebar if total >= 2 => Arrangement {
            container: ContainerStyle::SidebarLeft,
            slots: vec![
                Slot::new(SlotName::Sidebar, place(0..1)),
                Slot::new(SlotName::Main, place(1..total)),
            ],
        },
        LayoutId::RightSidebar if total >= 2 => Arrangement {
            container: ContainerStyle::SidebarRight,
            slots: vec![
                Slot::new(SlotName::Main, place(0..total - 1)),
                Slot::new(SlotName::Sidebar, place(total - 1..total)),
            ],
        },
        LayoutId::Hero if total >= 1 => Arrangement {
            container: ContainerStyle::Hero,
            slots: vec![
                Slot::new(SlotName::Featured, place(0..1)),
                Slot::new(SlotName::Grid, place(1..total)),
            ],
        },
        LayoutId::Masonry => Arrangement {
            container: ContainerStyle::Masonry { columns: MASONRY_COLUMNS },
            slots: vec![Slot::new(SlotName::Flow, place(0..total))],
        },
        other => Arrangement {
            container: single_slot_container(other),
            slots: vec![Slot::new(SlotName::Main, place(0..total))],
        },
    };

    debug!(
        layout = %layout,
        blocks = total,
        slots = arrangement.slots.len(),
        "Arranged page"
    );
    arrangement
}

fn single_slot_container(layout: &LayoutId) -> ContainerStyle {
    match layout {
        LayoutId::Grid => ContainerStyle::Grid,
        LayoutId::List => ContainerStyle::List,
        LayoutId::Columns2 => ContainerStyle::Columns { count: 2 },
        LayoutId::Columns3 => ContainerStyle::Columns { count: 3 },
        _ => ContainerStyle::Stack,
    }
}
