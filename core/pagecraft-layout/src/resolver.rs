//! Presentation type resolution.

use pagecraft_model::{Block, LayoutId, PresentationType};

/// Picks the presentation type of the block at `index` in a page of `total`
/// blocks laid out with `layout`.
///
/// An explicit type always wins. Otherwise the layout decides:
///
/// | layout | rule |
/// |---|---|
/// | `hero` | first block `Block`, the rest `Card` |
/// | `columns-2`, `columns-3` | `Column` |
/// | `left-sidebar` | first block `Column`, the rest `Block` |
/// | `right-sidebar` | first and last block `Column`, the rest `Block` |
/// | `grid` | `Card` |
/// | `list` | `Block` |
/// | `masonry` | every third block from the first is `Column`, the rest `Card` |
/// | anything else | `Block` |
pub fn resolve(
    layout: &LayoutId,
    index: usize,
    explicit: Option<PresentationType>,
    total: usize,
) -> PresentationType {
    if let Some(presentation) = explicit {
        return presentation;
    }

    match layout {
        LayoutId::Hero if index == 0 => PresentationType::Block,
        LayoutId::Hero => PresentationType::Card,
        LayoutId::Columns2 | LayoutId::Columns3 => PresentationType::Column,
        LayoutId::LeftSidebar if index == 0 => PresentationType::Column,
        LayoutId::LeftSidebar => PresentationType::Block,
        LayoutId::RightSidebar if index == 0 || Some(index) == total.checked_sub(1) => {
            PresentationType::Column
        }
        LayoutId::RightSidebar => PresentationType::Block,
        LayoutId::Grid => PresentationType::Card,
        LayoutId::List => PresentationType::Block,
        LayoutId::Masonry if index % 3 == 0 => PresentationType::Column,
        LayoutId::Masonry => PresentationType::Card,
        LayoutId::Standard | LayoutId::Other(_) => PresentationType::Block,
    }
}

/// [`resolve`] for a block, reading its explicit type.
pub fn resolve_block(
    layout: &LayoutId,
    index: usize,
    block: &Block,
    total: usize,
) -> PresentationType {
    resolve(layout, index, block.explicit_type, total)
}
