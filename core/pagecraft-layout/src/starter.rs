//! Starter content for new pages and new blocks.

use pagecraft_model::{Block, LayoutId, PresentationType};

/// Body given to freshly added blocks.
pub const PLACEHOLDER_BODY: &str = "Add your content here...";

/// The block list a new page under `layout` is seeded with.
///
/// Starter blocks carry no explicit type, so they follow the layout.
pub fn starter_blocks(layout: &LayoutId) -> Vec<Block> {
    let titled = |entries: &[(&str, &str)]| -> Vec<Block> {
        entries
            .iter()
            .map(|(title, body)| Block::new(*title, *body))
            .collect()
    };

    match layout {
        LayoutId::Grid => titled(&[
            ("Card 1", "Short summary for the first card."),
            ("Card 2", "Short summary for the second card."),
            ("Card 3", "Short summary for the third card."),
        ]),
        LayoutId::List => titled(&[
            ("First Item", "Describe the first item."),
            ("Second Item", "Describe the second item."),
            ("Third Item", "Describe the third item."),
        ]),
        LayoutId::Columns2 => titled(&[
            ("Left Column", "Content for the left column."),
            ("Right Column", "Content for the right column."),
        ]),
        LayoutId::Columns3 => titled(&[
            ("Left Column", "Content for the left column."),
            ("Middle Column", "Content for the middle column."),
            ("Right Column", "Content for the right column."),
        ]),
        LayoutId::LeftSidebar => titled(&[
            ("Sidebar", "Quick links and notes."),
            ("Main Content", "The main content of the page."),
        ]),
        LayoutId::RightSidebar => titled(&[
            ("Main Content", "The main content of the page."),
            ("Sidebar", "Quick links and notes."),
        ]),
        LayoutId::Hero => titled(&[
            ("Featured", "A headline announcement for this page."),
            ("Content", "Supporting content below the featured section."),
        ]),
        LayoutId::Masonry => (1..=6)
            .map(|n| Block::new(format!("Item {n}"), "A short note."))
            .collect(),
        LayoutId::Standard | LayoutId::Other(_) => titled(&[(
            "Welcome",
            "Welcome to this page. Edit this block to add your content.",
        )]),
    }
}

/// A block appended by an administrator, pinned to `presentation`.
pub fn new_block(presentation: PresentationType) -> Block {
    Block::with_type(
        format!("New {}", presentation.label()),
        PLACEHOLDER_BODY,
        presentation,
    )
}
