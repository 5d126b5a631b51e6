//! Layout engine for Pagecraft pages.
//!
//! Everything here is a pure function of a layout and a block list:
//!
//! - **Resolver**: picks the [`PresentationType`] of one block from the layout,
//!   the block's position, and its explicit type
//! - **Arrangement**: partitions the whole block list into named slots
//!   (sidebar/main, featured/grid, masonry flow)
//! - **Starter**: the fixed block list a new page is seeded with
//!
//! The same page therefore always renders the same way.
//!
//! # Example
//!
//! ```
//! use pagecraft_layout::{arrange, SlotName};
//! use pagecraft_model::{Block, LayoutId, PresentationType};
//!
//! let blocks = vec![Block::new("A", ""), Block::new("B", ""), Block::new("C", "")];
//! let arrangement = arrange(&LayoutId::LeftSidebar, &blocks);
//!
//! let sidebar = arrangement.slot(SlotName::Sidebar).unwrap();
//! assert_eq!(sidebar.indices(), vec![0]);
//! assert_eq!(sidebar.placements[0].presentation, PresentationType::Column);
//! ```

pub mod arrangement;
pub mod resolver;
pub mod starter;

pub use arrangement::{arrange, Arrangement, ContainerStyle, Placement, Slot, SlotName};
pub use resolver::{resolve, resolve_block};
pub use starter::{new_block, starter_blocks, PLACEHOLDER_BODY};

pub use pagecraft_model::PresentationType;
