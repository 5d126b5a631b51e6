//! Page and block model for Pagecraft.
//!
//! Defines the value types every other Pagecraft crate depends on:
//! - [`Block`] and [`Document`]: a titled content unit and its attachments
//! - [`PresentationType`]: the closed set of visual treatments for a block
//! - [`LayoutId`], [`ThemeId`] and [`PageConfig`]: how a page is laid out
//! - [`Page`]: a path-addressable, ordered list of blocks
//!
//! The stored format is JSON: the block list is one array (see
//! [`encode_blocks`] / [`decode_blocks`]) and the page config a separate
//! `{layout, theme}` object. Decoding is lenient; a page with corrupt content
//! still opens as an empty, editable page.

mod block;
mod codec;
mod layout;
mod page;
mod slug;

pub use block::{Block, Document, PresentationType, UnknownPresentationType};
pub use codec::{decode_blocks, encode_blocks};
pub use layout::{LayoutId, PageConfig, ThemeId};
pub use page::Page;
pub use slug::slugify;
