//! # word-client
//!
//! Null-safe, disposable facade over the Word automation object model.
//!
//! Every type here owns exactly one native object reference through
//! [`automation_core::OwnedHandle`] and forwards its properties and
//! methods 1:1 to the server, converting values at the boundary. Optional
//! relationships (a range without a hyperlink, a missing style) are
//! `Option::None`, never a facade around a null reference.
//!
//! Entry point is [`Application::connect`], which takes the automation
//! [`Session`](automation_core::Session) explicitly:
//!
//! ```no_run
//! # fn main() -> automation_core::AutomationResult<()> {
//! # #[cfg(windows)] {
//! let session = automation_core::ComSession::new()?;
//! let word = word_client::Application::connect(&session)?;
//! let documents = word.documents().expect("Documents collection");
//! let document = documents.add()?;
//! # }
//! # Ok(())
//! # }
//! ```

mod application;
mod bookmark;
mod document;
mod enums;
mod font;
mod hyperlink;
mod paragraph;
mod range;
mod shading;
mod style;
mod table;

pub use application::Application;
pub use bookmark::{Bookmark, Bookmarks};
pub use document::{Document, Documents};
pub use enums::{
    BreakType, BuiltinStyle, CollapseDirection, ParagraphAlignment, SaveOptions, ShadingTexture,
    StyleType, Underline, WordColor,
};
pub use font::Font;
pub use hyperlink::{Hyperlink, Hyperlinks};
pub use paragraph::{Paragraph, Paragraphs};
pub use range::Range;
pub use shading::Shading;
pub use style::{Style, Styles};
pub use table::{Cell, Table, Tables};

/// Prog id of the Word automation server.
pub const PROG_ID: &str = "Word.Application";
