//! # excel-client
//!
//! Null-safe, disposable facade over the Excel automation object model.
//!
//! Every type here owns exactly one native object reference through
//! [`automation_core::OwnedHandle`] and forwards its properties and
//! methods 1:1 to the server, converting values at the boundary. Optional
//! relationships (a range without a hyperlink, a missing worksheet) are
//! `Option::None`, never a facade around a null reference.
//!
//! Entry point is [`Application::connect`], which takes the automation
//! [`Session`](automation_core::Session) explicitly:
//!
//! ```no_run
//! # fn main() -> automation_core::AutomationResult<()> {
//! # #[cfg(windows)] {
//! let session = automation_core::ComSession::new()?;
//! let excel = excel_client::Application::connect(&session)?;
//! let workbooks = excel.workbooks().expect("Workbooks collection");
//! let workbook = workbooks.add()?;
//! # }
//! # Ok(())
//! # }
//! ```

mod application;
mod borders;
mod enums;
mod font;
mod hyperlink;
mod interior;
mod range;
mod shape;
mod workbook;
mod worksheet;

pub use application::Application;
pub use borders::{Border, Borders};
pub use enums::{
    BorderIndex, BorderWeight, HAlign, InteriorPattern, LineStyle, ShapeType, SheetVisibility,
    UnderlineStyle, VAlign,
};
pub use font::Font;
pub use hyperlink::{Hyperlink, Hyperlinks};
pub use interior::Interior;
pub use range::Range;
pub use shape::{Shape, Shapes};
pub use workbook::{Workbook, Workbooks};
pub use worksheet::{Worksheet, Worksheets};

/// Prog id of the Excel automation server.
pub const PROG_ID: &str = "Excel.Application";
