//! Generic XML element tree
//!
//! GRD, GRDP and XTB files are mixed-content documents: message text is
//! interleaved with `<ph>` elements. The tree keeps text before the first
//! child (`text`) and text after each element (`tail`) separately, so that
//! placeholder tails can be rewritten on their own.

mod document;
mod reader;
mod writer;

pub use document::XmlElement;
pub use reader::{read_xml, parse_xml};
pub use writer::{serialize_element, inner_markup};
