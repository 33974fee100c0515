//! Markdown rendering for plans, option listings and status messages.
//!
//! Everything here implements [`std::fmt::Display`] and produces markdown,
//! which the CLI renders through its terminal skin and the MCP server returns
//! as text.
//!
//! - [`document`]: the plan itself ([`RpmDocument`], `Display for RpmOutput`)
//! - [`catalog`]: form options ([`OptionCatalog`])
//! - [`status`]: operation feedback ([`OperationStatus`])
//! - [`datetime`]: Indonesian calendar dates ([`LocalDate`])

pub mod catalog;
pub mod datetime;
pub mod document;
pub mod status;

pub use catalog::OptionCatalog;
pub use datetime::LocalDate;
pub use document::RpmDocument;
pub use status::OperationStatus;
