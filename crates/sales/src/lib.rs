//! Sales document forms.
//!
//! This crate renders and applies the footer of the sales document entry form
//! (totals, global discounts, observations and the primary actions) and hosts
//! the mod mechanism that lets extensions inject, override or extend footer
//! fields. It is pure domain/view logic: no IO, no HTTP, no storage.

pub mod document;
pub mod footer;
pub mod form;
pub mod html;
pub mod i18n;
pub mod mods;

pub use document::SalesDocument;
pub use footer::{FooterField, NumberFormat, SalesFooterHtml};
pub use form::FormData;
pub use i18n::{Catalog, CatalogError, KeyTranslator, Translator};
pub use mods::{ModRegistry, SalesMod};
