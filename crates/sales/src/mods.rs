//! Extension points for the sales document forms.
//!
//! A mod can observe and mutate a document while a form is applied, take over
//! the rendering of any named field, and contribute extra fields of its own.
//! Mods are consulted in registration order; for rendering, the first mod that
//! returns markup for a field wins.

use std::sync::Arc;

use forgeerp_core::{DomainResult, User};

use crate::document::SalesDocument;
use crate::form::FormData;
use crate::i18n::Translator;

/// Capability set implemented by sales form mods.
pub trait SalesMod: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Runs before the built-in fields are copied from the form.
    fn apply_before(
        &self,
        _doc: &mut SalesDocument,
        _form: &FormData,
        _user: &User,
    ) -> DomainResult<()> {
        Ok(())
    }

    /// Runs after the built-in fields are copied from the form.
    fn apply(&self, _doc: &mut SalesDocument, _form: &FormData, _user: &User) -> DomainResult<()> {
        Ok(())
    }

    /// Markup for `field`, or `None` to let the next mod (or the built-in
    /// renderer) handle it.
    fn render_field(
        &self,
        _i18n: &dyn Translator,
        _doc: &SalesDocument,
        _field: &str,
    ) -> Option<String> {
        None
    }

    /// Names of extra fields this mod adds to the form.
    fn new_fields(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Ordered, append-only list of registered mods.
///
/// Build it once at start-up, then share it behind an `Arc`.
#[derive(Default, Clone)]
pub struct ModRegistry {
    mods: Vec<Arc<dyn SalesMod>>,
}

impl ModRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `m` after every mod registered so far.
    pub fn add_mod(&mut self, m: Arc<dyn SalesMod>) {
        tracing::info!(
            sales_mod = m.name(),
            position = self.mods.len(),
            "sales mod registered"
        );
        self.mods.push(m);
    }

    /// Builder-style [`ModRegistry::add_mod`].
    pub fn with_mod(mut self, m: Arc<dyn SalesMod>) -> Self {
        self.add_mod(m);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn SalesMod>> {
        self.mods.iter()
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }

    /// Ask each mod in order to render `field`; first `Some` wins.
    pub fn render_field(
        &self,
        i18n: &dyn Translator,
        doc: &SalesDocument,
        field: &str,
    ) -> Option<String> {
        self.mods.iter().find_map(|m| {
            let html = m.render_field(i18n, doc, field)?;
            tracing::trace!(sales_mod = m.name(), field, "field rendered by mod");
            Some(html)
        })
    }

    /// Extra field names contributed by all mods, deduplicated, first-seen order.
    pub fn new_fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = Vec::new();
        for m in &self.mods {
            for field in m.new_fields() {
                if !fields.contains(&field) {
                    fields.push(field);
                }
            }
        }
        fields
    }
}

impl core::fmt::Debug for ModRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.mods.iter().map(|m| m.name()))
            .finish()
    }
}
