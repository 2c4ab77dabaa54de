//! Footer of the sales document entry form.
//!
//! Layout (three rows):
//! - actions: new line, product search, fast line input, line sorting;
//! - observations, extra fields contributed by mods, then the totals;
//! - delete (left) and save (right).
//!
//! Every named field is first offered to the registered mods; the built-in
//! renderer is only used when no mod claims it.

mod field;
mod widgets;

use std::sync::Arc;

use forgeerp_core::{DomainResult, User};

use crate::document::SalesDocument;
use crate::form::FormData;
use crate::i18n::Translator;
use crate::mods::ModRegistry;

pub use field::FooterField;
pub use widgets::NumberFormat;

const ACTION_ROW: [FooterField; 4] = [
    FooterField::NewLineBtn,
    FooterField::ProductBtn,
    FooterField::FastLineInput,
    FooterField::SortableBtn,
];

const TOTALS_ROW: [FooterField; 9] = [
    FooterField::NetBeforeDiscount,
    FooterField::DiscountPercent1,
    FooterField::DiscountPercent2,
    FooterField::Net,
    FooterField::TotalTax,
    FooterField::TotalSurcharge,
    FooterField::TotalWithholding,
    FooterField::TotalSupplied,
    FooterField::Total,
];

/// Renders the footer and applies its submitted values.
#[derive(Clone)]
pub struct SalesFooterHtml {
    mods: Arc<ModRegistry>,
    i18n: Arc<dyn Translator>,
    number_format: NumberFormat,
}

impl SalesFooterHtml {
    pub fn new(mods: Arc<ModRegistry>, i18n: Arc<dyn Translator>) -> Self {
        Self {
            mods,
            i18n,
            number_format: NumberFormat::default(),
        }
    }

    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    pub fn mods(&self) -> &ModRegistry {
        &self.mods
    }

    /// Copy the footer's submitted values into `doc`.
    ///
    /// Order: every mod's `apply_before`, then the built-in fields, then every
    /// mod's `apply`. A discount that is missing or not a number keeps the
    /// stored value. The first mod error aborts the sequence.
    pub fn apply(&self, doc: &mut SalesDocument, form: &FormData, user: &User) -> DomainResult<()> {
        for m in self.mods.iter() {
            m.apply_before(doc, form, user)?;
        }

        doc.discount_percent_1 =
            submitted_number(form, FooterField::DiscountPercent1, doc.discount_percent_1);
        doc.discount_percent_2 =
            submitted_number(form, FooterField::DiscountPercent2, doc.discount_percent_2);
        if let Some(observations) = form.get(FooterField::Observations.as_str()) {
            doc.observations = observations.to_string();
        }

        for m in self.mods.iter() {
            m.apply(doc, form, user)?;
        }

        tracing::debug!(
            user = %user.nick,
            customer = %doc.customer_code,
            dtopor1 = doc.discount_percent_1,
            dtopor2 = doc.discount_percent_2,
            "sales footer applied"
        );
        Ok(())
    }

    /// Footer markup, or an empty string when the document has no customer.
    pub fn render(&self, doc: &SalesDocument) -> String {
        if !doc.has_customer() {
            return String::new();
        }

        let mut html = String::from(r#"<div class="container-fluid mt-3">"#);

        html.push_str(r#"<div class="form-row">"#);
        for field in ACTION_ROW {
            self.push_field(&mut html, doc, field);
        }
        html.push_str("</div>");

        html.push_str(r#"<div class="form-row">"#);
        self.push_field(&mut html, doc, FooterField::Observations);
        html.push_str(&self.render_new_fields(doc));
        for field in TOTALS_ROW {
            self.push_field(&mut html, doc, field);
        }
        html.push_str("</div>");

        html.push_str(r#"<div class="form-row"><div class="col-sm">"#);
        self.push_field(&mut html, doc, FooterField::DeleteBtn);
        html.push_str(r#"</div><div class="col-sm text-right">"#);
        self.push_field(&mut html, doc, FooterField::SaveBtn);
        html.push_str("</div></div>");

        html.push_str("</div>");
        html
    }

    /// Markup for the field named `field`: the first mod that claims it, else
    /// the built-in renderer. Unknown names render nothing (`None`).
    pub fn render_field(&self, doc: &SalesDocument, field: &str) -> Option<String> {
        if let Some(html) = self.mods.render_field(self.i18n.as_ref(), doc, field) {
            return Some(html);
        }

        let builtin = FooterField::from_name(field)?;
        Some(widgets::render(builtin, self.i18n.as_ref(), doc, &self.number_format))
    }

    /// Markup for every extra field contributed by mods.
    ///
    /// Extra fields are rendered by mods only; a field no mod renders is
    /// skipped.
    pub fn render_new_fields(&self, doc: &SalesDocument) -> String {
        let mut html = String::new();
        for field in self.mods.new_fields() {
            match self.mods.render_field(self.i18n.as_ref(), doc, &field) {
                Some(fragment) => html.push_str(&fragment),
                None => tracing::trace!(field = %field, "extra field has no renderer"),
            }
        }
        html
    }

    fn push_field(&self, html: &mut String, doc: &SalesDocument, field: FooterField) {
        if let Some(fragment) = self.render_field(doc, field.as_str()) {
            html.push_str(&fragment);
        }
    }
}

impl core::fmt::Debug for SalesFooterHtml {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SalesFooterHtml")
            .field("mods", &self.mods)
            .field("number_format", &self.number_format)
            .finish_non_exhaustive()
    }
}

fn submitted_number(form: &FormData, field: FooterField, current: f64) -> f64 {
    let key = field.as_str();
    match form.number(key) {
        Some(value) => value,
        None => {
            if form.contains(key) {
                tracing::debug!(field = key, "ignoring non-numeric value, keeping stored one");
            }
            current
        }
    }
}
