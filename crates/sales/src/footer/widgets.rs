//! Built-in renderers for the footer fields.
//!
//! Every widget that triggers a form action calls back into one of the
//! entry form's JavaScript handlers.

use crate::document::SalesDocument;
use crate::html::escape;
use crate::i18n::Translator;

use super::field::FooterField;

/// Submits the form without waiting (new line).
const JS_ACTION: &str = "salesFormAction";
/// Debounced submit, used while typing discounts.
const JS_ACTION_WAIT: &str = "salesFormActionWait";
/// Quick line entry by barcode or reference.
const JS_FAST_LINE: &str = "salesFastLine";
/// Save/delete of the whole document.
const JS_SAVE: &str = "salesFormSave";

/// How totals are printed in the read-only columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimals: usize,
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimals: 2,
            decimal_separator: '.',
        }
    }
}

impl NumberFormat {
    pub fn format(&self, value: f64) -> String {
        let mut text = format!("{:.*}", self.decimals, value);
        // amounts that round to zero never show a sign
        if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
            text.remove(0);
        }
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }
}

pub(super) fn render(
    field: FooterField,
    i18n: &dyn Translator,
    doc: &SalesDocument,
    number_format: &NumberFormat,
) -> String {
    match field {
        FooterField::NewLineBtn => new_line_btn(i18n, doc),
        FooterField::ProductBtn => product_btn(i18n, doc),
        FooterField::FastLineInput => fast_line_input(i18n, doc),
        FooterField::SortableBtn => sortable_btn(i18n, doc),
        FooterField::Observations => observations(i18n, doc),
        FooterField::NetBeforeDiscount => {
            if doc.has_global_discount() {
                column(i18n, doc.net_before_discount, "subtotal", true, number_format)
            } else {
                String::new()
            }
        }
        FooterField::DiscountPercent1 => {
            discount(i18n, doc, field, doc.discount_percent_1, "global-dto")
        }
        FooterField::DiscountPercent2 => {
            if doc.has_global_discount() {
                discount(i18n, doc, field, doc.discount_percent_2, "global-dto-2")
            } else {
                hidden(field, doc.discount_percent_2)
            }
        }
        FooterField::Net => column(i18n, doc.net, "net", true, number_format),
        FooterField::TotalTax => column(i18n, doc.total_tax, "taxes", true, number_format),
        FooterField::TotalSurcharge => column(i18n, doc.total_surcharge, "re", true, number_format),
        FooterField::TotalWithholding => {
            column(i18n, doc.total_withholding, "irpf", true, number_format)
        }
        FooterField::TotalSupplied => {
            column(i18n, doc.total_supplied, "supplied-amount", true, number_format)
        }
        FooterField::Total => column(i18n, doc.total, "total", true, number_format),
        FooterField::DeleteBtn => delete_btn(i18n, doc),
        FooterField::SaveBtn => save_btn(i18n, doc),
    }
}

fn label(i18n: &dyn Translator, key: &str) -> String {
    escape(&i18n.trans(key))
}

fn disabled(doc: &SalesDocument) -> &'static str {
    if doc.editable { "" } else { r#" disabled="""# }
}

/// Read-only total. With `auto_hide`, zero amounts render nothing.
fn column(
    i18n: &dyn Translator,
    value: f64,
    label_key: &str,
    auto_hide: bool,
    number_format: &NumberFormat,
) -> String {
    if auto_hide && value == 0.0 {
        return String::new();
    }

    format!(
        r##"<div class="col-sm"><div class="form-group">{}<input type="text" value="{}" class="form-control" disabled=""/></div></div>"##,
        label(i18n, label_key),
        number_format.format(value),
    )
}

fn discount(
    i18n: &dyn Translator,
    doc: &SalesDocument,
    field: FooterField,
    value: f64,
    label_key: &str,
) -> String {
    format!(
        r##"<div class="col-sm-2 col-md"><div class="form-group">{label}<div class="input-group"><div class="input-group-prepend"><span class="input-group-text"><i class="fas fa-percentage"></i></span></div><input type="number" name="{name}" value="{value}" class="form-control" step="any" onkeyup="return {js}('recalculate', '0', event);"{disabled}/></div></div></div>"##,
        label = label(i18n, label_key),
        name = field.as_str(),
        value = value,
        js = JS_ACTION_WAIT,
        disabled = disabled(doc),
    )
}

/// Keeps the value in the form when the widget is not shown.
fn hidden(field: FooterField, value: f64) -> String {
    format!(r#"<input type="hidden" name="{}" value="{}"/>"#, field.as_str(), value)
}

fn fast_line_input(i18n: &dyn Translator, doc: &SalesDocument) -> String {
    if !doc.editable {
        return String::new();
    }

    format!(
        r##"<div class="col-sm"><div class="form-group"><input type="text" name="fastli" class="form-control" placeholder="{}" onkeyup="return {}(event);"/></div></div>"##,
        label(i18n, "barcode-or-reference"),
        JS_FAST_LINE,
    )
}

fn new_line_btn(i18n: &dyn Translator, doc: &SalesDocument) -> String {
    if !doc.editable {
        return String::new();
    }

    format!(
        r##"<div class="col-sm-auto"><a href="#" class="btn btn-success mb-3" onclick="return {}('new-line', '0');"><i class="fas fa-plus fa-fw"></i> {}</a></div>"##,
        JS_ACTION,
        label(i18n, "line"),
    )
}

fn product_btn(i18n: &dyn Translator, doc: &SalesDocument) -> String {
    if !doc.editable {
        return String::new();
    }

    format!(
        r##"<div class="col-sm-auto"><a href="#" class="btn btn-info mb-3" onclick="$('#findProductModal').modal(); $('#productModalInput').select(); return false;"><i class="fas fa-book fa-fw"></i> {}</a></div>"##,
        label(i18n, "products"),
    )
}

fn sortable_btn(i18n: &dyn Translator, doc: &SalesDocument) -> String {
    if !doc.editable {
        return String::new();
    }

    format!(
        r##"<div class="col-sm-auto"><button type="button" class="btn btn-light mb-3" id="sortableBtn"><i class="fas fa-arrows-alt-v fa-fw"></i> {}</button></div>"##,
        label(i18n, "move-lines"),
    )
}

fn observations(i18n: &dyn Translator, doc: &SalesDocument) -> String {
    format!(
        r##"<div class="col-sm-12"><div class="form-group">{}<textarea name="{}" class="form-control" rows="3"{}>{}</textarea></div></div>"##,
        label(i18n, "observations"),
        FooterField::Observations.as_str(),
        disabled(doc),
        escape(&doc.observations),
    )
}

/// Delete button plus its confirmation modal. Only for saved, editable documents.
fn delete_btn(i18n: &dyn Translator, doc: &SalesDocument) -> String {
    if !doc.is_persisted() || !doc.editable {
        return String::new();
    }

    let delete = label(i18n, "delete");
    format!(
        r##"<button type="button" class="btn btn-spin-action btn-danger mb-3" data-toggle="modal" data-target="#deleteDocModal"><i class="fas fa-trash-alt fa-fw"></i> {delete}</button><div class="modal fade" id="deleteDocModal" tabindex="-1" aria-hidden="true"><div class="modal-dialog"><div class="modal-content"><div class="modal-header"><h5 class="modal-title"></h5><button type="button" class="close" data-dismiss="modal" aria-label="Close"><span aria-hidden="true">&times;</span></button></div><div class="modal-body text-center"><i class="fas fa-trash-alt fa-3x"></i><h5 class="mt-3 mb-1">{sure}</h5><p class="mb-0">{sure_action}</p></div><div class="modal-footer"><button type="button" class="btn btn-spin-action btn-secondary" data-dismiss="modal">{cancel}</button><button type="button" class="btn btn-spin-action btn-danger" onclick="return {js}('delete-doc', '0');">{delete}</button></div></div></div></div>"##,
        delete = delete,
        sure = label(i18n, "are-you-sure"),
        sure_action = label(i18n, "are-you-sure-action"),
        cancel = label(i18n, "cancel"),
        js = JS_SAVE,
    )
}

fn save_btn(i18n: &dyn Translator, doc: &SalesDocument) -> String {
    if !doc.editable {
        return String::new();
    }

    format!(
        r##"<button type="button" class="btn btn-spin-action btn-primary mb-3" load-after="true" onclick="return {}('save-doc', '0');"><i class="fas fa-save fa-fw"></i> {}</button>"##,
        JS_SAVE,
        label(i18n, "save"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, KeyTranslator};

    fn editable_doc() -> SalesDocument {
        SalesDocument::for_customer("C001")
    }

    #[test]
    fn number_format_uses_configured_separator() {
        let fmt = NumberFormat {
            decimals: 2,
            decimal_separator: ',',
        };
        assert_eq!(fmt.format(1234.5), "1234,50");
        assert_eq!(NumberFormat::default().format(-0.0), "0.00");
        assert_eq!(NumberFormat::default().format(-0.001), "0.00");
        assert_eq!(NumberFormat::default().format(-0.005001), "-0.01");
        assert_eq!(fmt.format(-0.004), "0,00");
        assert_eq!(NumberFormat::default().format(10.005_f64 + 0.0001), "10.01");
    }

    #[test]
    fn zero_totals_are_hidden() {
        let doc = editable_doc();
        let html = render(FooterField::Total, &KeyTranslator, &doc, &NumberFormat::default());
        assert!(html.is_empty());
    }

    #[test]
    fn totals_are_formatted_and_disabled() {
        let mut doc = editable_doc();
        doc.total = 121.0;
        let html = render(FooterField::Total, &KeyTranslator, &doc, &NumberFormat::default());
        assert!(html.contains(r#"value="121.00""#));
        assert!(html.contains(r#"disabled="""#));
    }

    #[test]
    fn subtotal_only_shown_with_global_discount() {
        let mut doc = editable_doc();
        doc.net_before_discount = 100.0;
        let fmt = NumberFormat::default();
        assert!(render(FooterField::NetBeforeDiscount, &KeyTranslator, &doc, &fmt).is_empty());

        doc.discount_percent_1 = 10.0;
        let html = render(FooterField::NetBeforeDiscount, &KeyTranslator, &doc, &fmt);
        assert!(html.contains("subtotal"));
        assert!(html.contains(r#"value="100.00""#));

        doc.net_before_discount = 0.0;
        assert!(render(FooterField::NetBeforeDiscount, &KeyTranslator, &doc, &fmt).is_empty());
    }

    #[test]
    fn second_discount_is_hidden_until_a_discount_exists() {
        let mut doc = editable_doc();
        let fmt = NumberFormat::default();
        let html = render(FooterField::DiscountPercent2, &KeyTranslator, &doc, &fmt);
        assert_eq!(html, r#"<input type="hidden" name="dtopor2" value="0"/>"#);

        doc.discount_percent_1 = 5.5;
        let html = render(FooterField::DiscountPercent2, &KeyTranslator, &doc, &fmt);
        assert!(html.contains(r#"type="number" name="dtopor2""#));
    }

    #[test]
    fn discount_input_reflects_value_and_editability() {
        let mut doc = editable_doc();
        doc.discount_percent_1 = 5.5;
        let fmt = NumberFormat::default();
        let html = render(FooterField::DiscountPercent1, &KeyTranslator, &doc, &fmt);
        assert!(html.contains(r#"name="dtopor1" value="5.5""#));
        assert!(html.contains("salesFormActionWait('recalculate', '0', event)"));
        assert!(!html.contains("disabled"));

        doc.editable = false;
        let html = render(FooterField::DiscountPercent1, &KeyTranslator, &doc, &fmt);
        assert!(html.contains(r#" disabled="""#));
    }

    #[test]
    fn action_buttons_disappear_on_locked_documents() {
        let mut doc = editable_doc();
        doc.editable = false;
        let fmt = NumberFormat::default();
        for field in [
            FooterField::NewLineBtn,
            FooterField::ProductBtn,
            FooterField::FastLineInput,
            FooterField::SortableBtn,
            FooterField::SaveBtn,
            FooterField::DeleteBtn,
        ] {
            assert!(
                render(field, &KeyTranslator, &doc, &fmt).is_empty(),
                "{field} should be hidden"
            );
        }
    }

    #[test]
    fn delete_requires_a_saved_document() {
        let mut doc = editable_doc();
        let fmt = NumberFormat::default();
        assert!(render(FooterField::DeleteBtn, &KeyTranslator, &doc, &fmt).is_empty());

        doc.id = Some(forgeerp_core::SalesDocumentId::new());
        let html = render(FooterField::DeleteBtn, &KeyTranslator, &doc, &fmt);
        assert!(html.contains("salesFormSave('delete-doc', '0')"));
        assert!(html.contains(r##"data-target="#deleteDocModal""##));
    }

    #[test]
    fn observations_and_labels_are_escaped() {
        let mut doc = editable_doc();
        doc.observations = "<script>alert(1)</script>".to_string();
        let mut catalog = Catalog::default();
        catalog.insert("observations", "Notas & \"avisos\"");

        let html = render(FooterField::Observations, &catalog, &doc, &NumberFormat::default());
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Notas &amp; &quot;avisos&quot;"));
        assert!(!html.contains("<script>"));
    }
}
