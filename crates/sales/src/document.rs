use serde::{Deserialize, Serialize};

use forgeerp_core::SalesDocumentId;

/// Header/footer state of a sales document as seen by the entry form.
///
/// Totals are computed by the business layer; the form only displays them.
/// The user-editable fields are the two global discounts and the observations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesDocument {
    /// `None` until the document has been persisted.
    pub id: Option<SalesDocumentId>,
    pub customer_code: String,
    /// Whether the document can still be modified (e.g. not yet invoiced).
    pub editable: bool,
    /// Global discount percentage (`dtopor1`).
    pub discount_percent_1: f64,
    /// Second, cascading global discount percentage (`dtopor2`).
    pub discount_percent_2: f64,
    pub observations: String,
    /// Net amount before global discounts (`netosindto`).
    pub net_before_discount: f64,
    pub net: f64,
    pub total_tax: f64,
    /// Equivalence surcharge (`totalrecargo`).
    pub total_surcharge: f64,
    /// Withholding tax (`totalirpf`).
    pub total_withholding: f64,
    /// Amounts paid on behalf of the customer (`totalsuplidos`).
    pub total_supplied: f64,
    pub total: f64,
}

impl SalesDocument {
    /// A new, unsaved and editable document for the given customer.
    pub fn for_customer(customer_code: impl Into<String>) -> Self {
        Self {
            customer_code: customer_code.into(),
            editable: true,
            ..Self::default()
        }
    }

    pub fn has_customer(&self) -> bool {
        !self.customer_code.is_empty()
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn has_global_discount(&self) -> bool {
        self.discount_percent_1 != 0.0 || self.discount_percent_2 != 0.0
    }
}
