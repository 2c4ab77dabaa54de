/// Built-in footer fields, keyed by the name mods use to address them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FooterField {
    NewLineBtn,
    ProductBtn,
    FastLineInput,
    SortableBtn,
    Observations,
    NetBeforeDiscount,
    DiscountPercent1,
    DiscountPercent2,
    Net,
    TotalTax,
    TotalSurcharge,
    TotalWithholding,
    TotalSupplied,
    Total,
    DeleteBtn,
    SaveBtn,
}

impl FooterField {
    pub const ALL: [FooterField; 16] = [
        FooterField::NewLineBtn,
        FooterField::ProductBtn,
        FooterField::FastLineInput,
        FooterField::SortableBtn,
        FooterField::Observations,
        FooterField::NetBeforeDiscount,
        FooterField::DiscountPercent1,
        FooterField::DiscountPercent2,
        FooterField::Net,
        FooterField::TotalTax,
        FooterField::TotalSurcharge,
        FooterField::TotalWithholding,
        FooterField::TotalSupplied,
        FooterField::Total,
        FooterField::DeleteBtn,
        FooterField::SaveBtn,
    ];

    /// Field name as used by mods and, for inputs, as the form key.
    pub fn as_str(&self) -> &'static str {
        match self {
            FooterField::NewLineBtn => "newLineBtn",
            FooterField::ProductBtn => "productBtn",
            FooterField::FastLineInput => "fastLineInput",
            FooterField::SortableBtn => "sortableBtn",
            FooterField::Observations => "observaciones",
            FooterField::NetBeforeDiscount => "netosindto",
            FooterField::DiscountPercent1 => "dtopor1",
            FooterField::DiscountPercent2 => "dtopor2",
            FooterField::Net => "neto",
            FooterField::TotalTax => "totaliva",
            FooterField::TotalSurcharge => "totalrecargo",
            FooterField::TotalWithholding => "totalirpf",
            FooterField::TotalSupplied => "totalsuplidos",
            FooterField::Total => "total",
            FooterField::DeleteBtn => "deleteBtn",
            FooterField::SaveBtn => "saveBtn",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl core::fmt::Display for FooterField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
