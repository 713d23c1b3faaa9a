//! Purolator unit tables

/// Document print (output) type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrintType {
    /// PDF document
    Pdf,
    /// Zebra thermal label
    Zpl,
}

impl PrintType {
    /// All print types
    pub const ALL: [PrintType; 2] = [PrintType::Pdf, PrintType::Zpl];

    /// Carrier enum name
    pub fn name(&self) -> &'static str {
        match self {
            PrintType::Pdf => "PDF",
            PrintType::Zpl => "ZPL",
        }
    }

    /// Case-insensitive lookup by carrier enum name
    pub fn from_name(name: &str) -> Option<PrintType> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Resolve a requested label format to the carrier output type name.
    ///
    /// Absent labels default to `PDF`; unknown labels pass through unchanged.
    pub fn map(label_type: Option<&str>) -> String {
        let label_type = label_type.unwrap_or(PrintType::Pdf.name());
        Self::from_name(label_type)
            .map(|t| t.name().to_string())
            .unwrap_or_else(|| label_type.to_string())
    }
}
