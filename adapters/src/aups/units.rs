//! Australia Post unit tables

/// Packaging type (normalized name → carrier code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackagingType {
    /// Carton
    Carton,
    /// Pallet
    Pallet,
    /// Satchel
    Satchel,
    /// Bag
    Bag,
    /// Envelope
    Envelope,
    /// Item
    Item,
    /// Jiffy bag
    JiffyBag,
    /// Skid
    Skid,
}

impl PackagingType {
    /// All packaging types
    pub const ALL: [PackagingType; 8] = [
        PackagingType::Carton,
        PackagingType::Pallet,
        PackagingType::Satchel,
        PackagingType::Bag,
        PackagingType::Envelope,
        PackagingType::Item,
        PackagingType::JiffyBag,
        PackagingType::Skid,
    ];

    /// Normalized name
    pub fn name(&self) -> &'static str {
        match self {
            PackagingType::Carton => "carton",
            PackagingType::Pallet => "pallet",
            PackagingType::Satchel => "satchel",
            PackagingType::Bag => "bag",
            PackagingType::Envelope => "envelope",
            PackagingType::Item => "item",
            PackagingType::JiffyBag => "jiffy_bag",
            PackagingType::Skid => "skid",
        }
    }

    /// Carrier code
    pub fn code(&self) -> &'static str {
        match self {
            PackagingType::Carton => "CTN",
            PackagingType::Pallet => "PAL",
            PackagingType::Satchel => "SAT",
            PackagingType::Bag => "BAG",
            PackagingType::Envelope => "ENV",
            PackagingType::Item => "ITM",
            PackagingType::JiffyBag => "JIF",
            PackagingType::Skid => "SKI",
        }
    }

    /// Exact (case-sensitive) lookup by normalized name
    pub fn from_name(name: &str) -> Option<PackagingType> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}
