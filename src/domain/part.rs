use super::OrderId;

pub type PartId = u64;

/// Represents a catalog item available for ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub id: PartId,
    pub name: String,
    pub size: String,
    pub price: f64,
    /// Most recent order this part was linked to.
    pub linked_order: Option<OrderId>,
}

/// Payload for creating a new part.
#[derive(Debug, Clone)]
pub struct PartCreate {
    pub name: String,
    pub size: String,
    pub price: f64,
}

impl PartCreate {
    pub fn new(name: impl Into<String>, size: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            price,
        }
    }
}

/// Payload for updating an existing part.
#[derive(Debug, Clone, Default)]
pub struct PartPatch {
    pub linked_order: Option<OrderId>,
}
