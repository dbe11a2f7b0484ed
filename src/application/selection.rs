use crate::domain::order::{OrderIntent, PickupLocation, Size};
use crate::domain::product::Product;
use crate::error::{Result, StorefrontError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    SizeOnly,
    PickupOnly,
    BothSelected,
}

/// Size and pickup choices made on one product page.
///
/// Each choice is single-valued: selecting again overwrites the previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    size: Option<Size>,
    pickup: Option<PickupLocation>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_size(&mut self, size: Size) {
        self.size = Some(size);
    }

    pub fn select_pickup(&mut self, pickup: PickupLocation) {
        self.pickup = Some(pickup);
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn pickup(&self) -> Option<PickupLocation> {
        self.pickup
    }

    pub fn state(&self) -> SelectionState {
        match (self.size, self.pickup) {
            (None, None) => SelectionState::Empty,
            (Some(_), None) => SelectionState::SizeOnly,
            (None, Some(_)) => SelectionState::PickupOnly,
            (Some(_), Some(_)) => SelectionState::BothSelected,
        }
    }

    pub fn is_checkout_enabled(&self) -> bool {
        self.state() == SelectionState::BothSelected
    }

    /// Label for the checkout affordance in the current state.
    pub fn checkout_label(&self) -> &'static str {
        if self.is_checkout_enabled() {
            "Checkout"
        } else {
            "Select Size and Pickup Location"
        }
    }

    /// Builds the order intent for `product`, or `IncompleteSelection` unless
    /// both a size and a pickup location are chosen.
    pub fn order_intent(&self, product: &Product) -> Result<OrderIntent> {
        match (self.size, self.pickup) {
            (Some(size), Some(pickup)) => OrderIntent::new(product, size, pickup),
            _ => Err(StorefrontError::IncompleteSelection),
        }
    }
}
