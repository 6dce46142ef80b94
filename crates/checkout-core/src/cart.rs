//! # Cart
//!
//! A cart value type that composes the pricing calculators for a stateful
//! caller.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Frontend Action          Cart Method             Effect                │
//! │  ───────────────          ───────────             ──────                │
//! │                                                                         │
//! │  Click Product ──────────► add_item() ──────────► merge or push line   │
//! │                                                                         │
//! │  Change Quantity ────────► update_quantity() ───► clamp / remove line  │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ───────► drop line            │
//! │                                                                         │
//! │  Pick Coupon ────────────► select_coupon() ─────► set coupon           │
//! │                                                                         │
//! │  Render Totals ──────────► totals() ────────────► (read only)          │
//! │                                                                         │
//! │  NOTE: Cart is a plain value. The caller owns it, clones it, and       │
//! │        re-renders from it; nothing here is shared or locked.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::pricing;
use crate::types::{CartItem, CartTotals, Coupon, Product};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product merges)
/// - Line quantity stays above 0 (an adjustment to 0 removes the line)
/// - Maximum unique lines: [`MAX_CART_ITEMS`]
/// - Maximum quantity per line: [`MAX_ITEM_QUANTITY`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Line items, in insertion order.
    pub items: Vec<CartItem>,

    /// Currently selected coupon, applied by [`Cart::totals`].
    pub coupon: Option<Coupon>,
}

impl Cart {
    /// Creates a new empty cart with no coupon.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            coupon: None,
        }
    }

    /// Adds a product to the cart or merges into its existing line.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity accumulates on the existing line
    /// - Otherwise: a new line is pushed
    /// - Refused when the request exceeds the product's remaining stock
    ///   (stock minus what this cart already holds)
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        let remaining = self.remaining_stock(product);
        if quantity > remaining {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: remaining,
                requested: quantity,
            });
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            let new_quantity = item.quantity + quantity;
            if new_quantity > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_quantity,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_quantity;
            debug!(product_id = %product.id, quantity = new_quantity, "cart line merged");
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }
        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        self.items.push(CartItem::from_product(product, quantity));
        debug!(product_id = %product.id, quantity, "cart line added");
        Ok(())
    }

    /// Sets the quantity of the line matching `product_id`.
    ///
    /// Delegates to [`pricing::adjust_item_quantity`]: the quantity is
    /// clamped into `[0, stock]`, a clamped 0 removes the line, and an
    /// unmatched id is a silent no-op.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        self.items = pricing::adjust_item_quantity(&self.items, product_id, quantity);
        debug!(product_id = %product_id, quantity, "cart quantity adjusted");
    }

    /// Removes a line from the cart by product id.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product.id != product_id);

        if self.items.len() == initial_len {
            return Err(CoreError::ProductNotFound(product_id.to_string()));
        }
        debug!(product_id = %product_id, "cart line removed");
        Ok(())
    }

    /// Clears all lines and deselects the coupon.
    pub fn clear(&mut self) {
        self.items.clear();
        self.coupon = None;
        debug!("cart cleared");
    }

    /// Selects the coupon applied by [`Cart::totals`], or clears it.
    pub fn select_coupon(&mut self, coupon: Option<Coupon>) {
        match &coupon {
            Some(c) => debug!(code = %c.code, "coupon selected"),
            None => debug!("coupon deselected"),
        }
        self.coupon = coupon;
    }

    /// Units of a product still available to this cart: its stock minus the
    /// quantity already held in the matching line.
    pub fn remaining_stock(&self, product: &Product) -> i64 {
        let in_cart = self
            .items
            .iter()
            .find(|i| i.product.id == product.id)
            .map(|i| i.quantity)
            .unwrap_or(0);

        product.stock - in_cart
    }

    /// Returns the number of unique lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact subtotal before any discount (unrounded).
    pub fn subtotal_before_discount(&self) -> f64 {
        pricing::subtotal_before_discount(&self.items)
    }

    /// Computes the rounded totals summary with the selected coupon applied.
    pub fn totals(&self) -> CartTotals {
        pricing::cart_totals(&self.items, self.coupon.as_ref())
    }
}
