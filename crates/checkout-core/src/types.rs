//! # Domain Types
//!
//! Core domain types used throughout Checkout.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │     Coupon      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  product        │   │  name           │       │
//! │  │  name           │   │  quantity       │   │  code           │       │
//! │  │  price          │   └─────────────────┘   │  discount       │       │
//! │  │  stock          │                         └─────────────────┘       │
//! │  │  discounts[]    │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  └─────────────────┘   │  DiscountTier   │   │ CouponDiscount  │       │
//! │                        │  ─────────────  │   │  ─────────────  │       │
//! │                        │  quantity       │   │  Amount(f64)    │       │
//! │                        │  rate           │   │  Percentage(f64)│       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Every type here is a transient value object: the presentation layer
//! constructs them per render/update cycle, the calculators never mutate
//! them. Prices are `f64` in whole currency units; rounding to integers
//! happens only when a summary crosses into [`Money`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// A tier discount rate, stored as a fraction in `[0, 1)`.
///
/// ## Why a Fraction?
/// Tier rates multiply directly into line totals: `price × qty × (1 − rate)`.
/// Storing the fraction keeps that arithmetic exact in `f64` with no
/// conversion step. `0.1` = 10% off.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(f64);

impl DiscountRate {
    /// Creates a discount rate from a fraction (0.1 = 10%).
    #[inline]
    pub const fn from_fraction(fraction: f64) -> Self {
        DiscountRate(fraction)
    }

    /// Returns the rate as a fraction.
    #[inline]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 * 100.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0.0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Discount Tier
// =============================================================================

/// A quantity-threshold discount on a product.
///
/// The tier applies once the line quantity reaches `quantity`. A product may
/// carry any number of tiers in any order; resolution picks the maximum
/// applicable rate, so no ordering invariant is required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountTier {
    /// Minimum line quantity for the tier to apply.
    pub quantity: i64,

    /// Discount rate granted at or above the threshold.
    pub rate: DiscountRate,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Identifier chosen by the caller (opaque to this crate).
    pub id: String,

    /// Display name shown in the cart and on receipts.
    pub name: String,

    /// Unit price in whole currency units. Non-negative.
    pub price: f64,

    /// Units available. Non-negative; quantity adjustments clamp against it.
    pub stock: i64,

    /// Quantity-threshold discount tiers, in no particular order.
    pub discounts: Vec<DiscountTier>,
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line item in a cart: a product plus the requested quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// The product this line refers to (owned copy; reference data).
    pub product: Product,

    /// Quantity in cart. Kept within `[0, product.stock]` by
    /// quantity adjustment; a line at 0 is removed rather than kept.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a line item for a product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product: product.clone(),
            quantity,
        }
    }

    /// Line amount before any discount: `price × quantity`.
    #[inline]
    pub fn base_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// The discount a coupon grants.
///
/// ## Closed Set of Kinds
/// The kind is a tagged enum, not a string: a coupon whose kind the code
/// does not recognize cannot be constructed or deserialized. The only
/// "no coupon" case in the calculators is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "discountType", content = "discountValue", rename_all = "lowercase")]
pub enum CouponDiscount {
    /// Flat amount off the cart total, in whole currency units.
    /// Application floors at zero; the total never goes negative.
    Amount(f64),

    /// Percentage off the cart total, expected in `[0, 100]`.
    Percentage(f64),
}

/// A cart-wide coupon, applied after per-item tier discounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coupon {
    /// Display name ("Welcome discount").
    pub name: String,

    /// Redemption code entered by the customer ("WELCOME10").
    pub code: String,

    /// What the coupon takes off the total.
    pub discount: CouponDiscount,
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary handed to the presentation layer.
///
/// Derived, never stored. The three fields are each rounded half-up from the
/// exact `f64` figures independently; everything upstream of this struct is
/// full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of `price × quantity` over all lines, before any discount.
    pub total_before_discount: Money,

    /// Total after tier discounts and the coupon, if one is selected.
    pub total_after_discount: Money,

    /// `total_before_discount − total_after_discount`, at full precision
    /// before rounding. Negative only on malformed coupon input.
    pub total_discount: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
