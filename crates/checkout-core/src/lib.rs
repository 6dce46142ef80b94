//! # checkout-core: Pure Pricing Logic for Checkout
//!
//! This crate is the **heart** of Checkout. It contains all pricing logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Frontend (TypeScript, external)                 │   │
//! │  │    Product list ──► Cart UI ──► Coupon picker ──► Totals       │   │
//! │  │                                                                 │   │
//! │  │    Owns all state. Re-renders every cycle from the pure        │   │
//! │  │    computations below, via the generated ts-rs bindings.       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │ tiers     │  │   Cart    │  │   rules   │  │   │
//! │  │   │  Coupon   │  │ coupons   │  │  add/adj  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, DiscountTier, Coupon, CartTotals)
//! - [`money`] - Money type: rounded integer amounts, the one rounding boundary
//! - [`pricing`] - The pure calculators (tier resolution, totals, adjustment)
//! - [`cart`] - Cart value type composing the calculators
//! - [`error`] - Domain error types
//! - [`validation`] - Opt-in input validation for reference data
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **One Rounding Boundary**: In-flight amounts are exact `f64`; rounding
//!    half-up happens once, when totals cross into [`Money`]
//! 4. **Permissive Calculators**: the math never errors or validates;
//!    typed errors exist only at the cart boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::pricing::cart_totals;
//! use checkout_core::types::{CartItem, Coupon, CouponDiscount, DiscountRate, DiscountTier, Product};
//!
//! let product = Product {
//!     id: "p1".to_string(),
//!     name: "Bulk widget".to_string(),
//!     price: 1000.0,
//!     stock: 10,
//!     discounts: vec![DiscountTier {
//!         quantity: 10,
//!         rate: DiscountRate::from_fraction(0.1),
//!     }],
//! };
//!
//! let items = vec![CartItem::from_product(&product, 10)];
//! let coupon = Coupon {
//!     name: "Welcome".to_string(),
//!     code: "WELCOME".to_string(),
//!     discount: CouponDiscount::Amount(2000.0),
//! };
//!
//! let totals = cart_totals(&items, Some(&coupon));
//! assert_eq!(totals.total_before_discount.units(), 10000);
//! assert_eq!(totals.total_after_discount.units(), 7000);
//! assert_eq!(totals.total_discount.units(), 3000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Money` instead of
// `use checkout_core::money::Money`

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum unique lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
/// Can be made configurable per storefront in future versions.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line in cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Stock clamping still applies below this ceiling.
pub const MAX_ITEM_QUANTITY: i64 = 999;
