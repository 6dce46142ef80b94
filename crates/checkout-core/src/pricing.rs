//! # Pricing Calculators
//!
//! The pure calculation functions for cart pricing.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pricing Pipeline                                   │
//! │                                                                         │
//! │  CartItem ──► max_applicable_discount ──► line_total                   │
//! │                                               │                         │
//! │  &[CartItem] ──► subtotal_before_discount     │                         │
//! │             └──► total_after_item_discounts ◄─┘                         │
//! │                          │                                              │
//! │                          ▼                                              │
//! │  Option<&Coupon> ──► apply_coupon                                       │
//! │                          │                                              │
//! │                          ▼                                              │
//! │  cart_totals ──► CartTotals (rounded here, nowhere else)               │
//! │                                                                         │
//! │  adjust_item_quantity is independent: it rewrites the line list,       │
//! │  it never prices anything.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! Every function here is total, synchronous, and side-effect-free. Inputs
//! are never mutated; malformed numeric input degrades silently instead of
//! erroring. Validation is a separate, opt-in concern ([`crate::validation`])
//! that the calculators never invoke.

use crate::money::Money;
use crate::types::{CartItem, CartTotals, Coupon, CouponDiscount, DiscountRate};

// =============================================================================
// Per-Line Calculations
// =============================================================================

/// Resolves the best tier discount for one line item.
///
/// A tier applies when the line quantity is at or above its threshold.
/// Among applicable tiers the maximum rate wins; with no applicable tier
/// (or no tiers at all) the rate is zero. Tier order on the product is
/// irrelevant.
///
/// ## Example
/// ```rust
/// use checkout_core::pricing::max_applicable_discount;
/// use checkout_core::types::{CartItem, DiscountRate, DiscountTier, Product};
///
/// let product = Product {
///     id: "p1".to_string(),
///     name: "Bulk widget".to_string(),
///     price: 1000.0,
///     stock: 50,
///     discounts: vec![
///         DiscountTier { quantity: 10, rate: DiscountRate::from_fraction(0.1) },
///         DiscountTier { quantity: 20, rate: DiscountRate::from_fraction(0.2) },
///     ],
/// };
///
/// let item = CartItem::from_product(&product, 20);
/// assert_eq!(max_applicable_discount(&item).fraction(), 0.2);
/// ```
pub fn max_applicable_discount(item: &CartItem) -> DiscountRate {
    let best = item
        .product
        .discounts
        .iter()
        .filter(|tier| item.quantity >= tier.quantity)
        .map(|tier| tier.rate.fraction())
        .fold(0.0, f64::max);

    DiscountRate::from_fraction(best)
}

/// Computes a line's post-discount amount: `price × quantity × (1 − rate)`.
///
/// Full `f64` precision, no rounding. The discount never increases the
/// line amount, so `line_total(item) ≤ price × quantity` always holds for
/// well-formed tiers.
pub fn line_total(item: &CartItem) -> f64 {
    item.base_total() * (1.0 - max_applicable_discount(item).fraction())
}

// =============================================================================
// Cart Aggregation
// =============================================================================

/// Sums `price × quantity` over all lines, ignoring discounts.
///
/// An empty cart sums to 0.
pub fn subtotal_before_discount(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::base_total).sum()
}

/// Sums the post-tier-discount line totals over all lines.
///
/// An empty cart sums to 0. The coupon is not involved here; it applies
/// to this figure afterwards via [`apply_coupon`].
pub fn total_after_item_discounts(items: &[CartItem]) -> f64 {
    items.iter().map(line_total).sum()
}

// =============================================================================
// Coupon Application
// =============================================================================

/// Applies an optional coupon to a post-tier-discount total.
///
/// - `None` returns the total unchanged.
/// - A flat amount subtracts and floors at zero; the result is never
///   negative, even when the coupon exceeds the total.
/// - A percentage scales by `1 − value/100`.
///
/// No rounding: only the final summary rounds.
pub fn apply_coupon(total: f64, coupon: Option<&Coupon>) -> f64 {
    match coupon.map(|c| c.discount) {
        None => total,
        Some(CouponDiscount::Amount(value)) => (total - value).max(0.0),
        Some(CouponDiscount::Percentage(value)) => total * (1.0 - value / 100.0),
    }
}

// =============================================================================
// Totals Summary
// =============================================================================

/// Computes the cart totals summary: subtotal before discounts, total after
/// tier discounts and coupon, and the overall discount amount.
///
/// The three figures are computed at full precision and each rounded
/// half-up independently at this boundary. The discount amount is
/// `subtotal − total after coupon`; it can go negative only on malformed
/// coupon input (e.g. a percentage below 0), which is deliberately not
/// guarded.
///
/// ## Example
/// ```rust
/// use checkout_core::pricing::cart_totals;
/// use checkout_core::types::{CartItem, DiscountRate, DiscountTier, Product};
///
/// let product = Product {
///     id: "p1".to_string(),
///     name: "Bulk widget".to_string(),
///     price: 1000.0,
///     stock: 10,
///     discounts: vec![DiscountTier {
///         quantity: 10,
///         rate: DiscountRate::from_fraction(0.1),
///     }],
/// };
///
/// let items = vec![CartItem::from_product(&product, 10)];
/// let totals = cart_totals(&items, None);
///
/// assert_eq!(totals.total_before_discount.units(), 10000);
/// assert_eq!(totals.total_after_discount.units(), 9000);
/// assert_eq!(totals.total_discount.units(), 1000);
/// ```
pub fn cart_totals(items: &[CartItem], coupon: Option<&Coupon>) -> CartTotals {
    let before = subtotal_before_discount(items);
    let after_tiers = total_after_item_discounts(items);
    let after_coupon = apply_coupon(after_tiers, coupon);

    CartTotals {
        total_before_discount: Money::from_rounded(before),
        total_after_discount: Money::from_rounded(after_coupon),
        total_discount: Money::from_rounded(before - after_coupon),
    }
}

// =============================================================================
// Quantity Adjustment
// =============================================================================

/// Rewrites a line list with the matching product's quantity changed.
///
/// The requested quantity may be any integer; it is clamped into
/// `[0, product.stock]`. A clamped quantity of 0 removes the line entirely.
/// Lines for other products pass through unchanged, insertion order is
/// preserved, and the input slice is never mutated. With no matching
/// product the result equals the input.
pub fn adjust_item_quantity(
    items: &[CartItem],
    product_id: &str,
    new_quantity: i64,
) -> Vec<CartItem> {
    items
        .iter()
        .filter_map(|item| {
            if item.product.id != product_id {
                return Some(item.clone());
            }

            // min-then-max matches clamp on well-formed stock and still
            // degrades to removal if stock is somehow negative
            let clamped = new_quantity.min(item.product.stock).max(0);
            (clamped > 0).then(|| CartItem {
                product: item.product.clone(),
                quantity: clamped,
            })
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DiscountTier, Product};

    fn test_product(id: &str, price: f64, stock: i64, tiers: &[(i64, f64)]) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            stock,
            discounts: tiers
                .iter()
                .map(|&(quantity, rate)| DiscountTier {
                    quantity,
                    rate: DiscountRate::from_fraction(rate),
                })
                .collect(),
        }
    }

    fn flat_coupon(value: f64) -> Coupon {
        Coupon {
            name: "Flat".to_string(),
            code: "FLAT".to_string(),
            discount: CouponDiscount::Amount(value),
        }
    }

    fn percent_coupon(value: f64) -> Coupon {
        Coupon {
            name: "Percent".to_string(),
            code: "PCT".to_string(),
            discount: CouponDiscount::Percentage(value),
        }
    }

    #[test]
    fn test_no_applicable_tier_is_zero() {
        // No tiers at all
        let bare = CartItem::from_product(&test_product("1", 1000.0, 10, &[]), 5);
        assert!(max_applicable_discount(&bare).is_zero());

        // Tiers exist but the quantity is below every threshold
        let below = CartItem::from_product(
            &test_product("2", 1000.0, 10, &[(10, 0.1), (20, 0.2)]),
            9,
        );
        assert!(max_applicable_discount(&below).is_zero());
    }

    #[test]
    fn test_max_rate_wins_regardless_of_tier_order() {
        // Higher rate listed first, threshold order scrambled
        let product = test_product("1", 1000.0, 50, &[(20, 0.2), (5, 0.05), (10, 0.1)]);

        let item = CartItem::from_product(&product, 20);
        assert_eq!(max_applicable_discount(&item).fraction(), 0.2);

        let item = CartItem::from_product(&product, 12);
        assert_eq!(max_applicable_discount(&item).fraction(), 0.1);
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let product = test_product("1", 1000.0, 50, &[(10, 0.1)]);

        let at = CartItem::from_product(&product, 10);
        assert_eq!(max_applicable_discount(&at).fraction(), 0.1);

        let under = CartItem::from_product(&product, 9);
        assert!(max_applicable_discount(&under).is_zero());
    }

    #[test]
    fn test_line_total_applies_best_tier() {
        // price 1000, tier {quantity: 10, rate: 0.1}, qty 10 → 9000
        let product = test_product("1", 1000.0, 10, &[(10, 0.1)]);
        let item = CartItem::from_product(&product, 10);
        assert_eq!(line_total(&item), 9000.0);
    }

    #[test]
    fn test_line_total_never_exceeds_base() {
        let product = test_product("1", 999.0, 50, &[(3, 0.25)]);
        for quantity in 0..30 {
            let item = CartItem::from_product(&product, quantity);
            assert!(line_total(&item) <= item.base_total());
        }
    }

    #[test]
    fn test_aggregation_over_mixed_lines() {
        let discounted = test_product("1", 1000.0, 20, &[(10, 0.1)]);
        let plain = test_product("2", 500.0, 20, &[]);
        let items = vec![
            CartItem::from_product(&discounted, 10), // 10000 → 9000
            CartItem::from_product(&plain, 2),       // 1000, no tier
        ];

        assert_eq!(subtotal_before_discount(&items), 11000.0);
        assert_eq!(total_after_item_discounts(&items), 10000.0);
    }

    #[test]
    fn test_empty_cart_aggregates_to_zero() {
        assert_eq!(subtotal_before_discount(&[]), 0.0);
        assert_eq!(total_after_item_discounts(&[]), 0.0);
    }

    #[test]
    fn test_apply_coupon_none_is_identity() {
        assert_eq!(apply_coupon(9000.0, None), 9000.0);
    }

    #[test]
    fn test_apply_flat_coupon_floors_at_zero() {
        let coupon = flat_coupon(2000.0);
        assert_eq!(apply_coupon(9000.0, Some(&coupon)), 7000.0);

        // Coupon worth more than the total: clamp, never negative
        let oversized = flat_coupon(10000.0);
        assert_eq!(apply_coupon(9000.0, Some(&oversized)), 0.0);
    }

    #[test]
    fn test_apply_percentage_coupon_extremes() {
        let zero = percent_coupon(0.0);
        assert_eq!(apply_coupon(9000.0, Some(&zero)), 9000.0);

        let full = percent_coupon(100.0);
        assert_eq!(apply_coupon(9000.0, Some(&full)), 0.0);

        let ten = percent_coupon(10.0);
        assert_eq!(apply_coupon(9000.0, Some(&ten)), 8100.0);
    }

    #[test]
    fn test_cart_totals_empty_cart_any_coupon() {
        for coupon in [None, Some(flat_coupon(2000.0)), Some(percent_coupon(10.0))] {
            let totals = cart_totals(&[], coupon.as_ref());
            assert!(totals.total_before_discount.is_zero());
            assert!(totals.total_after_discount.is_zero());
            assert!(totals.total_discount.is_zero());
        }
    }

    #[test]
    fn test_cart_totals_flat_coupon_stacks_on_tier_discount() {
        // subtotal 10000, after tiers 9000, flat 2000 → after coupon 7000
        let product = test_product("1", 1000.0, 10, &[(10, 0.1)]);
        let items = vec![CartItem::from_product(&product, 10)];
        let coupon = flat_coupon(2000.0);

        let totals = cart_totals(&items, Some(&coupon));
        assert_eq!(totals.total_before_discount.units(), 10000);
        assert_eq!(totals.total_after_discount.units(), 7000);
        assert_eq!(totals.total_discount.units(), 3000);
    }

    #[test]
    fn test_cart_totals_oversized_flat_coupon() {
        let product = test_product("1", 1000.0, 10, &[]);
        let items = vec![CartItem::from_product(&product, 1)];
        let coupon = flat_coupon(99999.0);

        let totals = cart_totals(&items, Some(&coupon));
        assert_eq!(totals.total_after_discount.units(), 0);
        assert_eq!(totals.total_discount.units(), 1000);
    }

    #[test]
    fn test_cart_totals_rounds_half_up_once() {
        // 3 × 333 at 10% off: exact after-figure 899.1, subtotal 999
        let product = test_product("1", 333.0, 10, &[(3, 0.1)]);
        let items = vec![CartItem::from_product(&product, 3)];

        let totals = cart_totals(&items, None);
        assert_eq!(totals.total_before_discount.units(), 999);
        assert_eq!(totals.total_after_discount.units(), 899);
        // discount rounds from the exact 99.9, not from rounded parts
        assert_eq!(totals.total_discount.units(), 100);
    }

    #[test]
    fn test_cart_totals_percentage_coupon() {
        let product = test_product("1", 1000.0, 10, &[]);
        let items = vec![CartItem::from_product(&product, 10)];

        let totals = cart_totals(&items, Some(&percent_coupon(100.0)));
        assert_eq!(totals.total_after_discount.units(), 0);
        assert_eq!(totals.total_discount.units(), 10000);
    }

    #[test]
    fn test_adjust_quantity_clamps_to_stock() {
        let product = test_product("1", 1000.0, 5, &[]);
        let items = vec![CartItem::from_product(&product, 2)];

        let adjusted = adjust_item_quantity(&items, "1", 50);
        assert_eq!(adjusted.len(), 1);
        assert_eq!(adjusted[0].quantity, 5);
        // Input untouched
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_adjust_quantity_zero_or_negative_removes_line() {
        let product = test_product("1", 1000.0, 5, &[]);
        let other = test_product("2", 500.0, 5, &[]);
        let items = vec![
            CartItem::from_product(&product, 2),
            CartItem::from_product(&other, 1),
        ];

        let removed = adjust_item_quantity(&items, "1", 0);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].product.id, "2");

        let negative = adjust_item_quantity(&items, "1", -3);
        assert_eq!(negative.len(), 1);
        assert_eq!(negative[0].product.id, "2");
    }

    #[test]
    fn test_adjust_quantity_unmatched_id_is_noop() {
        let product = test_product("1", 1000.0, 5, &[]);
        let items = vec![CartItem::from_product(&product, 2)];

        let adjusted = adjust_item_quantity(&items, "missing", 3);
        assert_eq!(adjusted, items);
    }

    #[test]
    fn test_adjust_quantity_in_range_replaces() {
        let product = test_product("1", 1000.0, 5, &[]);
        let other = test_product("2", 500.0, 5, &[]);
        let items = vec![
            CartItem::from_product(&product, 2),
            CartItem::from_product(&other, 1),
        ];

        let adjusted = adjust_item_quantity(&items, "1", 4);
        assert_eq!(adjusted[0].quantity, 4);
        assert_eq!(adjusted[1].quantity, 1);
        // Order preserved
        assert_eq!(adjusted[0].product.id, "1");
    }
}
