//! # Validation Module
//!
//! Opt-in input validation for Checkout.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Field rules for caller-constructed reference data                 │
//! │  └── (products, tiers, coupons — before they reach a cart)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: The calculators                                              │
//! │  └── NO validation. Total functions; malformed numbers degrade         │
//! │      silently. This module is never called from pricing.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_price, validate_quantity};
//!
//! validate_price(1000.0).unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::{Coupon, CouponDiscount};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Coca-Cola 330ml").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero is allowed: free items)
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_price;
///
/// assert!(validate_price(1000.0).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-100.0).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (zero means sold out, not invalid)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates a tier discount rate.
///
/// ## Rules
/// - Must be a finite fraction in `[0, 1)`
/// - A rate of exactly 1 would price the line at zero and is rejected
pub fn validate_discount_rate(rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "rate".to_string(),
        });
    }

    if !(0.0..1.0).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: "rate".to_string(),
            min: 0.0,
            max: 1.0,
        });
    }

    Ok(())
}

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1.0,
            max: MAX_ITEM_QUANTITY as f64,
        });
    }

    Ok(())
}

// =============================================================================
// Coupon Validators
// =============================================================================

/// Validates a coupon's discount value.
///
/// ## Rules
/// - Flat amount: finite and non-negative
/// - Percentage: finite and in `[0, 100]`
///
/// Note the calculators apply whatever they are given; this is for the
/// caller managing the coupon list, before a coupon is offered at all.
pub fn validate_coupon(coupon: &Coupon) -> ValidationResult<()> {
    match coupon.discount {
        CouponDiscount::Amount(value) => {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite {
                    field: "discountValue".to_string(),
                });
            }
            if value < 0.0 {
                return Err(ValidationError::MustBeNonNegative {
                    field: "discountValue".to_string(),
                });
            }
        }
        CouponDiscount::Percentage(value) => {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite {
                    field: "discountValue".to_string(),
                });
            }
            if !(0.0..=100.0).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field: "discountValue".to_string(),
                    min: 0.0,
                    max: 100.0,
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates cart size (number of unique lines).
///
/// ## Rules
/// - Must not exceed [`MAX_CART_ITEMS`]
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0.0,
            max: MAX_CART_ITEMS as f64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(discount: CouponDiscount) -> Coupon {
        Coupon {
            name: "Test".to_string(),
            code: "TEST".to_string(),
            discount,
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Coca-Cola 330ml").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(1099.0).is_ok());
        assert!(validate_price(-100.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(10).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_discount_rate() {
        assert!(validate_discount_rate(0.0).is_ok());
        assert!(validate_discount_rate(0.1).is_ok());
        assert!(validate_discount_rate(0.999).is_ok());

        assert!(validate_discount_rate(1.0).is_err());
        assert!(validate_discount_rate(-0.1).is_err());
        assert!(validate_discount_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_coupon() {
        assert!(validate_coupon(&coupon(CouponDiscount::Amount(2000.0))).is_ok());
        assert!(validate_coupon(&coupon(CouponDiscount::Amount(0.0))).is_ok());
        assert!(validate_coupon(&coupon(CouponDiscount::Amount(-1.0))).is_err());

        assert!(validate_coupon(&coupon(CouponDiscount::Percentage(0.0))).is_ok());
        assert!(validate_coupon(&coupon(CouponDiscount::Percentage(100.0))).is_ok());
        assert!(validate_coupon(&coupon(CouponDiscount::Percentage(101.0))).is_err());
        assert!(validate_coupon(&coupon(CouponDiscount::Percentage(-5.0))).is_err());
        assert!(validate_coupon(&coupon(CouponDiscount::Percentage(f64::NAN))).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(99).is_ok());
        assert!(validate_cart_size(100).is_err());
    }
}
