//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Cart rule violations                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  The pricing calculators themselves never error: they are total        │
//! │  functions, and malformed numeric input degrades silently. Errors      │
//! │  exist only at the cart boundary and in the opt-in validators.         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller → user-facing message     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, limits, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart rule violations.
///
/// These should be caught by the caller and translated to user-friendly
/// messages next to the offending control.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No cart line matches the given product id.
    #[error("Product not found in cart: {0}")]
    ProductNotFound(String),

    /// The requested quantity exceeds what the cart can still take.
    ///
    /// ## When This Occurs
    /// - Adding more units than the product's remaining stock
    ///   (stock minus what the cart already holds)
    ///
    /// ```text
    /// Add to cart (qty: 2)
    ///      │
    ///      ▼
    /// remaining stock: 1
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Coke", available: 1, requested: 2 }
    ///      │
    ///      ▼
    /// UI shows: "Only 1 Coke left"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Cart has exceeded maximum allowed unique lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced only by the opt-in validators in [`crate::validation`], for
/// callers that construct reference data. The calculators never raise these.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
