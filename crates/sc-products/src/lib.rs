//! # sc-products
//!
//! Interest-rate products valued against an
//! [`AnalyticModel`](sc_curves::AnalyticModel): swap legs, swaps, swap
//! annuities, and forward rate agreements.
//!
//! Products hold curve *names*, not curves.  Every valuation resolves the
//! names in the model it is given, so the same product can be valued
//! against a re-calibrated model without being rebuilt.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The product valuation trait.
pub mod analytic_product;

/// Forward rate agreements.
pub mod forward_rate_agreement;

/// Swaps and the par swap rate.
pub mod swap;

/// Swap annuities.
pub mod swap_annuity;

/// Swap legs.
pub mod swap_leg;

pub use analytic_product::AnalyticProduct;
pub use forward_rate_agreement::ForwardRateAgreement;
pub use swap::{forward_swap_rate, Swap};
pub use swap_annuity::{swap_annuity, swap_annuity_from_forward_curve, SwapAnnuity};
pub use swap_leg::SwapLeg;
