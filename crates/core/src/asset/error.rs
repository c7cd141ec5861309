//! Disposal error types.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Errors from the fixed-asset disposal workflow.
#[derive(Debug, Error)]
pub enum DisposalError {
    /// Asset not found.
    #[error("Fixed asset not found: {0}")]
    AssetNotFound(Uuid),

    /// Asset has already been disposed of.
    #[error("Fixed asset {0} has already been disposed")]
    AlreadyDisposed(Uuid),

    /// Selling price cannot be negative.
    #[error("Selling price cannot be negative: {0}")]
    NegativeSellingPrice(Decimal),

    /// Asset cost on record is not positive; the books are inconsistent.
    #[error("Asset cost price on record is not positive: {0}")]
    InvalidCostPrice(Decimal),
}

impl DisposalError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AssetNotFound(_) => "ASSET_NOT_FOUND",
            Self::AlreadyDisposed(_) => "ASSET_ALREADY_DISPOSED",
            Self::NegativeSellingPrice(_) => "NEGATIVE_SELLING_PRICE",
            Self::InvalidCostPrice(_) => "INVALID_COST_PRICE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::AssetNotFound(_) => 404,
            Self::NegativeSellingPrice(_) => 400,
            Self::AlreadyDisposed(_) | Self::InvalidCostPrice(_) => 422,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_codes() {
        assert_eq!(DisposalError::AssetNotFound(Uuid::nil()).http_status_code(), 404);
        assert_eq!(DisposalError::AlreadyDisposed(Uuid::nil()).http_status_code(), 422);
        assert_eq!(
            DisposalError::NegativeSellingPrice(dec!(-1)).http_status_code(),
            400
        );
    }
}
