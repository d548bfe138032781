use rust_decimal::Decimal;

use crate::core::round2;
use crate::modules::fees::models::FeeBreakdown;

/// Commission and fixed-fee calculation on a gross booking amount
pub struct FeeCalculator;

impl FeeCalculator {
    /// Calculate the platform fees deducted from `amount`.
    ///
    /// `commission_rate` is a percentage (`5` for 5%, not `0.05`). Each derived
    /// field is rounded half-up to 2 decimals on its own: the commission first,
    /// then the total with the fixed fee added, then the net amount.
    ///
    /// Negative amounts are not a supported input; they produce a well-defined
    /// but meaningless breakdown rather than an error.
    ///
    /// Arithmetic saturates at `Decimal::MAX`/`Decimal::MIN` instead of
    /// overflowing, so extreme inputs (huge amounts, or amounts so small that
    /// the fee share exceeds the decimal range) still yield a breakdown.
    pub fn calculate_fees(
        amount: Decimal,
        commission_rate: Decimal,
        fixed_fee: Decimal,
    ) -> FeeBreakdown {
        let commission = round2(amount.saturating_mul(commission_rate) / Decimal::ONE_HUNDRED);
        let total_fees = round2(commission.saturating_add(fixed_fee));
        let net_amount = round2(amount.saturating_sub(total_fees)).max(Decimal::ZERO);

        let fee_percentage = if amount > Decimal::ZERO {
            let share = total_fees
                .checked_div(amount)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::MAX);
            round2(share)
        } else {
            Decimal::ZERO
        };

        FeeBreakdown {
            original_amount: amount,
            commission_rate,
            commission,
            fixed_fee,
            total_fees,
            net_amount,
            fee_percentage,
        }
    }
}
