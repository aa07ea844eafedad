//! Ticket-index bounds and the wide-integer solvency floor.
//!
//! The proving field has no total order, so the deposit comparison happens in
//! explicit wide unsigned arithmetic. The two numeric domains meet only at
//! the ticket-index promotion below; amounts never enter the field and field
//! elements never enter amount arithmetic.

use ff::PrimeField as _;
use num_bigint::BigUint;
use pasta_curves::pallas;
use zcred_core::base::Amount;

use crate::error::KernelError;

/// Convert a ticket-index field element into the bounded integer domain.
///
/// # Errors
/// Returns [`KernelError::TicketIndexConversionFailed`] if the canonical
/// encoding has any bit set above the low 32.
pub fn ticket_index_to_u32(ticket_index: pallas::Base) -> Result<u32, KernelError> {
    let repr = ticket_index.to_repr();
    let (low, high) = repr.split_at(4);
    if high.iter().any(|&byte| byte != 0) {
        return Err(KernelError::TicketIndexConversionFailed);
    }
    let bytes: [u8; 4] = low
        .try_into()
        .map_err(|_| KernelError::TicketIndexConversionFailed)?;
    Ok(u32::from_le_bytes(bytes))
}

/// Enforce the strict zero-based range `ticket_index < user_message_limit`.
///
/// Index 0 is valid and an index equal to the limit is not: the quota is
/// exhausted after exactly `user_message_limit` uses.
///
/// # Errors
/// Returns [`KernelError::TicketIndexOutOfRange`] on violation.
pub const fn check_ticket_range(
    ticket_index: u32,
    user_message_limit: u32,
) -> Result<(), KernelError> {
    if ticket_index < user_message_limit {
        Ok(())
    } else {
        Err(KernelError::TicketIndexOutOfRange {
            index: ticket_index,
            limit: user_message_limit,
        })
    }
}

/// Enforce the solvency floor `(ticket_index + 1) * class_price <= deposit`.
///
/// The `+ 1` makes the floor inclusive of the current ticket: ticket 0
/// already requires one class price of deposit. `BigUint` arithmetic is
/// unbounded, so a product exceeding 2^256 - 1 simply exceeds every
/// representable deposit and rejects.
///
/// # Errors
/// Returns [`KernelError::InsufficientDeposit`] on violation.
#[allow(
    clippy::arithmetic_side_effects,
    reason = "BigUint arithmetic is unbounded and cannot overflow"
)]
pub fn check_solvency(
    ticket_index: u32,
    class_price: &Amount,
    deposit: &Amount,
) -> Result<(), KernelError> {
    let tickets = BigUint::from(ticket_index) + BigUint::from(1_u32);
    let required = tickets * class_price.to_biguint();
    if required <= deposit.to_biguint() {
        Ok(())
    } else {
        Err(KernelError::InsufficientDeposit)
    }
}
