//! Account address validation.
//!
//! Accounts are 56 characters of RFC 4648 base-32 (`A–Z`, `2–7`) beginning
//! with `G`. Checksums are not verified here; that belongs to the ledger.

use crate::error::GatewayError;

/// Length of an account address.
pub const ADDRESS_LEN: usize = 56;

/// Leading character of every account address.
pub const ACCOUNT_PREFIX: char = 'G';

fn is_base32(c: char) -> bool {
    c.is_ascii_uppercase() || ('2'..='7').contains(&c)
}

/// Check the shape of `address`.
///
/// # Examples
///
/// ```
/// use repute_gateway::validate_address;
///
/// assert!(validate_address("GDA44RZOXHV7LSDAJ7EPWS6JPBTKMJ7SDELR7XMEBQ4PZTPOKQRIPZU2").is_ok());
/// assert!(validate_address("GSHORT").is_err());
/// ```
pub fn validate_address(address: &str) -> Result<(), GatewayError> {
    let len = address.chars().count();
    if len != ADDRESS_LEN {
        return Err(GatewayError::InvalidAddress(format!(
            "must be exactly {ADDRESS_LEN} characters, got {len}"
        )));
    }
    if !address.starts_with(ACCOUNT_PREFIX) {
        return Err(GatewayError::InvalidAddress(format!(
            "must start with '{ACCOUNT_PREFIX}'"
        )));
    }
    if let Some(bad) = address.chars().find(|c| !is_base32(*c)) {
        return Err(GatewayError::InvalidAddress(format!("invalid character '{bad}'")));
    }
    Ok(())
}

pub fn is_valid_address(address: &str) -> bool {
    validate_address(address).is_ok()
}
