use crate::error::WalletError;
use ethers::types::{Address, U256};

/// Decimals of the native asset on every supported chain.
pub const NATIVE_DECIMALS: u32 = 18;

/// Fractional digits shown for balances.
pub const BALANCE_DISPLAY_PLACES: u32 = 4;

pub fn format_ether(wei: U256) -> String {
    ethers::utils::format_units(wei, "ether").unwrap_or_else(|_| "0.0".to_string())
}

/// Render a smallest-unit amount with a fixed number of fractional digits.
///
/// Digits past `places` are dropped, never rounded up, so a displayed balance
/// is never more than what the account holds.
pub fn truncate_units(amount: U256, decimals: u32, places: u32) -> String {
    let places = places.min(decimals);
    let unit = U256::exp10(decimals as usize);
    let whole = amount / unit;
    if places == 0 {
        return whole.to_string();
    }
    let fraction = (amount % unit) / U256::exp10((decimals - places) as usize);
    format!(
        "{}.{:0width$}",
        whole,
        fraction.as_u64(),
        width = places as usize
    )
}

/// Balance as shown on the wallet page: 4 truncated decimals.
pub fn format_balance(wei: U256) -> String {
    truncate_units(wei, NATIVE_DECIMALS, BALANCE_DISPLAY_PLACES)
}

/// Parse a decimal string of native units (e.g. "0.25") into wei.
///
/// String parsing keeps full precision; user input never goes through f64.
pub fn parse_native_amount(input: &str) -> Result<U256, WalletError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(WalletError::MissingFields);
    }
    if trimmed.starts_with('-') {
        return Err(WalletError::InvalidAmount(trimmed.to_string()));
    }
    // More fractional digits than wei can hold would be dropped silently.
    if let Some((_, fraction)) = trimmed.split_once('.') {
        if fraction.len() > NATIVE_DECIMALS as usize {
            return Err(WalletError::InvalidAmount(trimmed.to_string()));
        }
    }
    ethers::utils::parse_ether(trimmed).map_err(|_| WalletError::InvalidAmount(trimmed.to_string()))
}

/// Shorten an address for display: `0x1234...abcd`.
pub fn format_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Full lowercase `0x`-prefixed hex form of an address.
pub fn address_hex(address: &Address) -> String {
    format!("0x{}", hex::encode(address.as_bytes()))
}

/// Accepts what web3's `isAddress` accepts: optional `0x`, 40 hex digits,
/// and a valid EIP-55 checksum when the letters are mixed case.
pub fn is_valid_address(input: &str) -> bool {
    let body = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    if body.len() != 40 || !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return true;
    }

    let bytes = match hex::decode(body) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    let checksummed = ethers::utils::to_checksum(&Address::from_slice(&bytes), None);
    checksummed.trim_start_matches("0x") == body
}

/// Validate and parse a recipient address.
pub fn parse_address(input: &str) -> Result<Address, WalletError> {
    let trimmed = input.trim();
    if !is_valid_address(trimmed) {
        return Err(WalletError::InvalidAddress);
    }
    let body = &trimmed[trimmed.len() - 40..];
    let bytes = hex::decode(body).map_err(|_| WalletError::InvalidAddress)?;
    Ok(Address::from_slice(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOWER: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
    const CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn test_format_ether_one_eth() {
        let wei = U256::from(10u64.pow(18));
        assert_eq!(format_ether(wei), "1.000000000000000000");
    }

    // ==================== format_balance tests ====================

    #[test]
    fn test_format_balance_one_and_a_half() {
        let wei = U256::from(1_500_000_000_000_000_000u64);
        assert_eq!(format_balance(wei), "1.5000");
    }

    #[test]
    fn test_format_balance_zero() {
        assert_eq!(format_balance(U256::zero()), "0.0000");
    }

    #[test]
    fn test_format_balance_truncates() {
        let wei = U256::from(1_999_999_999_999_999_999u64);
        assert_eq!(format_balance(wei), "1.9999");
    }

    #[test]
    fn test_format_balance_dust_is_zero() {
        assert_eq!(format_balance(U256::from(99_999_999_999_999u64)), "0.0000");
        assert_eq!(format_balance(U256::from(100_000_000_000_000u64)), "0.0001");
    }

    #[test]
    fn test_format_balance_large() {
        let wei = U256::from(123_456u64) * U256::exp10(18) + U256::from(7u64) * U256::exp10(15);
        assert_eq!(format_balance(wei), "123456.0070");
    }

    #[test]
    fn test_truncate_units_zero_places() {
        let wei = U256::from(2_900_000_000_000_000_000u64);
        assert_eq!(truncate_units(wei, 18, 0), "2");
    }

    #[test]
    fn test_truncate_units_places_capped_at_decimals() {
        assert_eq!(truncate_units(U256::from(15u64), 1, 4), "1.5");
    }

    // ==================== parse_native_amount tests ====================

    #[test]
    fn test_parse_native_amount_fractional() {
        let result = parse_native_amount("0.5").unwrap();
        assert_eq!(result, U256::from(5u64) * U256::from(10u64.pow(17)));
    }

    #[test]
    fn test_parse_native_amount_with_whitespace() {
        let result = parse_native_amount("  1.5  ").unwrap();
        assert_eq!(result, U256::from(15u64) * U256::from(10u64.pow(17)));
    }

    #[test]
    fn test_parse_native_amount_high_precision() {
        let result = parse_native_amount("0.123456789012345678").unwrap();
        assert_eq!(result, U256::from(123456789012345678u64));
    }

    #[test]
    fn test_parse_native_amount_empty() {
        assert_eq!(parse_native_amount("   "), Err(WalletError::MissingFields));
    }

    #[test]
    fn test_parse_native_amount_rejects_garbage() {
        assert!(matches!(parse_native_amount("abc"), Err(WalletError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_native_amount_rejects_negative() {
        assert_eq!(
            parse_native_amount("-1"),
            Err(WalletError::InvalidAmount("-1".to_string()))
        );
    }

    #[test]
    fn test_parse_native_amount_rejects_sub_wei_precision() {
        assert_eq!(
            parse_native_amount("0.1234567890123456789"),
            Err(WalletError::InvalidAmount("0.1234567890123456789".to_string()))
        );
    }

    #[test]
    fn test_parse_native_amount_accepts_full_wei_precision() {
        assert_eq!(
            parse_native_amount("0.000000000000000001"),
            Ok(U256::one())
        );
    }

    // ==================== format_address tests ====================

    #[test]
    fn test_format_address_shape() {
        let short = format_address(LOWER);
        assert_eq!(short, "0x5aae...eaed");
        assert_eq!(short.len(), 13);
    }

    #[test]
    fn test_format_address_empty() {
        assert_eq!(format_address(""), "");
    }

    #[test]
    fn test_format_address_output_is_not_an_address() {
        let short = format_address(LOWER);
        assert!(!is_valid_address(&short));
        // Re-parsing the full address reproduces the same short form.
        let reparsed = parse_address(LOWER).unwrap();
        assert_eq!(format_address(&address_hex(&reparsed)), short);
    }

    // ==================== address validation tests ====================

    #[test]
    fn test_is_valid_address_lowercase() {
        assert!(is_valid_address(LOWER));
    }

    #[test]
    fn test_is_valid_address_uppercase_body() {
        assert!(is_valid_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED"));
    }

    #[test]
    fn test_is_valid_address_without_prefix() {
        assert!(is_valid_address(&LOWER[2..]));
    }

    #[test]
    fn test_is_valid_address_checksum() {
        assert!(is_valid_address(CHECKSUMMED));
    }

    #[test]
    fn test_is_valid_address_bad_checksum() {
        assert!(!is_valid_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD"));
    }

    #[test]
    fn test_is_valid_address_too_short() {
        assert!(!is_valid_address("0x123"));
    }

    #[test]
    fn test_is_valid_address_non_hex() {
        assert!(!is_valid_address("0xzzaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
    }

    #[test]
    fn test_parse_address_round_trips_to_lowercase() {
        let addr = parse_address(CHECKSUMMED).unwrap();
        assert_eq!(address_hex(&addr), LOWER);
    }

    #[test]
    fn test_parse_address_invalid() {
        assert_eq!(parse_address("0x123"), Err(WalletError::InvalidAddress));
    }
}
