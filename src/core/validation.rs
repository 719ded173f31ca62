use std::str::FromStr;

use ethers::types::Address;
use ethers::utils::to_checksum;

/// Validates a target address string and parses it.
///
/// Accepts a `0x` prefix followed by 40 hex digits. All-lowercase and
/// all-uppercase bodies pass as-is; a mixed-case body must carry a valid
/// EIP-55 checksum. Anything else is not an address and yields `None`.
pub fn parse_target_address(raw: &str) -> Option<Address> {
    let body = raw.strip_prefix("0x")?;
    if body.len() != 40 || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let address = Address::from_str(raw).ok()?;
    let all_lower = !body.bytes().any(|b| b.is_ascii_uppercase());
    let all_upper = !body.bytes().any(|b| b.is_ascii_lowercase());
    if all_lower || all_upper || to_checksum(&address, None) == raw {
        Some(address)
    } else {
        None
    }
}
