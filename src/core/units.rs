//! Native-unit conversions for display.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use ethers::types::U256;
use ethers::utils::format_ether;

/// Renders a wei amount as a full-precision ETH decimal string
/// (18 fractional digits, so the wei value round-trips).
pub fn wei_to_eth(wei: U256) -> String {
    format_ether(wei)
}

/// Renders a wei gas price as gwei with exactly 3 fractional digits,
/// rounded to the nearest 0.001 gwei.
pub fn wei_to_gwei(wei: U256) -> String {
    let milli = wei.saturating_add(U256::from(500_000u64)) / U256::from(1_000_000u64);
    let whole = milli / U256::from(1_000u64);
    let frac = (milli % U256::from(1_000u64)).as_u64();
    format!("{}.{:03}", whole, frac)
}

/// ISO-8601 with millisecond precision and a trailing `Z`.
pub fn iso_millis(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Converts a unix timestamp in seconds to the ISO rendering above.
/// Returns `None` for values outside the representable date range.
pub fn unix_to_iso(secs: u64) -> Option<String> {
    let secs = i64::try_from(secs).ok()?;
    Utc.timestamp_opt(secs, 0).single().map(iso_millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::utils::parse_ether;
    use proptest::prelude::*;

    #[test]
    fn one_eth_renders_with_full_precision() {
        let wei = U256::from_dec_str("1000000000000000000").unwrap();
        assert_eq!(wei_to_eth(wei), "1.000000000000000000");
    }

    #[test]
    fn fractional_eth_keeps_every_digit() {
        let wei = U256::from_dec_str("1500000000000000001").unwrap();
        assert_eq!(wei_to_eth(wei), "1.500000000000000001");
    }

    #[test]
    fn gwei_rounds_to_nearest_thousandth() {
        assert_eq!(wei_to_gwei(U256::from(1_000_000_000u64)), "1.000");
        assert_eq!(wei_to_gwei(U256::from(1_234_567_890u64)), "1.235");
        assert_eq!(wei_to_gwei(U256::from(1_234_499_999u64)), "1.234");
        assert_eq!(wei_to_gwei(U256::zero()), "0.000");
        assert_eq!(wei_to_gwei(U256::from(999_999u64)), "0.001");
        assert_eq!(wei_to_gwei(U256::from(499_999u64)), "0.000");
    }

    #[test]
    fn unix_to_iso_known_instant() {
        assert_eq!(unix_to_iso(0).unwrap(), "1970-01-01T00:00:00.000Z");
        assert_eq!(unix_to_iso(1_700_000_000).unwrap(), "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn unix_to_iso_rejects_out_of_range() {
        assert!(unix_to_iso(u64::MAX).is_none());
    }

    proptest! {
        #[test]
        fn eth_rendering_round_trips(raw in any::<u128>()) {
            let wei = U256::from(raw);
            let rendered = wei_to_eth(wei);
            let recovered = parse_ether(rendered.as_str()).unwrap();
            prop_assert_eq!(wei, recovered);
        }

        #[test]
        fn gwei_rendering_has_three_fraction_digits(raw in any::<u128>()) {
            let rendered = wei_to_gwei(U256::from(raw));
            let (_, frac) = rendered.split_once('.').unwrap();
            prop_assert_eq!(frac.len(), 3);
            prop_assert!(frac.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
