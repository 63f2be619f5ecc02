//! End-to-end acceptance scenarios.
//!
//! Each test walks a complete path through the core: human or JSON input,
//! arithmetic or codec work in the middle, wire output at the end.

use serde_json::json;
use xrpkit_core::{
    Amount, Currency, FormatOptions, QualityOptions, Seed, UInt160, XrpkitError,
};

const ISSUER: &str = "rfrv1ZsP1K9vcy2jdsEWrmpM6YPgPXMjX";

#[test]
fn human_xrp_becomes_drops_json() {
    let amount = Amount::from_human("XRP 250", None).unwrap();
    assert_eq!(amount.to_json(), json!("250000000"));
}

#[test]
fn issued_object_renders_trimmed_text() {
    let amount = Amount::from_json(&json!({
        "value": "100.40",
        "currency": "USD",
        "issuer": ISSUER,
    }))
    .unwrap();
    assert_eq!(amount.to_text(), "100.4");
    assert_eq!(amount.issuer().to_address(), ISSUER);
}

#[test]
fn quality_decodes_to_usd_per_xrp() {
    // 5e-6 USD per drop on the wire; 5 USD per XRP after the drops
    // adjustment for the native base.
    let opts = QualityOptions {
        base_currency: Some(Currency::Native),
        ..QualityOptions::default()
    };
    let price = Amount::from_quality(
        "4F11C37937E08000",
        &Currency::from_json("USD").unwrap(),
        &UInt160::from_json(ISSUER),
        &opts,
    )
    .unwrap();
    let value: f64 = price.to_text().parse().unwrap();
    assert!((value - 5.0).abs() < 1e-15);
    assert_eq!(price.to_text(), "5");
}

#[test]
fn quality_raw_decode_keeps_drops() {
    let opts = QualityOptions {
        xrp_as_drops: true,
        ..QualityOptions::default()
    };
    let value = Amount::from_quality(
        "5D0364B9E3B00064",
        &Currency::from_json("USD").unwrap(),
        &UInt160::from_json(ISSUER),
        &opts,
    )
    .unwrap();
    assert_eq!(value.to_text(), "95517448.1821796");
}

#[test]
fn human_xrp_multiplied_by_drops() {
    let amount = Amount::from_human("25.2 XRP", None).unwrap();
    assert_eq!(amount.to_text(), "25200000");

    let product = amount.multiply("4").unwrap();
    assert_eq!(product.to_text(), "100800000");
}

#[test]
fn ratio_human_compensates_for_drops() {
    // 100 USD per 10 XRP (10^7 drops) is 10 USD per XRP.
    let price = Amount::from_json_text(&format!("100/USD/{}", ISSUER))
        .unwrap()
        .ratio_human("10000000", None)
        .unwrap();
    assert_eq!(price.to_text(), "10");
    assert_eq!(price.currency().to_json(), "USD");
    assert_eq!(price.issuer().to_address(), ISSUER);

    // Both sides native: the result tracks the numerator's unit, so the
    // drops compensation surfaces through native rendering.
    let native = Amount::from_json_text("210")
        .unwrap()
        .ratio_human("10", None)
        .unwrap();
    assert!(native.is_native());
    assert_eq!(native.to_human(&FormatOptions::default()).unwrap(), "21");
}

#[test]
fn passphrase_seed_matches_well_known_encoding() {
    let seed = Seed::from_json("masterpassphrase");
    assert_eq!(seed.to_json(), "snoPBrXtMeMyMHUVTgbuqAfg1SUTb");
}

#[test]
fn native_range_is_enforced() {
    // 10^11 XRP is accepted, 10^12 is not.
    assert!(Amount::from_human("100000000000 XRP", None).is_ok());
    assert!(matches!(
        Amount::from_human("1000000000000 XRP", None),
        Err(XrpkitError::OutOfRange(_))
    ));
}

#[test]
fn issued_range_is_enforced() {
    assert!(Amount::from_json_text(&format!("1e-81/USD/{}", ISSUER)).is_ok());
    assert!(matches!(
        Amount::from_json_text(&format!("1e-82/USD/{}", ISSUER)),
        Err(XrpkitError::Underflow)
    ));
}

#[test]
fn interest_bearing_payment_round_trips() {
    // A demurring currency: parse at present value, format back at the
    // same reference date, and the face value reappears.
    let xau = Currency::from_human("XAU (-0.5%pa)").unwrap();
    let date = 443_845_330;
    let figure = format!("10 {}", xau.to_hex());

    let amount = Amount::from_human(&figure, Some(date)).unwrap();
    assert!(amount.is_valid());
    // Demurrage means the present value exceeds the face value.
    let stored: f64 = amount.to_text().parse().unwrap();
    assert!(stored > 10.0);

    let opts = FormatOptions {
        reference_date: Some(date),
        precision: Some(6),
        group_sep: None,
        ..FormatOptions::default()
    };
    let shown: f64 = amount.to_human(&opts).unwrap().parse().unwrap();
    assert!((shown - 10.0).abs() < 1e-5);
}
