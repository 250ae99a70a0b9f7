use super::*;

#[test]
fn group_thousands_inserts_separators() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(67_000), "67,000");
    assert_eq!(group_thousands(1_250_000), "1,250,000");
}

#[test]
fn format_price_uses_millions() {
    assert_eq!(format_price(12_500_000), "$12.5M");
    assert_eq!(format_price(6_800_000), "$6.8M");
    assert_eq!(format_price(300_000), "$0.3M");
}

#[test]
fn format_difference_signs_gains_only() {
    assert_eq!(format_difference(300_000), "+$0.3M");
    assert_eq!(format_difference(-700_000), "$0.7M");
    assert_eq!(format_difference(0), "$0.0M");
}

#[test]
fn format_compact_picks_unit() {
    assert_eq!(format_compact(2_890_000_000_000), "2890.0B");
    assert_eq!(format_compact(2_890_000_000), "2.9B");
    assert_eq!(format_compact(1_260_000), "1.3M");
    assert_eq!(format_compact(1_700_000), "1.7M");
    assert_eq!(format_compact(42_000), "42,000");
}

#[test]
fn accuracy_tier_thresholds() {
    assert_eq!(AccuracyTier::from_percent(96.6), AccuracyTier::High);
    assert_eq!(AccuracyTier::from_percent(95.0), AccuracyTier::High);
    assert_eq!(AccuracyTier::from_percent(94.4), AccuracyTier::Medium);
    assert_eq!(AccuracyTier::from_percent(90.0), AccuracyTier::Medium);
    assert_eq!(AccuracyTier::from_percent(89.9), AccuracyTier::Low);
}

#[test]
fn accuracy_badge_only_excellent_at_top() {
    assert_eq!(AccuracyTier::High.badge(), "Excellent");
    assert_eq!(AccuracyTier::Medium.badge(), "Good");
    assert_eq!(AccuracyTier::Low.badge(), "Good");
}
