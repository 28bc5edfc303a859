// File: crates/pile-chart-core/tests/resolver.rs
// Purpose: Configuration resolution is total over the declared table and fails closed outside it.

use pile_chart_core::assets::{resolve_background, resolve_footer, SCALE_RATIOS};
use pile_chart_core::{ChartError, PileSize};

#[test]
fn every_declared_pair_resolves() {
    for size in [PileSize::M030, PileSize::M050] {
        for ratio in SCALE_RATIOS {
            let id = resolve_background(size, ratio)
                .unwrap_or_else(|e| panic!("{size} {ratio} should resolve: {e}"));
            assert!(id.as_str().ends_with(".jpg"));
        }
    }
}

#[test]
fn background_paths_match_the_asset_directory_layout() {
    let id = resolve_background(PileSize::M030, "1:30").unwrap();
    assert_eq!(id.as_str(), "03M/3M-1_30.jpg");

    let id = resolve_background(PileSize::M050, "1:150").unwrap();
    assert_eq!(id.as_str(), "05M/5M-1_150.jpg");
}

#[test]
fn undeclared_pair_fails_closed() {
    // No silent default-image substitution.
    let err = resolve_background(PileSize::M030, "1:25").unwrap_err();
    match err {
        ChartError::UnknownConfiguration { pile_size, scale_ratio } => {
            assert_eq!(pile_size, PileSize::M030);
            assert_eq!(scale_ratio, "1:25");
        }
        other => panic!("expected UnknownConfiguration, got {other}"),
    }

    assert!(resolve_background(PileSize::M050, "").is_err());
    assert!(resolve_background(PileSize::M050, "1-30").is_err());
}

#[test]
fn footer_is_total_over_pile_sizes() {
    assert_eq!(resolve_footer(PileSize::M030).as_str(), "Footer/Latter3m.jpg");
    assert_eq!(resolve_footer(PileSize::M050).as_str(), "Footer/Latter5m.jpg");
}
