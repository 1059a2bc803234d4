#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use portfolio_wasm::helix::HelixRow;
use portfolio_wasm::schedule::FrameScheduler;
use portfolio_wasm::viewport;

wasm_bindgen_test_configure!(run_in_browser);

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[wasm_bindgen_test]
fn strands_mirror_around_the_centerline() {
    let width = 1280.0;
    let center = HelixRow::centerline(width);

    for step in 0..200 {
        let y = f64::from(step) * 20.0;
        let row = HelixRow::at(y, 1.3, width);
        assert!(
            approx_eq(row.front_x + row.back_x, 2.0 * center, 1e-9),
            "front={} back={} center={}",
            row.front_x,
            row.back_x,
            center
        );
    }
}

#[wasm_bindgen_test]
fn row_visuals_stay_in_range() {
    for step in 0..500 {
        let row = HelixRow::at(f64::from(step) * 7.0, 0.42, 990.0);
        assert!((0.0..=1.0).contains(&row.depth), "depth={}", row.depth);
        assert!((2.0..=4.0).contains(&row.dot_size), "dot={}", row.dot_size);
        assert!((0.2..=1.0).contains(&row.alpha), "alpha={}", row.alpha);
    }
}

#[wasm_bindgen_test]
fn scheduler_holds_half_rate_against_sixty_hz_input() {
    // 45fps target against a 60Hz tick source settles on every other tick.
    let mut scheduler = FrameScheduler::new(45.0);
    let mut accepted = 0;
    for tick in 0..=600 {
        if scheduler.tick(f64::from(tick) * (1000.0 / 60.0)) {
            accepted += 1;
        }
    }
    assert_eq!(accepted, 300);
}

#[wasm_bindgen_test]
fn width_gates_are_strict() {
    assert!(!viewport::animation_enabled(768.0));
    assert!(viewport::animation_enabled(768.5));
    assert!(!viewport::parallax_enabled(992.0));
    assert!(viewport::parallax_enabled(992.5));
}
