// Host-side tests for the glitch title reveal.

use portfolio_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_glitch(target: &str, seed: u64) -> GlitchText<StdRng> {
    let config = GlitchConfig {
        target: target.to_string(),
        ..GlitchConfig::default()
    };
    GlitchText::new(&config, StdRng::seed_from_u64(seed))
}

/// Run one full cycle, collecting every emitted frame.
fn run_cycle(g: &mut GlitchText<StdRng>) -> Vec<String> {
    g.begin_cycle();
    let mut frames = Vec::new();
    while let Some(text) = g.tick() {
        frames.push(text.to_string());
        assert!(frames.len() < 10_000, "reveal never finished");
    }
    frames
}

#[test]
fn resolves_to_target_after_three_ticks_per_char() {
    let target = DEFAULT_GLITCH_TARGET;
    let len = target.chars().count();
    let mut g = make_glitch(target, 11);
    let frames = run_cycle(&mut g);

    // emissions at progress 0, 1/3, ..., len: 3 * len + 1 ticks
    assert_eq!(frames.len(), 3 * len + 1);
    assert_ne!(frames[3 * len - 1], target);
    assert_eq!(frames[3 * len], target);
    assert_eq!(frames.last().map(String::as_str), Some(target));
    assert_eq!(g.phase(), GlitchPhase::Idle);
    assert_eq!(g.text(), target);
}

#[test]
fn resolved_prefix_grows_left_to_right() {
    let target = DEFAULT_GLITCH_TARGET;
    let expected: Vec<char> = target.chars().collect();
    let mut g = make_glitch(target, 12);
    for (k, frame) in run_cycle(&mut g).iter().enumerate() {
        let chars: Vec<char> = frame.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            if (i + 1) * TICKS_PER_CHAR <= k {
                assert_eq!(*c, expected[i], "tick {k} position {i} should be locked");
            } else {
                assert!(
                    DEFAULT_GLITCH_ALPHABET.contains(*c),
                    "tick {k} position {i} should be noise, got {c:?}"
                );
            }
        }
    }
}

#[test]
fn cannot_match_target_before_last_position_locks() {
    // '_' and '.' are not in the noise alphabet, so the text can only equal
    // the target once the final '.' has had its three ticks.
    let target = DEFAULT_GLITCH_TARGET;
    let len = target.chars().count();
    let mut g = make_glitch(target, 13);
    let frames = run_cycle(&mut g);
    let first_match = frames.iter().position(|f| f == target).expect("resolves");
    assert_eq!(first_match, len * TICKS_PER_CHAR);
}

#[test]
fn position_locks_only_after_its_third_tick() {
    let config = GlitchConfig {
        target: "AB".to_string(),
        alphabet: "x".to_string(),
        ..GlitchConfig::default()
    };
    let mut g = GlitchText::new(&config, StdRng::seed_from_u64(18));
    let frames = run_cycle(&mut g);
    assert_eq!(frames, ["xx", "xx", "xx", "Ax", "Ax", "Ax", "AB"]);
}

#[test]
fn visible_length_never_changes() {
    let target = "héllo wörld";
    let len = target.chars().count();
    let mut g = make_glitch(target, 14);
    for _ in 0..3 {
        for frame in run_cycle(&mut g) {
            assert_eq!(frame.chars().count(), len);
        }
    }
}

#[test]
fn revealed_chars_advance_by_a_third() {
    let mut g = make_glitch("ABCD", 15);
    g.begin_cycle();
    assert_eq!(g.revealed_chars(), 0.0);
    g.tick();
    g.tick();
    g.tick();
    assert_eq!(g.revealed_chars(), 1.0);
    g.tick();
    assert!((g.revealed_chars() - 4.0 / 3.0).abs() < 1e-6);
}

#[test]
fn new_cycle_restarts_mid_reveal() {
    let mut g = make_glitch("RESTART", 16);
    g.begin_cycle();
    for _ in 0..10 {
        g.tick();
    }
    assert!(g.revealed_chars() > 3.0);
    g.begin_cycle();
    assert_eq!(g.revealed_chars(), 0.0);
    assert_eq!(g.phase(), GlitchPhase::Revealing);
    let frames = {
        let mut v = Vec::new();
        while let Some(t) = g.tick() {
            v.push(t.to_string());
        }
        v
    };
    assert_eq!(frames.len(), 3 * 7 + 1);
}

#[test]
fn idle_tick_is_a_no_op() {
    let mut g = make_glitch("IDLE", 17);
    run_cycle(&mut g);
    assert!(g.tick().is_none());
    assert_eq!(g.text(), "IDLE");
}

#[test]
fn default_config_matches_page_timing() {
    let config = GlitchConfig::default();
    assert_eq!(config.cycle_ms, 5000);
    assert_eq!(config.tick_ms, 30);
    assert_eq!(config.target, "SYSTEM_BUILDING...");
}
