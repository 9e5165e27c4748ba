use super::*;

// =============================================================
// Stagger
// =============================================================

#[test]
fn stagger_scales_with_index() {
    assert_eq!(stagger_ms(0, 50), 0);
    assert_eq!(stagger_ms(3, 50), 150);
}

#[test]
fn stagger_saturates() {
    assert_eq!(stagger_ms(usize::MAX, 50), u32::MAX);
    assert_eq!(stagger_ms(100_000_000, 100), u32::MAX);
}

#[test]
fn card_delay_is_css_milliseconds() {
    assert_eq!(card_delay(0, 100), "0ms");
    assert_eq!(card_delay(4, 100), "400ms");
}

// =============================================================
// Parallax
// =============================================================

#[test]
fn parallax_transform_scales_scroll() {
    assert_eq!(parallax_transform(0.0, 0.3), "translateY(0px)");
    assert_eq!(parallax_transform(10.0, 0.5), "translateY(5px)");
    assert_eq!(parallax_transform(200.0, 0.25), "translateY(50px)");
}

// =============================================================
// Typewriter
// =============================================================

#[test]
fn typewriter_yields_growing_prefixes() {
    let frames: Vec<String> = Typewriter::new("Ana").collect();
    assert_eq!(frames, vec!["A", "An", "Ana"]);
}

#[test]
fn typewriter_handles_multibyte_text() {
    let frames: Vec<String> = Typewriter::new("Núñez").collect();
    assert_eq!(frames.len(), 5);
    assert_eq!(frames[1], "Nú");
    assert_eq!(frames.last().map(String::as_str), Some("Núñez"));
}

#[test]
fn typewriter_empty_text_is_done() {
    let mut tw = Typewriter::new("");
    assert!(tw.is_done());
    assert_eq!(tw.next(), None);
}
