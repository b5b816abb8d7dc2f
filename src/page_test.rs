use super::*;

#[test]
fn fade_in_while_loading() {
    assert!(fade_in_needed("loading"));
    assert!(fade_in_needed("interactive"));
}

#[test]
fn no_fade_in_after_load() {
    // Starting after `load` must not hide the body: no listener would show it again.
    assert!(!fade_in_needed("complete"));
}
