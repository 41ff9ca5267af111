use super::*;

#[test]
fn mount_state_waits_for_boot() {
    let gates = Gates::at_mount(true);
    assert!(gates.hero_visible);
    assert!(!gates.booted);
    assert!(!gates.is_open());
}

#[test]
fn every_gate_must_be_open() {
    let open = Gates { booted: true, hero_visible: true, tab_visible: true };
    assert!(open.is_open());
    assert!(!Gates { booted: false, ..open }.is_open());
    assert!(!Gates { hero_visible: false, ..open }.is_open());
    assert!(!Gates { tab_visible: false, ..open }.is_open());
}
