use std::collections::HashSet;

use proptest::prelude::*;
use showcase_test_support::ids::SequentialIds;
use showcase_ui::core::disclosure::{
    DisclosureAttributes, DisclosureController, DisclosureOptions, DisclosureRole,
};

fn controller(default_open: bool, disabled: bool) -> DisclosureController {
    DisclosureController::new(DisclosureOptions {
        default_open,
        disabled,
        id: None,
    })
}

proptest! {
    #[test]
    fn enabled_toggles_alternate(default_open in any::<bool>(), toggles in 0usize..64) {
        let mut controller = controller(default_open, false);
        for _ in 0..toggles {
            controller.toggle();
        }
        prop_assert_eq!(controller.is_open(), default_open ^ (toggles % 2 == 1));
    }

    #[test]
    fn disabled_toggles_never_change_state(default_open in any::<bool>(), toggles in 0usize..64) {
        let mut controller = controller(default_open, true);
        for _ in 0..toggles {
            controller.toggle();
            prop_assert_eq!(controller.is_open(), default_open);
        }
    }

    #[test]
    fn region_visibility_tracks_open_state(default_open in any::<bool>(), toggles in 0usize..16) {
        let mut controller = controller(default_open, false);
        for _ in 0..toggles {
            controller.toggle();
            prop_assert_eq!(controller.region().visible, controller.is_open());
        }
    }
}

#[test]
fn generated_identities_do_not_collide() {
    let mut seen = HashSet::with_capacity(10_000);
    for _ in 0..10_000 {
        let controller = controller(false, false);
        assert!(controller.identity().starts_with("accordion-item-"));
        assert!(seen.insert(controller.header_id().to_string()));
    }
}

#[test]
fn element_ids_are_stable_across_toggles() {
    let mut controller = controller(false, false);
    let header = controller.header_id().to_string();
    let content = controller.content_id().to_string();
    for _ in 0..5 {
        controller.toggle();
        assert_eq!(controller.trigger().id, header);
        assert_eq!(controller.region().id, content);
    }
}

#[test]
fn attribute_derivation_is_pure() {
    let controller = controller(true, false);
    let first = controller.attributes_for(DisclosureRole::Region);
    let second = controller.attributes_for(DisclosureRole::Region);
    assert_eq!(first, second);
    assert_eq!(
        controller.attributes_for(DisclosureRole::Trigger),
        controller.attributes_for(DisclosureRole::Trigger)
    );
    match first {
        DisclosureAttributes::Region(region) => assert!(region.visible),
        DisclosureAttributes::Trigger(_) => panic!("expected region attributes"),
    }
}

#[test]
fn injected_generator_supplies_identities_only_when_needed() {
    let mut ids = SequentialIds::new("faq");
    let generated = DisclosureController::with_generator(DisclosureOptions::default(), &mut ids);
    let supplied = DisclosureController::with_generator(
        DisclosureOptions::default().with_id("pricing"),
        &mut ids,
    );
    let second = DisclosureController::with_generator(DisclosureOptions::open(), &mut ids);

    assert_eq!(generated.header_id(), "faq-0-header");
    assert_eq!(supplied.content_id(), "pricing-content");
    assert_eq!(second.identity(), "faq-1");
    assert_eq!(ids.issued(), 2);
}
