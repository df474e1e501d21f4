use showcase_test_support::ids::SequentialIds;
use showcase_ui::core::config::ConfigError;
use showcase_ui::core::disclosure::{DisclosureController, DisclosureOptions};
use showcase_ui::core::ids::{IdGenerator, UuidIds};
use showcase_ui::ShowcaseConfig;

#[test]
fn configured_prefix_feeds_generated_identities() {
    let config = ShowcaseConfig::from_json(r#"{"disclosure": {"id_prefix": "faq"}}"#).unwrap();
    let mut ids = UuidIds::new(config.disclosure.id_prefix.clone());
    let controller = DisclosureController::with_generator(DisclosureOptions::default(), &mut ids);
    assert!(controller.identity().starts_with("faq-"));
    assert!(controller.header_id().ends_with("-header"));
}

#[test]
fn malformed_document_reports_parse_error() {
    let err = ShowcaseConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn defaults_are_valid() {
    let config = ShowcaseConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.theme.media_query, "(prefers-color-scheme: dark)");

    let mut ids = SequentialIds::new(config.disclosure.id_prefix);
    assert_eq!(ids.generate(), "accordion-item-0");
}
