//! Property tests for configuration validation.

use proptest::prelude::*;

use multideployer::config::{parse_config, ConfigFormatError};

fn app_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("app-[a-z0-9]{1,12}").unwrap()
}

fn release() -> impl Strategy<Value = String> {
    proptest::string::string_regex("v[0-9][a-z0-9.]{0,10}").unwrap()
}

fn app_yaml(name: &str, release: &str) -> String {
    format!(
        "  - name: {}\n    release: {}\n    source: github://acme/{}\n",
        name, release, name
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary text never panics the parser.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = parse_config(&s);
    }

    /// PROPERTY: Any numeric version other than 1 is rejected.
    #[test]
    fn property_other_versions_rejected(
        major in prop_oneof![Just(0u32), 2u32..10_000],
        minor in 0u32..100,
    ) {
        let content = format!("version: {}.{}\napps:\n{}", major, minor, app_yaml("web", "v1"));
        let result = parse_config(&content);
        let is_unsupported = matches!(result, Err(ConfigFormatError::UnsupportedVersion { .. }));
        prop_assert!(is_unsupported);
    }

    /// PROPERTY: Distinct valid apps parse back in file order.
    #[test]
    fn property_valid_apps_keep_order(
        names in proptest::collection::btree_set(app_name(), 1..8),
        rel in release(),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mut content = String::from("version: 1.0\napps:\n");
        for name in &names {
            content.push_str(&app_yaml(name, &rel));
        }

        let (config, unknown) = parse_config(&content).unwrap();
        let parsed: Vec<&str> = config.apps().iter().map(|a| a.name.as_str()).collect();
        prop_assert_eq!(parsed, names.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert!(unknown.is_empty());
        prop_assert!(config.apps().iter().all(|a| !a.force));
    }

    /// PROPERTY: Repeating any app name fails, wherever the repeat sits.
    #[test]
    fn property_duplicate_names_rejected(
        names in proptest::collection::btree_set(app_name(), 1..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let dup = pick.get(&names).clone();
        let mut content = String::from("version: 1\napps:\n");
        for name in &names {
            content.push_str(&app_yaml(name, "v1"));
        }
        content.push_str(&app_yaml(&dup, "v2"));

        let result = parse_config(&content);
        let is_duplicate = matches!(result, Err(ConfigFormatError::DuplicateName { .. }));
        prop_assert!(is_duplicate);
    }

    /// PROPERTY: Blanking any required field fails validation.
    #[test]
    fn property_blank_required_field_rejected(
        field in prop_oneof![Just("name"), Just("release"), Just("source")],
        blank in prop_oneof![Just("\"\""), Just("''"), Just("\"   \""), Just("~"), Just("")],
    ) {
        let mut values = vec![
            ("name", "web".to_string()),
            ("release", "v1".to_string()),
            ("source", "github://acme/web".to_string()),
        ];
        for entry in values.iter_mut() {
            if entry.0 == field {
                entry.1 = blank.to_string();
            }
        }
        let mut content = String::from("version: 1.0\napps:\n");
        for (i, (key, value)) in values.iter().enumerate() {
            let lead = if i == 0 { "  - " } else { "    " };
            content.push_str(&format!("{}{}: {}\n", lead, key, value));
        }

        let result = parse_config(&content);
        let is_empty = matches!(result, Err(ConfigFormatError::EmptyField { .. }));
        prop_assert!(is_empty, "content:\n{}\nresult: {:?}", content, result.map(|_| ()));
    }
}
