//! Property tests for the redeploy decision.

use proptest::prelude::*;

use multideployer::config::AppSpec;
use multideployer::domain::entities::DeployState;

fn release() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-f0-9]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After recording a release, only force or a new release
    /// triggers a deploy.
    #[test]
    fn property_recorded_release_is_skipped(
        recorded in release(),
        wanted in release(),
        app_force in any::<bool>(),
        run_force in any::<bool>(),
    ) {
        let mut state = DeployState::new();
        state.record("web".to_string(), recorded.clone());

        let app = AppSpec::new("web", wanted.clone(), "github://acme/web").with_force(app_force);
        let expected = app_force || run_force || recorded != wanted;
        prop_assert_eq!(state.needs_deploy(&app, run_force), expected);
    }

    /// PROPERTY: Apps absent from the state are always deployed.
    #[test]
    fn property_unknown_app_is_deployed(wanted in release(), run_force in any::<bool>()) {
        let state = DeployState::new();
        let app = AppSpec::new("web", wanted, "github://acme/web");
        prop_assert!(state.needs_deploy(&app, run_force));
    }
}
