//! Property tests for source URI handling.

use proptest::prelude::*;

use multideployer::domain::value_objects::SourceLocator;
use multideployer::MultideployerError;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,128}") {
        let _ = SourceLocator::parse(&s);
    }

    /// PROPERTY: github sources map to the repository tarball endpoint.
    #[test]
    fn property_github_source_maps_to_tarball(
        owner in segment(),
        repo in segment(),
        release in "[a-f0-9]{7,40}",
    ) {
        let locator = SourceLocator::parse(&format!("github://{}/{}", owner, repo)).unwrap();
        let url = locator.tarball_url(&release, None).unwrap();
        prop_assert_eq!(
            url.as_str(),
            format!("https://api.github.com/repos/{}/{}/tarball/{}", owner, repo, release)
        );
    }

    /// PROPERTY: Any other scheme is unsupported.
    #[test]
    fn property_other_schemes_unsupported(
        scheme in "[a-z][a-z0-9]{1,8}".prop_filter("not github", |s| s != "github"),
        owner in segment(),
        repo in segment(),
    ) {
        let result = SourceLocator::parse(&format!("{}://{}/{}", scheme, owner, repo));
        let is_unsupported = matches!(result, Err(MultideployerError::UnsupportedSource { .. }));
        prop_assert!(is_unsupported);
    }
}
