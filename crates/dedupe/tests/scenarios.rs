use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, BTreeSet};
use text_block_macros::text_block_fnl;
use yarn_dedupe::{
    fix_duplicates, list_duplicates, DedupeError, DedupeOptions, InvalidConfigurationError,
    Strategy, VersionRange,
};
use yarn_dedupe_lockfile::Lockfile;
use yarn_dedupe_testing_utils::fixtures::{DISJOINT, LEFT_PAD, MIXED, MOST_COMMON, PRERELEASE};

const STRATEGIES: [Strategy; 4] =
    [Strategy::Highest, Strategy::Fewer, Strategy::FewerHighest, Strategy::MostCommon];

const FIXTURES: [&str; 5] = [LEFT_PAD, DISJOINT, MOST_COMMON, MIXED, PRERELEASE];

/// Resolved package and version of every descriptor, keyed by descriptor text.
fn resolutions(text: &str) -> BTreeMap<String, (String, String)> {
    let lockfile = Lockfile::parse(text).unwrap();
    lockfile
        .entries()
        .iter()
        .flat_map(|entry| {
            entry.keys().iter().map(|key| {
                let package = key.descriptor.package().to_string();
                (key.text.clone(), (package, entry.raw_version().to_string()))
            })
        })
        .collect()
}

/// Distinct versions of every package.
fn versions_per_package(text: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut versions = BTreeMap::<String, BTreeSet<String>>::new();
    for (package, version) in resolutions(text).into_values() {
        versions.entry(package).or_default().insert(version);
    }
    versions
}

/// Every combination of fixture, strategy and pre-release policy.
fn all_cases() -> impl Iterator<Item = (&'static str, DedupeOptions)> {
    FIXTURES.into_iter().flat_map(|text| {
        STRATEGIES.into_iter().flat_map(move |strategy| {
            [false, true].into_iter().map(move |include_prerelease| {
                let options =
                    DedupeOptions { strategy, include_prerelease, ..DedupeOptions::default() };
                (text, options)
            })
        })
    })
}

fn options(strategy: Strategy) -> DedupeOptions {
    DedupeOptions { strategy, ..DedupeOptions::default() }
}

#[test]
fn left_pad_highest() {
    let received = fix_duplicates(LEFT_PAD, &options(Strategy::Highest)).unwrap();
    let lockfile = Lockfile::parse(&received).unwrap();
    let entries = lockfile.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].raw_version(), "1.1.0");
    let keys = entries[0].keys().iter().map(|key| key.text.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, ["left-pad@^1.0.0", "left-pad@^1.1.0"]);
    assert!(!received.contains("1.0.1"));
}

#[test]
fn disjoint_ranges_untouched() {
    for strategy in STRATEGIES {
        eprintln!("CASE: {strategy}");
        assert_eq!(list_duplicates(DISJOINT, &options(strategy)).unwrap(), Vec::<String>::new());
        assert_eq!(fix_duplicates(DISJOINT, &options(strategy)).unwrap(), DISJOINT);
    }
}

#[test]
fn most_common_bar() {
    let received = fix_duplicates(MOST_COMMON, &options(Strategy::MostCommon)).unwrap();
    let expected = text_block_fnl! {
        "# yarn lockfile v1"
        ""
        ""
        "bar@1.x, \"bar@>=1.0.0 <2\", bar@^1.0.0:"
        "  version \"1.0.0\""
        "  resolved \"https://registry.yarnpkg.com/bar/-/bar-1.0.0.tgz#aa00aa00\""
    };
    assert_eq!(received, expected);
}

#[test]
fn mixed_default_strategy() {
    let received = fix_duplicates(MIXED, &DedupeOptions::default()).unwrap();
    let expected = text_block_fnl! {
        "# THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY."
        "# yarn lockfile v1"
        ""
        ""
        "\"@babel/code-frame@^7.0.0\", \"@babel/code-frame@^7.10.4\", \"@babel/code-frame@^7.8.3\":"
        "  version \"7.10.4\""
        "  resolved \"https://registry.yarnpkg.com/@babel/code-frame/-/code-frame-7.10.4.tgz\""
        "  dependencies:"
        "    \"@babel/highlight\" \"^7.10.4\""
        ""
        "\"@babel/highlight@^7.10.4\", \"@babel/highlight@^7.8.3\":"
        "  version \"7.10.4\""
        "  resolved \"https://registry.yarnpkg.com/@babel/highlight/-/highlight-7.10.4.tgz\""
        ""
        "\"@types/node@*\", \"@types/node@^14.0.0\":"
        "  version \"14.0.5\""
        "  resolved \"https://registry.yarnpkg.com/@types/node/-/node-14.0.5.tgz\""
        ""
        "debug@^4.1.0, debug@^4.1.1, debug@latest, \"my-debug@npm:debug@^4.0.0\":"
        "  version \"4.3.1\""
        "  resolved \"https://registry.yarnpkg.com/debug/-/debug-4.3.1.tgz\""
        "  dependencies:"
        "    ms \"2.1.2\""
        ""
        "ms@2.1.2, ms@^2.1.1:"
        "  version \"2.1.2\""
        "  resolved \"https://registry.yarnpkg.com/ms/-/ms-2.1.2.tgz\""
        ""
        "typescript@^4.0.0, typescript@^4.0.0-beta, typescript@^4.0.1-rc:"
        "  version \"4.0.2\""
        "  resolved \"https://registry.yarnpkg.com/typescript/-/typescript-4.0.2.tgz\""
    };
    assert_eq!(received, expected);
}

#[test]
fn prerelease_policy_changes_fewer() {
    let typescript = |include_prerelease: bool| {
        let options = DedupeOptions {
            strategy: Strategy::Fewer,
            include_prerelease,
            ..DedupeOptions::default()
        };
        let received = fix_duplicates(MIXED, &options).unwrap();
        resolutions(&received)
            .into_iter()
            .filter(|(_, (package, _))| package == "typescript")
            .map(|(descriptor, (_, version))| (descriptor, version))
            .collect::<Vec<_>>()
    };

    let pairs = |items: [(&str, &str); 3]| {
        items.map(|(descriptor, version)| (descriptor.to_string(), version.to_string())).to_vec()
    };

    assert_eq!(
        typescript(false),
        pairs([
            ("typescript@^4.0.0", "4.0.2"),
            ("typescript@^4.0.0-beta", "4.0.2"),
            ("typescript@^4.0.1-rc", "4.0.2"),
        ]),
    );
    assert_eq!(
        typescript(true),
        pairs([
            ("typescript@^4.0.0", "4.0.1-rc"),
            ("typescript@^4.0.0-beta", "4.0.1-rc"),
            ("typescript@^4.0.1-rc", "4.0.1-rc"),
        ]),
    );
}

#[test]
fn prerelease_stays_within_major() {
    let expected = text_block_fnl! {
        "# yarn lockfile v1"
        ""
        ""
        "x@1.0.1-beta, x@^1.0.0:"
        "  version \"1.0.1-beta\""
        ""
        "x@2.0.0-alpha:"
        "  version \"2.0.0-alpha\""
    };
    for strategy in STRATEGIES {
        eprintln!("CASE: {strategy}");
        let widened = DedupeOptions { strategy, include_prerelease: true, ..DedupeOptions::default() };
        assert_eq!(fix_duplicates(PRERELEASE, &widened).unwrap(), expected);
        assert_eq!(
            list_duplicates(PRERELEASE, &widened).unwrap(),
            [r#"Package "x" wants ^1.0.0 and could get 1.0.1-beta, but got 1.0.0"#],
        );

        assert_eq!(fix_duplicates(PRERELEASE, &options(strategy)).unwrap(), PRERELEASE);
    }
}

#[test]
fn prerelease_of_next_major_not_taken() {
    let text = text_block_fnl! {
        "# yarn lockfile v1"
        ""
        ""
        "foo@^1.0.0:"
        "  version \"1.0.0\""
        ""
        "foo@2.0.0-alpha:"
        "  version \"2.0.0-alpha\""
    };
    let widened = DedupeOptions { include_prerelease: true, ..options(Strategy::Highest) };
    assert_eq!(fix_duplicates(text, &widened).unwrap(), text);
    assert_eq!(list_duplicates(text, &widened).unwrap(), Vec::<String>::new());
}

#[test]
fn idempotence() {
    for (text, options) in all_cases() {
        eprintln!("CASE: {options:?}");
        let once = fix_duplicates(text, &options).unwrap();
        let twice = fix_duplicates(&once, &options).unwrap();
        assert_eq!(twice, once);
        assert_eq!(list_duplicates(&once, &options).unwrap(), Vec::<String>::new());
    }
}

#[test]
fn moved_descriptors_satisfy_their_ranges() {
    for (text, options) in all_cases() {
        eprintln!("CASE: {options:?}");
        let before = resolutions(text);
        let after = resolutions(&fix_duplicates(text, &options).unwrap());
        assert_eq!(after.keys().collect::<Vec<_>>(), before.keys().collect::<Vec<_>>());

        let lockfile = Lockfile::parse(text).unwrap();
        for entry in lockfile.entries() {
            for key in entry.keys() {
                let (_, version) = &after[&key.text];
                if version == entry.raw_version() {
                    continue;
                }
                eprintln!("CASE: {} -> {version}", key.text);
                let range = VersionRange::parse(key.descriptor.version_range());
                assert!(range.satisfies(&version.parse().unwrap(), options.include_prerelease));
            }
        }
    }
}

#[test]
fn no_new_versions() {
    for (text, options) in all_cases() {
        eprintln!("CASE: {options:?}");
        let before = versions_per_package(text);
        let after = versions_per_package(&fix_duplicates(text, &options).unwrap());
        for (package, versions) in after {
            eprintln!("CASE: {package}");
            assert!(versions.is_subset(&before[&package]));
            assert!(versions.len() <= before[&package].len());
        }
    }
}

#[test]
fn filtered_packages_keep_their_versions() {
    let configs = [
        DedupeOptions {
            exclude_packages: ["debug".to_string()].into(),
            exclude_scopes: ["@babel".to_string()].into(),
            ..DedupeOptions::default()
        },
        DedupeOptions { include_scopes: ["types".to_string()].into(), ..DedupeOptions::default() },
        DedupeOptions {
            include_packages: ["typescript".to_string()].into(),
            ..DedupeOptions::default()
        },
    ];
    for options in configs {
        eprintln!("CASE: {options:?}");
        let before = resolutions(MIXED);
        let after = resolutions(&fix_duplicates(MIXED, &options).unwrap());
        let mut changed = BTreeSet::new();
        for (descriptor, (package, version)) in &before {
            if after[descriptor].1 != *version {
                changed.insert(package.clone());
            }
        }
        assert!(!changed.is_empty());
        for package in changed {
            eprintln!("CASE: {package}");
            assert!(options.is_eligible(&package.parse().unwrap()));
        }
    }
}

#[test]
fn no_op_keeps_text() {
    let fixed = fix_duplicates(MIXED, &DedupeOptions::default()).unwrap();
    let crlf = DISJOINT.replace('\n', "\r\n");
    let without_newline = DISJOINT.trim_end();
    for text in [DISJOINT, fixed.as_str(), crlf.as_str(), without_newline] {
        eprintln!("CASE: {text:?}");
        let options = DedupeOptions::default();
        assert_eq!(list_duplicates(text, &options).unwrap(), Vec::<String>::new());
        assert_eq!(fix_duplicates(text, &options).unwrap(), text);
    }
}

#[test]
fn crlf_survives_rewrite() {
    let input = LEFT_PAD.replace('\n', "\r\n");
    let received = fix_duplicates(&input, &options(Strategy::Highest)).unwrap();
    let expected = fix_duplicates(LEFT_PAD, &options(Strategy::Highest)).unwrap().replace('\n', "\r\n");
    assert_eq!(received, expected);
}

#[test]
fn scopes_and_packages_rejected_before_parsing() {
    let options = DedupeOptions {
        include_scopes: ["@babel".to_string()].into(),
        include_packages: ["left-pad".to_string()].into(),
        ..DedupeOptions::default()
    };
    for text in [LEFT_PAD, "  not a lockfile"] {
        eprintln!("CASE: {text:?}");
        let error = fix_duplicates(text, &options).unwrap_err();
        assert!(matches!(
            error,
            DedupeError::InvalidConfiguration(InvalidConfigurationError::ScopesAndPackages)
        ));
    }
}

#[test]
fn malformed_input_fails_as_a_whole() {
    let header = "left-pad@^1.1.0:";
    let truncated = &LEFT_PAD[..LEFT_PAD.find(header).unwrap() + header.len()];
    for text in [truncated, "left-pad@^1.0.0:\n  version \"one\"\n"] {
        eprintln!("CASE: {text:?}");
        let error = fix_duplicates(text, &DedupeOptions::default()).unwrap_err();
        dbg!(&error);
        assert!(matches!(error, DedupeError::ParseLockfile(_)));
        let error = list_duplicates(text, &DedupeOptions::default()).unwrap_err();
        assert!(matches!(error, DedupeError::ParseLockfile(_)));
    }
}

#[test]
fn options_from_json() {
    let options: DedupeOptions = serde_json::from_str(
        r#"{ "strategy": "highest", "excludeScopes": ["@babel"], "includePrerelease": true }"#,
    )
    .unwrap();
    let lines = list_duplicates(MIXED, &options).unwrap();
    dbg!(&lines);
    assert!(lines.iter().all(|line| !line.contains("@babel")));
    assert!(lines.iter().any(|line| line.starts_with(r#"Package "debug""#)));
}
