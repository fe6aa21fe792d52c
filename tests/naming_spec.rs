use feature_scaffold::config::MAX_BRANCH_BYTES;
use feature_scaffold::naming::{clamp, derive, sanitize};
use speculate2::speculate;

const SAMPLES: &[&str] = &[
    "",
    "-",
    "Hello World",
    "  --Leading and trailing--  ",
    "feat/JIRA-1234: Fix the thing!!",
    "ÜBER cool façade",
    "a--b---c",
    "tabs\tand\nnewlines",
    "123 456",
    "___",
];

fn is_clean_token(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
}

speculate! {
    describe "sanitize" {
        it "is idempotent" {
            for sample in SAMPLES {
                let once = sanitize(sample);
                assert_eq!(sanitize(&once), once, "input: {:?}", sample);
            }
        }

        it "produces only lowercase alphanumerics and single interior hyphens" {
            for sample in SAMPLES {
                let token = sanitize(sample);
                assert!(is_clean_token(&token), "input: {:?} -> {:?}", sample, token);
            }
        }

        it "normalizes a user-supplied short name" {
            assert_eq!(sanitize("User Auth / v2"), "user-auth-v2");
            assert_eq!(sanitize("-Already-Clean-"), "already-clean");
        }
    }

    describe "derive" {
        it "keeps all four words when exactly four are meaningful" {
            assert_eq!(
                derive("Add OAuth2 integration for the external API"),
                "oauth2-integration-external-api"
            );
        }

        it "keeps only the first three when five are meaningful" {
            assert_eq!(
                derive("Add OAuth2 integration for the external API now"),
                "oauth2-integration-external"
            );
        }

        it "keeps a short word that appears as an uppercase acronym" {
            assert_eq!(derive("Add AI support"), "ai-support");
        }

        it "drops a short word that is not an acronym in the source" {
            assert_eq!(derive("Add ai support"), "support");
        }

        it "does not treat a mixed-case word as an acronym" {
            assert_eq!(derive("Build Ui dashboard"), "build-dashboard");
        }

        it "falls back to the sanitized description when everything is filtered" {
            let name = derive("to the of a");
            assert_eq!(name, "to-the-of");
            assert!(!name.is_empty());
        }

        it "is deterministic" {
            let description = "I want to create a Real-Time chat for the support team";
            assert_eq!(derive(description), derive(description));
            assert_eq!(derive(description), "create-real-time");
        }

        it "always returns a clean token" {
            for sample in SAMPLES {
                let name = derive(sample);
                assert!(is_clean_token(&name), "input: {:?} -> {:?}", sample, name);
            }
        }
    }

    describe "clamp" {
        it "leaves names within the cap untouched" {
            let name = "a".repeat(MAX_BRANCH_BYTES);
            let (clamped, truncation) = clamp(&name, MAX_BRANCH_BYTES);
            assert_eq!(clamped, name);
            assert!(truncation.is_none());
        }

        it "truncates to the cap and strips a dangling hyphen" {
            let name = sanitize(&"abc-".repeat(80));
            let (clamped, truncation) = clamp(&name, MAX_BRANCH_BYTES);

            assert!(clamped.len() <= MAX_BRANCH_BYTES);
            assert_eq!(clamped.len(), 243);
            assert!(is_clean_token(&clamped));

            let truncation = truncation.expect("should report truncation");
            assert_eq!(truncation.original, name);
            assert_eq!(truncation.original_bytes, name.len());
            assert_eq!(truncation.truncated, clamped);
            assert_eq!(truncation.truncated_bytes, 243);
        }

        it "cuts exactly at the cap when no hyphen is left behind" {
            let name = sanitize(&"abcd-".repeat(60));
            let (clamped, _) = clamp(&name, MAX_BRANCH_BYTES);
            assert_eq!(clamped.len(), MAX_BRANCH_BYTES);
            assert!(clamped.ends_with("abcd"));
        }
    }
}
