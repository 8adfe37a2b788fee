use crate::catalog::domain::{CanonicalLicense, LicenseGuess};
use crate::ports::outbound::LicenseClassifier;

/// Fallback name for licenses that cannot be classified
pub const UNDETERMINED_NAME: &str = "Undetermined";

/// Normalized words of a raw license name
///
/// Lowercased, split on anything that is not alphanumeric, and with a
/// leading `v` dropped from version words (`v2` → `2`).
struct Words(Vec<String>);

impl Words {
    fn of(raw: &str) -> Self {
        let words = raw
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(|word| match word.strip_prefix('v') {
                Some(rest) if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) => {
                    rest.to_string()
                }
                _ => word.to_string(),
            })
            .collect();
        Self(words)
    }

    fn has(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }

    fn has_phrase(&self, phrase: &str) -> bool {
        let phrase: Vec<&str> = phrase.split(' ').collect();
        self.0
            .windows(phrase.len())
            .any(|window| window.iter().zip(&phrase).all(|(a, b)| a == b))
    }

    fn has_any(&self, words: &[&str]) -> bool {
        words.iter().any(|word| self.has(word))
    }
}

struct Rule {
    key: &'static str,
    name: &'static str,
    url: &'static str,
    matches: fn(&Words) -> bool,
}

fn is_lgpl(w: &Words) -> bool {
    w.has("lgpl")
        || w.has_phrase("lesser general public")
        || w.has_phrase("library general public")
}

fn is_gpl(w: &Words) -> bool {
    !is_lgpl(w) && !w.has("affero") && (w.has("gpl") || w.has_phrase("general public license"))
}

fn is_epl(w: &Words) -> bool {
    w.has("epl") || w.has_phrase("eclipse public")
}

fn is_mpl(w: &Words) -> bool {
    w.has("mpl") || w.has_phrase("mozilla public")
}

/// Rules are tried in order; the first match wins
const RULES: &[Rule] = &[
    Rule {
        key: "apache-2.0",
        name: "Apache License 2.0",
        url: "https://www.apache.org/licenses/LICENSE-2.0",
        matches: |w| (w.has("apache") || w.has("asl")) && w.has("2") && !w.has("1"),
    },
    Rule {
        key: "mit",
        name: "MIT License",
        url: "https://opensource.org/licenses/MIT",
        matches: |w| w.has("mit") || w.has("expat"),
    },
    Rule {
        key: "bsd-3-clause",
        name: "BSD 3-Clause License",
        url: "https://opensource.org/licenses/BSD-3-Clause",
        matches: |w| w.has("bsd") && w.has_any(&["3", "new", "revised"]),
    },
    Rule {
        key: "bsd-2-clause",
        name: "BSD 2-Clause License",
        url: "https://opensource.org/licenses/BSD-2-Clause",
        matches: |w| w.has("bsd") && w.has_any(&["2", "simplified", "freebsd"]),
    },
    Rule {
        key: "isc",
        name: "ISC License",
        url: "https://opensource.org/licenses/ISC",
        matches: |w| w.has("isc"),
    },
    Rule {
        key: "epl-2.0",
        name: "Eclipse Public License 2.0",
        url: "https://www.eclipse.org/legal/epl-2.0/",
        matches: |w| is_epl(w) && w.has("2"),
    },
    Rule {
        key: "epl-1.0",
        name: "Eclipse Public License 1.0",
        url: "https://www.eclipse.org/legal/epl-v10.html",
        matches: |w| is_epl(w) && w.has("1"),
    },
    Rule {
        key: "mpl-2.0",
        name: "Mozilla Public License 2.0",
        url: "https://www.mozilla.org/en-US/MPL/2.0/",
        matches: |w| is_mpl(w) && w.has("2"),
    },
    Rule {
        key: "lgpl-3.0",
        name: "GNU Lesser General Public License v3.0",
        url: "https://www.gnu.org/licenses/lgpl-3.0.html",
        matches: |w| is_lgpl(w) && w.has("3"),
    },
    Rule {
        key: "lgpl-2.1",
        name: "GNU Lesser General Public License v2.1",
        url: "https://www.gnu.org/licenses/old-licenses/lgpl-2.1.html",
        matches: |w| is_lgpl(w) && w.has("2"),
    },
    Rule {
        key: "gpl-3.0",
        name: "GNU General Public License v3.0",
        url: "https://www.gnu.org/licenses/gpl-3.0.html",
        matches: |w| is_gpl(w) && w.has("3"),
    },
    Rule {
        key: "gpl-2.0",
        name: "GNU General Public License v2.0",
        url: "https://www.gnu.org/licenses/old-licenses/gpl-2.0.html",
        matches: |w| is_gpl(w) && w.has("2"),
    },
    Rule {
        key: "cddl-1.0",
        name: "Common Development and Distribution License 1.0",
        url: "https://opensource.org/licenses/CDDL-1.0",
        matches: |w| w.has("cddl") || w.has_phrase("common development and distribution"),
    },
    Rule {
        key: "unlicense",
        name: "The Unlicense",
        url: "https://unlicense.org/",
        matches: |w| w.has("unlicense"),
    },
    Rule {
        key: "cc0-1.0",
        name: "Creative Commons Zero v1.0 Universal",
        url: "https://creativecommons.org/publicdomain/zero/1.0/",
        matches: |w| w.has("cc0") || w.has_phrase("creative commons zero"),
    },
    Rule {
        key: "android-sdk",
        name: "Android Software Development Kit License",
        url: "https://developer.android.com/studio/terms.html",
        matches: |w| {
            w.has_phrase("android software development kit") || w.has_phrase("android sdk license")
        },
    },
];

/// KnownLicenseClassifier adapter matching raw names against well-known licenses
///
/// Matching is word based and tolerant of punctuation, casing and the usual
/// wording variants ("The Apache Software License, Version 2.0", "ASL 2.0",
/// "Apache-2.0"). Names without a version where one is needed, or absent
/// names, stay undetermined.
pub struct KnownLicenseClassifier;

impl KnownLicenseClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KnownLicenseClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseClassifier for KnownLicenseClassifier {
    fn classify(&self, raw_name: Option<&str>) -> LicenseGuess {
        let undetermined = || LicenseGuess::Undetermined {
            fallback_name: UNDETERMINED_NAME.to_string(),
            fallback_url: String::new(),
        };

        let Some(raw_name) = raw_name else {
            return undetermined();
        };

        let words = Words::of(raw_name);
        RULES
            .iter()
            .find(|rule| (rule.matches)(&words))
            .map(|rule| LicenseGuess::Known(CanonicalLicense::new(rule.name, rule.url, rule.key)))
            .unwrap_or_else(undetermined)
    }
}
