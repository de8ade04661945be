//! Keyword tables shared by the classifiers.

use std::sync::LazyLock;

use regex::Regex;

use estatehub_entity::notification::RouteBucket;

/// Word-boundary patterns in priority order. Text is lowercased before
/// matching.
///
/// Boundaries are ASCII-only (`(?-u:\b)`): accented letters such as `é`
/// count as non-word characters, so `dealé` still matches `deal`.
pub static ROUTE_PATTERNS: LazyLock<Vec<(RouteBucket, Regex)>> = LazyLock::new(|| {
    [
        (RouteBucket::Inquiries, r"(?-u:\b)(inquiry|inquiries|lead|leads)(?-u:\b)"),
        (
            RouteBucket::Trippings,
            r"(?-u:\b)(tripping|trippings|visit|visits|site[\s-]?visit|scheduled tripping)(?-u:\b)",
        ),
        (
            RouteBucket::Deals,
            r"(?-u:\b)(deal|deals|offer|offers|agreement|agreements|reservation|reservations|closed[\s-]deal)(?-u:\b)",
        ),
        (RouteBucket::Chat, r"(?-u:\b)(message|messages|chat|replied|responded)(?-u:\b)"),
        (
            RouteBucket::Properties,
            r"(?-u:\b)(property|properties|listing|listings|new[\s-]property)(?-u:\b)",
        ),
    ]
    .into_iter()
    .map(|(bucket, pattern)| {
        let regex = Regex::new(pattern).unwrap_or_else(|e| panic!("invalid {bucket} pattern: {e}"));
        (bucket, regex)
    })
    .collect()
});

/// Link paths checked by the badge rules, in priority order.
pub const BADGE_PATHS: [RouteBucket; 4] = [
    RouteBucket::Inquiries,
    RouteBucket::Chat,
    RouteBucket::Trippings,
    RouteBucket::Deals,
];

/// Plain substring keywords checked by the badge rules, in priority order.
pub const BADGE_KEYWORDS: [(&str, RouteBucket); 4] = [
    ("inquiry", RouteBucket::Inquiries),
    ("tripping", RouteBucket::Trippings),
    ("deal", RouteBucket::Deals),
    ("message", RouteBucket::Chat),
];
