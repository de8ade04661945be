//! Integration tests for notification routing and sidebar badges.

mod helpers;

use estatehub_core::config::AppConfig;
use estatehub_core::config::inbox::LinkMatch;
use estatehub_core::types::UserId;
use estatehub_entity::notification::RouteBucket;
use estatehub_inbox::classifier::{BadgeClassifier, Classifier, RouteClassifier};
use estatehub_inbox::counts::{UnreadCounts, build_counts, build_unread_counts};
use estatehub_inbox::view::InboxView;

#[test]
fn test_routes_for_dashboard_notifications() {
    let payload = helpers::dashboard_payload();
    let routes: Vec<Option<RouteBucket>> = payload
        .notifications
        .iter()
        .map(estatehub_inbox::classify)
        .collect();

    assert_eq!(
        routes,
        vec![
            Some(RouteBucket::Inquiries),
            Some(RouteBucket::Trippings),
            Some(RouteBucket::Chat),
            Some(RouteBucket::Deals),
            Some(RouteBucket::Properties),
            None,
        ]
    );
}

#[test]
fn test_badge_counts_all_and_unread() {
    let payload = helpers::dashboard_payload();

    let all = build_counts(&payload.notifications);
    assert_eq!(
        all,
        UnreadCounts {
            chat: 1,
            inquiries: 1,
            trippings: 1,
            deals: 1,
        }
    );

    let unread = build_unread_counts(&payload.notifications);
    assert_eq!(unread.deals, 0);
    assert_eq!(unread.total(), 3);
    assert!(all.total() as usize <= payload.notifications.len());
}

#[test]
fn test_classifiers_diverge_on_substrings() {
    let payload = helpers::dashboard_payload();
    // "Welcome to EstateHub": no whole-word keyword, no substring keyword.
    let welcome = &payload.notifications[5];
    assert_eq!(RouteClassifier::default().classify(welcome), None);
    assert_eq!(BadgeClassifier.classify(welcome), None);

    let idea: estatehub_entity::notification::Notification =
        serde_json::from_value(serde_json::json!({ "title": "An ideal starter home" }))
            .expect("deserialize");
    assert_eq!(RouteClassifier::default().classify(&idea), None);
    assert_eq!(BadgeClassifier.classify(&idea), Some(RouteBucket::Deals));
}

#[test]
fn test_inbox_view_end_to_end() {
    let payload = helpers::dashboard_payload();
    let view = InboxView::derive(&payload, UserId(helpers::BUYER_ID), "", &AppConfig::default());

    assert_eq!(view.notifications.len(), 6);
    assert_eq!(view.counts.total(), 3);
    assert_eq!(view.channels.len(), 3);

    let chat_link = view
        .links
        .iter()
        .find(|l| l.bucket == RouteBucket::Chat)
        .expect("chat link");
    assert_eq!(chat_link.badge, 1);

    let json = serde_json::to_value(&view).expect("serialize");
    assert_eq!(json["counts"]["trippings"], 1);
    assert_eq!(json["notifications"][4]["bucket"], "properties");
    assert!(json["notifications"][5]["bucket"].is_null());
}

#[test]
fn test_segment_mode_from_config() {
    let mut config = AppConfig::default();
    config.inbox.link_match = LinkMatch::Segment;
    let classifier = RouteClassifier::from_config(&config.inbox);

    let archived: estatehub_entity::notification::Notification =
        serde_json::from_value(serde_json::json!({
            "data": { "link": "/deals-history/3", "title": "Closed deal archived" }
        }))
        .expect("deserialize");

    // Falls through to the keyword patterns instead of the link.
    assert_eq!(classifier.classify(&archived), Some(RouteBucket::Deals));

    let archived_plain: estatehub_entity::notification::Notification =
        serde_json::from_value(serde_json::json!({
            "data": { "link": "/deals-history/3", "title": "Archived" }
        }))
        .expect("deserialize");
    assert_eq!(classifier.classify(&archived_plain), None);
    assert_eq!(
        RouteClassifier::default().classify(&archived_plain),
        Some(RouteBucket::Deals)
    );
}
