//! Badge classifier: link substring first, plain keywords second.

use estatehub_entity::notification::{Notification, RouteBucket};

use super::Classifier;
use super::patterns::{BADGE_KEYWORDS, BADGE_PATHS};

/// Resolves which sidebar badge a notification counts towards.
///
/// Never yields [`RouteBucket::Properties`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BadgeClassifier;

impl Classifier for BadgeClassifier {
    fn classify(&self, notification: &Notification) -> Option<RouteBucket> {
        if let Some(link) = notification.link() {
            if let Some(bucket) = BADGE_PATHS
                .into_iter()
                .find(|bucket| link.contains(bucket.path()))
            {
                return Some(bucket);
            }
        }

        let text = notification.search_text();
        BADGE_KEYWORDS
            .into_iter()
            .find(|(keyword, _)| text.contains(keyword))
            .map(|(_, bucket)| bucket)
    }
}

#[cfg(test)]
mod tests {
    use estatehub_entity::notification::NotificationData;

    use super::*;

    fn notification(link: Option<&str>, title: &str) -> Notification {
        Notification {
            data: Some(NotificationData {
                link: link.map(str::to_string),
                title: Some(title.to_string()),
                message: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_link_matches_anywhere() {
        let n = notification(Some("https://app.example.ph/agent/chat/7"), "");
        assert_eq!(BadgeClassifier.classify(&n), Some(RouteBucket::Chat));
    }

    #[test]
    fn test_link_path_priority() {
        let n = notification(Some("/chat/inquiries/1"), "");
        assert_eq!(BadgeClassifier.classify(&n), Some(RouteBucket::Inquiries));
    }

    #[test]
    fn test_properties_link_is_not_badged() {
        let n = notification(Some("/properties/4"), "Listing approved");
        assert_eq!(BadgeClassifier.classify(&n), None);
    }

    #[test]
    fn test_plain_substring_keywords() {
        let n = notification(None, "Ideal home for you");
        assert_eq!(BadgeClassifier.classify(&n), Some(RouteBucket::Deals));

        let n = notification(None, "Tripping tomorrow");
        assert_eq!(BadgeClassifier.classify(&n), Some(RouteBucket::Trippings));
    }

    #[test]
    fn test_keyword_priority() {
        let n = notification(None, "New message about your inquiry");
        assert_eq!(BadgeClassifier.classify(&n), Some(RouteBucket::Inquiries));
    }

    #[test]
    fn test_no_match() {
        let n = notification(None, "Welcome aboard");
        assert_eq!(BadgeClassifier.classify(&n), None);
    }
}
