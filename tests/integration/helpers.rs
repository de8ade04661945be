//! Shared fixtures for integration tests.

#![allow(dead_code)]

use estatehub_inbox::view::PagePayload;

/// Viewing user in the fixtures (a buyer).
pub const BUYER_ID: i64 = 10;

/// A page-load payload shaped like the buyer dashboard's.
pub fn dashboard_payload() -> PagePayload {
    serde_json::from_value(serde_json::json!({
        "notifications": [
            {
                "id": "7f1c0d2e-0001",
                "data": {
                    "link": "/inquiries/42",
                    "title": "Inquiry accepted",
                    "message": "Your inquiry for Azure Residences was accepted."
                },
                "read_at": null
            },
            {
                "id": "7f1c0d2e-0002",
                "data": {
                    "link": "/trippings/7",
                    "title": "Tripping confirmed",
                    "message": "Site visit on Saturday 10:00."
                }
            },
            {
                "id": "7f1c0d2e-0003",
                "title": "New message from agent",
                "message": "Maria replied to your question."
            },
            {
                "id": "7f1c0d2e-0004",
                "data": { "title": "Deal update", "message": "The seller countered your offer." },
                "read_at": "2024-06-02T08:00:00.000000Z"
            },
            {
                "id": "7f1c0d2e-0005",
                "data": { "link": "/properties/19", "title": "Price drop" }
            },
            {
                "id": "7f1c0d2e-0006",
                "data": { "title": "Welcome to EstateHub" }
            }
        ],
        "channels": [
            {
                "id": 1,
                "members": [
                    { "id": 10, "name": "Juan Buyer" },
                    { "id": 20, "name": "Maria Agent" }
                ],
                "subject": { "id": 42, "title": "Azure Residences 2BR", "description": "Paranaque condo" },
                "messages": [
                    { "id": 1, "sender_id": 10, "content": "Is parking included?", "created_at": "2024-06-01T09:00:00.000000Z", "read_at": "2024-06-01T09:05:00Z" },
                    { "id": 3, "sender_id": 20, "content": "Yes, one slot.", "created_at": "2024-06-01T09:30:00.000000Z" },
                    { "id": 2, "sender_id": 20, "content": "Hello Juan!", "created_at": "2024-06-01T09:10:00.000000Z" }
                ]
            },
            {
                "id": 2,
                "members": [
                    { "id": 30, "name": "Pedro Broker" },
                    { "id": 10, "name": "Juan Buyer" },
                    { "id": 20, "name": "Maria Agent" }
                ],
                "subject": { "id": 77, "title": "Tagaytay Lot", "description": "300 sqm" },
                "messages": []
            },
            {
                "id": 3,
                "members": [
                    { "id": 10, "name": "Juan Buyer" }
                ],
                "subject": null
            }
        ]
    }))
    .expect("fixture payload should deserialize")
}
