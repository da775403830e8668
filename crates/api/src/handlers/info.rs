//! Static informational endpoints
//!
//! Fixed content maintained alongside the site; no input, no storage access,
//! no failure modes.

use axum::Json;
use serde_json::{json, Value};

/// GET / — liveness message
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "NEUST Museum API Running" }))
}

/// GET /api/about — organization profile
pub async fn about() -> Json<Value> {
    Json(json!({
        "name": "NEUST Museum",
        "tagline": "Preserving history, inspiring discovery.",
        "history": "The NEUST Museum curates a diverse collection of artifacts spanning culture, technology, and the environment. Our mission is to educate and inspire through immersive exhibits and community programs.",
        "mission": "To conserve, research, and share artifacts that connect people with the past and future.",
        "vision": "A world where learning from history shapes a sustainable and innovative future.",
        "contact": {
            "email": "info@neustmuseum.edu",
            "phone": "+1 (555) 123-4567",
            "address": "123 University Ave, Science City",
        },
    }))
}

/// GET /api/visit — visiting hours, location, contact, and ticket prices
pub async fn visit() -> Json<Value> {
    Json(json!({
        "hours": [
            { "days": "Mon-Fri", "time": "9:00 AM - 6:00 PM" },
            { "days": "Sat", "time": "10:00 AM - 5:00 PM" },
            { "days": "Sun", "time": "Closed" },
        ],
        "location": {
            "address": "123 University Ave, Science City",
            "map": "https://maps.google.com/?q=NEUST+Museum",
        },
        "contact": {
            "email": "visit@neustmuseum.edu",
            "phone": "+1 (555) 987-6543",
        },
        "tickets": {
            "general": 10,
            "students": 5,
            "children": 0,
        },
    }))
}
