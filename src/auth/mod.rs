//! # Backend Authentication
//!
//! Payload construction for the auth bootstrap. Signup uses a time-seeded
//! email so repeated runs against the same backend do not collide; login
//! carries the fixed fallback account used when signup is rejected.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{json, Value};

/// Profile submitted to `auth/signup`.
#[derive(Debug, Clone)]
pub struct SignupProfile {
    pub email: String,
    pub password: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub gender_preference: String,
    pub location: String,
}

impl SignupProfile {
    /// Fresh profile with an email derived from the current time.
    pub fn generated() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or(0);
        Self {
            email: format!("test_{seed}@example.com"),
            password: "TestPass123!".to_string(),
            name: "Test User".to_string(),
            age: 25,
            gender: "male".to_string(),
            gender_preference: "female".to_string(),
            location: "New York".to_string(),
        }
    }

    /// Wire payload with the backend's camelCase field names.
    pub fn to_payload(&self) -> Value {
        json!({
            "email": self.email,
            "password": self.password,
            "name": self.name,
            "age": self.age,
            "gender": self.gender,
            "genderPreference": self.gender_preference,
            "location": self.location,
        })
    }
}

/// Credentials for the login fallback when signup is rejected.
pub fn fallback_credentials() -> Value {
    json!({
        "email": "test@example.com",
        "password": "password123",
    })
}
