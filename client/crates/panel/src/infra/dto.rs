//! Backend Wire DTOs
//!
//! Request and response bodies for the session backend. Field names follow
//! the backend's contract; `idToken` is the one camelCase holdout.

use serde::{Deserialize, Serialize};

use crate::domain::entity::SessionUser;
use crate::domain::gateway::CredentialGrant;

/// POST /auth/register request body
#[derive(Debug, Serialize)]
pub struct RegisterBody {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub photo_url: Option<String>,
}

/// POST /auth/login request body
#[derive(Debug, Serialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// POST /auth/firebase-login request body
#[derive(Debug, Serialize)]
pub struct TokenBody {
    #[serde(rename = "idToken")]
    pub id_token: String,
}

/// Response body carrying a custom token and the user record
#[derive(Debug, Deserialize)]
pub struct GrantBody {
    pub firebase_token: String,
    pub user: SessionUser,
}

impl From<GrantBody> for CredentialGrant {
    fn from(body: GrantBody) -> Self {
        CredentialGrant {
            custom_token: body.firebase_token,
            user: body.user,
        }
    }
}

/// Response body wrapping a bare user record
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: SessionUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_body_photo_url_nullable() {
        let body = RegisterBody {
            email: "a@b.co".into(),
            password: "secret".into(),
            display_name: "Ada".into(),
            photo_url: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""photo_url":null"#));

        let body = RegisterBody {
            photo_url: Some("https://storage/user_photos/a@b.co".into()),
            ..body
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""photo_url":"https://storage/user_photos/a@b.co""#));
    }

    #[test]
    fn test_token_body_uses_camel_case() {
        let json = serde_json::to_string(&TokenBody {
            id_token: "tok".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"idToken":"tok"}"#);
    }

    #[test]
    fn test_grant_body_into_credential_grant() {
        let body: GrantBody = serde_json::from_str(
            r#"{
                "firebase_token": "custom-token",
                "user": {"uid":"u1","name":"Ada","email":"a@b.co","provider":"password"}
            }"#,
        )
        .unwrap();
        let grant = CredentialGrant::from(body);
        assert_eq!(grant.custom_token, "custom-token");
        assert_eq!(grant.user.uid.as_str(), "u1");
    }
}
