use serde::Serialize;
use log::info;
use gloo_timers::future::TimeoutFuture;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Mobile,
    Pc,
    Console,
    Web,
    Other,
}

impl GameType {
    pub const ALL: [GameType; 5] = [
        GameType::Mobile,
        GameType::Pc,
        GameType::Console,
        GameType::Web,
        GameType::Other,
    ];

    /// Value used by the `<select>` option.
    pub fn value(self) -> &'static str {
        match self {
            GameType::Mobile => "mobile",
            GameType::Pc => "pc",
            GameType::Console => "console",
            GameType::Web => "web",
            GameType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameType::Mobile => "Mobile Game",
            GameType::Pc => "PC Game",
            GameType::Console => "Console Game",
            GameType::Web => "Web Game",
            GameType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    GameType,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub game_type: Option<GameType>,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::GameType => self.game_type = GameType::from_value(&value),
            Field::Message => self.message = value,
        }
    }

    /// Name, email and project details are required.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    pub fn to_request(&self) -> ContactRequest {
        let company = self.company.trim();
        ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            game_type: self.game_type,
            message: self.message.trim().to_string(),
        }
    }
}

/// The message handed to the contact endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub game_type: Option<GameType>,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }
}

/// Sends a contact request. There is no contact endpoint yet, so this waits
/// for a simulated round trip and reports success.
pub async fn submit_contact(request: ContactRequest) -> Result<(), String> {
    let payload = serde_json::to_string(&request).map_err(|e| format!("Could not encode message: {}", e))?;
    info!("Submitting contact request ({} bytes)", payload.len());
    TimeoutFuture::new(config::submit_delay_ms()).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Dana".to_string(),
            email: "dana@studio.dev".to_string(),
            company: String::new(),
            game_type: None,
            message: "Soft launch next quarter".to_string(),
        }
    }

    #[test]
    fn test_empty_form_is_incomplete() {
        assert!(!ContactForm::default().is_complete());
    }

    #[test]
    fn test_required_fields() {
        assert!(filled().is_complete());

        for field in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled();
            form.set(field, "   ".to_string());
            assert!(!form.is_complete(), "{:?} should be required", field);
        }

        let mut form = filled();
        form.set(Field::Company, String::new());
        form.set(Field::GameType, String::new());
        assert!(form.is_complete());
    }

    #[test]
    fn test_set_game_type_from_select_value() {
        let mut form = ContactForm::default();
        form.set(Field::GameType, "console".to_string());
        assert_eq!(form.game_type, Some(GameType::Console));
        form.set(Field::GameType, String::new());
        assert_eq!(form.game_type, None);
        form.set(Field::GameType, "arcade".to_string());
        assert_eq!(form.game_type, None);
    }

    #[test]
    fn test_game_type_values() {
        for game_type in GameType::ALL {
            assert_eq!(GameType::from_value(game_type.value()), Some(game_type));
        }
        assert_eq!(GameType::Pc.label(), "PC Game");
    }

    #[test]
    fn test_request_trims_and_drops_blank_company() {
        let mut form = filled();
        form.set(Field::Name, "  Dana ".to_string());
        form.set(Field::Company, "  ".to_string());
        let request = form.to_request();
        assert_eq!(request.name, "Dana");
        assert_eq!(request.company, None);
        assert_eq!(request.game_type, None);

        form.set(Field::Company, "Indie Co".to_string());
        form.set(Field::GameType, "mobile".to_string());
        let request = form.to_request();
        assert_eq!(request.company.as_deref(), Some("Indie Co"));
        assert_eq!(request.game_type, Some(GameType::Mobile));
    }

    #[test]
    fn test_request_serializes_game_type_lowercase() {
        let mut form = filled();
        form.set(Field::GameType, "pc".to_string());
        let json = serde_json::to_value(form.to_request()).unwrap();
        assert_eq!(json["game_type"], "pc");
        assert_eq!(json["company"], serde_json::Value::Null);
        assert_eq!(json["email"], "dana@studio.dev");
    }

    #[test]
    fn test_submitting_status() {
        assert!(SubmitStatus::Submitting.is_submitting());
        assert!(!SubmitStatus::Idle.is_submitting());
        assert!(!SubmitStatus::Error("x".to_string()).is_submitting());
    }
}
