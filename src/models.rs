use serde::{Deserialize, Serialize};

/// A stored exhibition participant
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    #[serde(rename = "registrationId")]
    pub registration_id: String,
    pub name: String,
    pub faculty: String,
    #[serde(rename = "projectTitle")]
    pub project_title: String,
    pub contact: String,
    pub email: String,
    /// Managed copy of the participant's image, if one was uploaded
    #[serde(rename = "imagePath", skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

/// Immutable snapshot of the registration form as submitted
///
/// Field values are kept exactly as typed; `trimmed()` produces the
/// normalized copy that validation and storage work on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantForm {
    pub registration_id: String,
    pub name: String,
    pub faculty: String,
    pub project_title: String,
    pub contact: String,
    pub email: String,
    /// Managed image already attached to the form (e.g. carried over from a search)
    pub image_path: Option<String>,
}

impl ParticipantForm {
    /// Field labels paired with their values, in form order
    pub fn labeled_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("registrationId", self.registration_id.as_str()),
            ("name", self.name.as_str()),
            ("faculty", self.faculty.as_str()),
            ("projectTitle", self.project_title.as_str()),
            ("contact", self.contact.as_str()),
            ("email", self.email.as_str()),
        ]
    }

    /// Copy of the form with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            registration_id: self.registration_id.trim().to_string(),
            name: self.name.trim().to_string(),
            faculty: self.faculty.trim().to_string(),
            project_title: self.project_title.trim().to_string(),
            contact: self.contact.trim().to_string(),
            email: self.email.trim().to_string(),
            image_path: self
                .image_path
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        }
    }

    /// Build the participant record this form describes
    pub fn to_participant(&self) -> Participant {
        Participant {
            registration_id: self.registration_id.clone(),
            name: self.name.clone(),
            faculty: self.faculty.clone(),
            project_title: self.project_title.clone(),
            contact: self.contact.clone(),
            email: self.email.clone(),
            image_path: self.image_path.clone(),
        }
    }
}

impl From<Participant> for ParticipantForm {
    fn from(p: Participant) -> Self {
        Self {
            registration_id: p.registration_id,
            name: p.name,
            faculty: p.faculty,
            project_title: p.project_title,
            contact: p.contact,
            email: p.email,
            image_path: p.image_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_strips_whitespace_and_blank_image() {
        let form = ParticipantForm {
            registration_id: "  R001 ".to_string(),
            name: "Alice\t".to_string(),
            faculty: " Eng".to_string(),
            project_title: "Robot ".to_string(),
            contact: " 555-1234 ".to_string(),
            email: " alice@uni.edu ".to_string(),
            image_path: Some("   ".to_string()),
        };

        let trimmed = form.trimmed();
        assert_eq!(trimmed.registration_id, "R001");
        assert_eq!(trimmed.name, "Alice");
        assert_eq!(trimmed.email, "alice@uni.edu");
        assert_eq!(trimmed.image_path, None);
    }

    #[test]
    fn test_participant_json_field_names() {
        let participant = Participant {
            registration_id: "R001".to_string(),
            name: "Alice".to_string(),
            faculty: "Eng".to_string(),
            project_title: "Robot".to_string(),
            contact: "555-1234".to_string(),
            email: "alice@uni.edu".to_string(),
            image_path: None,
        };

        let json = serde_json::to_value(&participant).unwrap();
        assert_eq!(json["registrationId"], "R001");
        assert_eq!(json["projectTitle"], "Robot");
        assert!(json.get("imagePath").is_none());
    }

    #[test]
    fn test_form_round_trips_through_participant() {
        let form = ParticipantForm {
            registration_id: "R002".to_string(),
            name: "Bob".to_string(),
            faculty: "Sci".to_string(),
            project_title: "Drone".to_string(),
            contact: "555-9999".to_string(),
            email: "bob@uni.edu".to_string(),
            image_path: Some("images/drone.png".to_string()),
        };

        assert_eq!(ParticipantForm::from(form.to_participant()), form);
    }
}
