use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The authenticated principal, as issued by the auth flow.
///
/// Fields the header does not read are kept in `extra` so a payload
/// round-trips through the store without loss.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Numeric ids from older auth backends are kept in their decimal form.
    #[serde(rename = "_id", default, deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub saved_questions: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    pub fn has_saved(&self, question_id: &str) -> bool {
        self.saved_questions.iter().any(|id| id == question_id)
    }

    /// The saved-question list after toggling `question_id`.
    ///
    /// Removes the id when present, appends it otherwise. Duplicates already
    /// in the list collapse to their first occurrence.
    pub fn toggled_saved_questions(&self, question_id: &str) -> Vec<String> {
        let was_saved = self.has_saved(question_id);
        let mut next: Vec<String> = Vec::with_capacity(self.saved_questions.len() + 1);
        for id in &self.saved_questions {
            if id == question_id || next.contains(id) {
                continue;
            }
            next.push(id.clone());
        }
        if !was_saved {
            next.push(question_id.to_string());
        }
        next
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(id)) => id,
        Some(RawId::Number(id)) => id.to_string(),
        None => String::new(),
    })
}

/// Full session payload: the user under `result` plus whatever else the
/// auth flow stored next to it (typically a token).
///
/// A payload without `result` still counts as a session, with an empty user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionPayload {
    #[serde(default)]
    pub result: SessionUser,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionPayload {
    pub fn new(result: SessionUser) -> Self {
        Self {
            result,
            extra: Map::new(),
        }
    }
}
