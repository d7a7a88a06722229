use serde::{Deserialize, Serialize};

/// Team record as stored in the `team` table.
///
/// Field order here is the order of the JSON response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub league: String,
    pub division: String,
}

/// Credential row from the `user` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub password: String,
}

/// Request body shared by PUT and PATCH. Every field is optional at the
/// wire level; `into_new_team` enforces presence for creation.
#[derive(Debug, Default, Deserialize)]
pub struct TeamPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
}

/// Field-level validation failure on a request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField(pub &'static str);

impl MissingField {
    pub fn message(&self) -> String {
        format!("Team {} required", self.0)
    }
}

/// A fully specified team awaiting insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub city: String,
    pub league: String,
    pub division: String,
}

impl NewTeam {
    pub fn with_id(self, id: i64) -> Team {
        Team {
            id,
            name: self.name,
            city: self.city,
            league: self.league,
            division: self.division,
        }
    }
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamChanges {
    pub name: Option<String>,
    pub city: Option<String>,
    pub league: Option<String>,
    pub division: Option<String>,
}

impl TeamPayload {
    /// Checks fields in declaration order and reports the first one missing.
    pub fn into_new_team(self) -> Result<NewTeam, MissingField> {
        Ok(NewTeam {
            name: self.name.ok_or(MissingField("name"))?,
            city: self.city.ok_or(MissingField("city"))?,
            league: self.league.ok_or(MissingField("league"))?,
            division: self.division.ok_or(MissingField("division"))?,
        })
    }

    /// Empty strings are treated as not supplied.
    pub fn into_changes(self) -> TeamChanges {
        fn supplied(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        TeamChanges {
            name: supplied(self.name),
            city: supplied(self.city),
            league: supplied(self.league),
            division: supplied(self.division),
        }
    }
}

/// Body returned by a successful DELETE
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
