use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::moderation::Moderated;

/// Account role. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Alumni,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Alumni => "alumni",
            Role::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alumni" => Ok(Role::Alumni),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Account entity - a registered alumni or admin.
///
/// Alumni accounts start unverified and only become visible in the
/// directory once an admin approves them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub roll_no: String,
    pub series: String,
    pub section: String,
    pub department: String,
    pub passing_year: i32,
    pub contact_no: Option<String>,
    pub address: Option<String>,
    pub current_job: Option<String>,
    pub current_company: Option<String>,
    pub skills: Option<String>,
    pub bio: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Academic identity captured at registration.
#[derive(Debug, Clone)]
pub struct Academics {
    pub roll_no: String,
    pub series: String,
    pub section: String,
    pub department: String,
    pub passing_year: i32,
}

impl Account {
    /// Create a new alumni account. Always starts unverified.
    pub fn register(
        name: String,
        email: String,
        password_hash: String,
        academics: Academics,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role: Role::Alumni,
            roll_no: academics.roll_no,
            series: academics.series,
            section: academics.section,
            department: academics.department,
            passing_year: academics.passing_year,
            contact_no: None,
            address: None,
            current_job: None,
            current_company: None,
            skills: None,
            bio: None,
            github: None,
            linkedin: None,
            profile_photo: None,
            cover_photo: None,
            verified: false,
            created_at: Utc::now(),
        }
    }

    /// Create an admin account. Admins are provisioned verified; they never
    /// pass through the moderation queue.
    pub fn admin(name: String, email: String, password_hash: String) -> Self {
        let mut account = Self::register(name, email, password_hash, Academics {
            roll_no: String::new(),
            series: String::new(),
            section: String::new(),
            department: String::new(),
            passing_year: 0,
        });
        account.role = Role::Admin;
        account.verified = true;
        account
    }

    /// Apply a profile edit from the owner. Identity, role, verification
    /// state and credentials are not reachable from here.
    pub fn apply_profile_update(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(v) = update.contact_no {
            self.contact_no = Some(v);
        }
        if let Some(v) = update.address {
            self.address = Some(v);
        }
        if let Some(v) = update.current_job {
            self.current_job = Some(v);
        }
        if let Some(v) = update.current_company {
            self.current_company = Some(v);
        }
        if let Some(v) = update.skills {
            self.skills = Some(v);
        }
        if let Some(v) = update.bio {
            self.bio = Some(v);
        }
        if let Some(v) = update.github {
            self.github = Some(v);
        }
        if let Some(v) = update.linkedin {
            self.linkedin = Some(v);
        }
        if let Some(v) = update.profile_photo {
            self.profile_photo = Some(v);
        }
        if let Some(v) = update.cover_photo {
            self.cover_photo = Some(v);
        }
    }
}

impl Moderated for Account {
    fn id(&self) -> Uuid {
        self.id
    }

    fn is_verified(&self) -> bool {
        self.verified
    }

    fn mark_verified(&mut self) {
        self.verified = true;
    }
}

/// Owner-editable profile fields. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub contact_no: Option<String>,
    pub address: Option<String>,
    pub current_job: Option<String>,
    pub current_company: Option<String>,
    pub skills: Option<String>,
    pub bio: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Account {
        Account::register(
            "Jane Doe".to_owned(),
            "jane@example.com".to_owned(),
            "hash".to_owned(),
            Academics {
                roll_no: "1701001".to_owned(),
                series: "17".to_owned(),
                section: "A".to_owned(),
                department: "CSE".to_owned(),
                passing_year: 2021,
            },
        )
    }

    #[test]
    fn registration_starts_unverified() {
        let account = sample();
        assert!(!account.verified);
        assert_eq!(account.role, Role::Alumni);
    }

    #[test]
    fn admin_is_provisioned_verified() {
        let admin = Account::admin(
            "Admin".to_owned(),
            "admin@example.com".to_owned(),
            "hash".to_owned(),
        );
        assert!(admin.verified);
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.password_hash, "hash");
    }

    #[test]
    fn profile_update_cannot_touch_role_or_verification() {
        let mut account = sample();
        account.apply_profile_update(ProfileUpdate {
            name: Some("Jane Q. Doe".to_owned()),
            bio: Some("Hello".to_owned()),
            ..Default::default()
        });

        assert_eq!(account.name, "Jane Q. Doe");
        assert_eq!(account.bio.as_deref(), Some("Hello"));
        assert_eq!(account.role, Role::Alumni);
        assert!(!account.verified);
        assert_eq!(account.email, "jane@example.com");
        assert_eq!(account.password_hash, "hash");
    }
}
