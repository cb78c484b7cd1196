use std::fmt;

use clap::ValueEnum;

use crate::nutrition::targets::{compute_targets, Targets};

/// Sex used by the Mifflin-St Jeor equation.
///
/// The equation only has two variants, so only two are modelled. Any other
/// input is rejected where it enters the program (command line or profile
/// block) rather than being mapped onto one of these silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Accepts "Male"/"Female" and the one-letter forms, any case
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    /// BMR to TDEE factor
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }

    /// Keyword match so that "lightly active", "Lightly-Active" etc. all resolve.
    /// Keywords are tried in order; the first hit wins.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.to_lowercase();
        if label.contains("sedentary") {
            Some(ActivityLevel::Sedentary)
        } else if label.contains("lightly") {
            Some(ActivityLevel::LightlyActive)
        } else if label.contains("moderately") {
            Some(ActivityLevel::ModeratelyActive)
        } else if label.contains("very") {
            Some(ActivityLevel::VeryActive)
        } else {
            None
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub full_name: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    /// Derived; only ever written by `recompute_targets`
    pub targets: Targets,
}

impl UserProfile {
    pub fn new(
        username: &str,
        full_name: &str,
        age: u32,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
    ) -> Self {
        let mut profile = UserProfile {
            username: username.to_string(),
            full_name: full_name.to_string(),
            age,
            gender,
            height_cm,
            weight_kg,
            activity_level,
            targets: Targets::default(),
        };
        profile.recompute_targets();
        profile
    }

    pub fn recompute_targets(&mut self) {
        self.targets = compute_targets(self);
    }

    pub fn set_weight(&mut self, weight_kg: f64) {
        self.weight_kg = weight_kg;
        self.recompute_targets();
    }
}
