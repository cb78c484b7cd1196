use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::nutrition::profile::{ActivityLevel, Gender, UserProfile};

pub const PROFILE_START: &str = "USER_PROFILE";

static KEY_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z_]+):\s?(.*)$").expect("valid key/value pattern"));

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("no USER_PROFILE block found")]
    MissingBlock,

    #[error("profile is missing the {0} field")]
    MissingField(&'static str),

    #[error("invalid value for {key}: \"{value}\"")]
    InvalidValue { key: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Write the USER_PROFILE block, keys in canonical order, blank-line terminated
pub fn write_profile_block<W: Write>(out: &mut W, profile: &UserProfile) -> io::Result<()> {
    writeln!(out, "{}", PROFILE_START)?;
    writeln!(out, "Name: {}", profile.full_name)?;
    writeln!(out, "Age: {}", profile.age)?;
    writeln!(out, "Gender: {}", profile.gender)?;
    writeln!(out, "Height: {}", profile.height_cm)?;
    writeln!(out, "Weight: {}", profile.weight_kg)?;
    writeln!(out, "Activity_Level: {}", profile.activity_level)?;
    writeln!(out, "Daily_Calorie_Target: {}", profile.targets.calories as i64)?;
    writeln!(out)
}

pub fn profile_block_string(profile: &UserProfile) -> String {
    let mut buf = Vec::new();
    write_profile_block(&mut buf, profile).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("profile block is built from UTF-8 strings")
}

/// Fields read back from a profile block; any may be absent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileBlock {
    pub full_name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    /// As stored; informational only, targets are always recomputed
    pub calorie_target: Option<f64>,
}

impl ProfileBlock {
    /// Build a full profile with freshly computed targets
    pub fn into_profile(self, username: &str) -> Result<UserProfile, ProfileError> {
        Ok(UserProfile::new(
            username,
            &self.full_name.unwrap_or_default(),
            self.age.ok_or(ProfileError::MissingField("Age"))?,
            self.gender.ok_or(ProfileError::MissingField("Gender"))?,
            self.height_cm.ok_or(ProfileError::MissingField("Height"))?,
            self.weight_kg.ok_or(ProfileError::MissingField("Weight"))?,
            self.activity_level
                .ok_or(ProfileError::MissingField("Activity_Level"))?,
        ))
    }
}

/// Read the first USER_PROFILE block.
///
/// Keys are matched by label, unknown keys are ignored. A recognised key with
/// an unreadable value fails the whole read.
pub fn read_profile_block<R: BufRead>(reader: R) -> Result<ProfileBlock, ProfileError> {
    let mut block = ProfileBlock::default();
    let mut found = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();

        if !found {
            found = line.trim() == PROFILE_START;
            continue;
        }
        if line.trim().is_empty() {
            break;
        }

        let Some(caps) = KEY_VALUE_RE.captures(line) else {
            continue;
        };
        let value = caps[2].trim();

        match &caps[1] {
            "Name" => block.full_name = Some(value.to_string()),
            "Age" => block.age = Some(parse_value("Age", value)?),
            "Gender" => {
                block.gender = Some(Gender::from_label(value).ok_or_else(|| {
                    ProfileError::InvalidValue {
                        key: "Gender",
                        value: value.to_string(),
                    }
                })?)
            }
            "Height" => block.height_cm = Some(parse_positive("Height", value)?),
            "Weight" => block.weight_kg = Some(parse_positive("Weight", value)?),
            "Activity_Level" => {
                let level = ActivityLevel::from_label(value).unwrap_or_else(|| {
                    tracing::warn!(value, "unknown activity level, using Sedentary");
                    ActivityLevel::Sedentary
                });
                block.activity_level = Some(level);
            }
            "Daily_Calorie_Target" => {
                block.calorie_target = Some(parse_value("Daily_Calorie_Target", value)?)
            }
            _ => {}
        }
    }

    if !found {
        return Err(ProfileError::MissingBlock);
    }
    Ok(block)
}

/// Swap the first USER_PROFILE block in `content` for a fresh one.
/// Everything outside that block is kept verbatim.
pub fn replace_profile_block(content: &str, profile: &UserProfile) -> Result<String, ProfileError> {
    let mut start = None;
    let mut end = content.len();
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let line_end = offset + line.len();
        match start {
            None if line.trim() == PROFILE_START => start = Some(offset),
            Some(_) if line.trim().is_empty() => {
                end = line_end;
                break;
            }
            _ => {}
        }
        offset = line_end;
    }

    let start = start.ok_or(ProfileError::MissingBlock)?;
    let mut replaced = String::with_capacity(content.len() + 32);
    replaced.push_str(&content[..start]);
    replaced.push_str(&profile_block_string(profile));
    replaced.push_str(&content[end..]);
    Ok(replaced)
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ProfileError> {
    value.parse().map_err(|_| ProfileError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

fn parse_positive(key: &'static str, value: &str) -> Result<f64, ProfileError> {
    let parsed: f64 = parse_value(key, value)?;
    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(ProfileError::InvalidValue {
            key,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}
