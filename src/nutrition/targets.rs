use crate::nutrition::food::Nutrients;
use crate::nutrition::profile::{Gender, UserProfile};

const PROTEIN_G_PER_KG: f64 = 2.0;
const CARB_SHARE: f64 = 0.55;
const FAT_SHARE: f64 = 0.25;
const KCAL_PER_G_CARB: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily energy and macro goals, each rounded to a whole number
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Targets {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl Targets {
    pub fn as_nutrients(&self) -> Nutrients {
        Nutrients {
            calories: self.calories,
            protein: self.protein_g,
            carbs: self.carbs_g,
            fat: self.fat_g,
        }
    }
}

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

pub fn compute_targets(profile: &UserProfile) -> Targets {
    let tdee = bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    ) * profile.activity_level.multiplier();

    let calories = tdee.round();
    Targets {
        calories,
        protein_g: (profile.weight_kg * PROTEIN_G_PER_KG).round(),
        carbs_g: (calories * CARB_SHARE / KCAL_PER_G_CARB).round(),
        fat_g: (calories * FAT_SHARE / KCAL_PER_G_FAT).round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::profile::ActivityLevel;

    fn profile(gender: Gender, activity: ActivityLevel) -> UserProfile {
        UserProfile::new("ada", "Ada", 25, gender, 175.0, 70.0, activity)
    }

    #[test]
    fn test_bmr_male_and_female() {
        assert_eq!(bmr(70.0, 175.0, 25, Gender::Male), 1673.75);
        assert_eq!(bmr(70.0, 175.0, 25, Gender::Female), 1507.75);
    }

    #[test]
    fn test_reference_male_sedentary() {
        let targets = compute_targets(&profile(Gender::Male, ActivityLevel::Sedentary));
        assert_eq!(targets.calories, 2009.0);
        assert_eq!(targets.protein_g, 140.0);
        assert_eq!(targets.carbs_g, 276.0);
        assert_eq!(targets.fat_g, 56.0);
    }

    #[test]
    fn test_activity_multipliers_applied() {
        let very = compute_targets(&profile(Gender::Female, ActivityLevel::VeryActive));
        // 1507.75 * 1.725 = 2600.87...
        assert_eq!(very.calories, 2601.0);
        assert_eq!(very.carbs_g, (2601.0_f64 * 0.55 / 4.0).round());

        let light = compute_targets(&profile(Gender::Female, ActivityLevel::LightlyActive));
        assert_eq!(light.calories, (1507.75_f64 * 1.375).round());
    }

    #[test]
    fn test_deterministic() {
        let p = profile(Gender::Male, ActivityLevel::ModeratelyActive);
        assert_eq!(compute_targets(&p), compute_targets(&p));
    }
}
