use crate::nutrition::food::Nutrients;
use crate::nutrition::targets::Targets;

/// Shortfalls at or below these thresholds do not warrant a tip
const PROTEIN_TIP_THRESHOLD_G: f64 = 20.0;
const CARB_TIP_THRESHOLD_G: f64 = 30.0;
const FAT_TIP_THRESHOLD_G: f64 = 10.0;

/// Grams of food needed per gram of missing macro
const CHICKEN_BREAST_G_PER_PROTEIN_G: f64 = 3.0;
const RICE_G_PER_CARB_G: f64 = 1.5;

const BELOW_TARGET_RATIO: f64 = 0.8;
const ABOVE_TARGET_RATIO: f64 = 1.1;

#[derive(Debug, Clone, PartialEq)]
pub enum Tip {
    Protein { shortfall_g: f64, chicken_breast_g: f64 },
    Carbs { shortfall_g: f64, rice_g: f64 },
    Fat { shortfall_g: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// Calorie target reached or exceeded
    TargetMet,
    /// Calories left but every macro is close enough
    OnTrack,
    Tips(Vec<Tip>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayVerdict {
    Below,
    OnTarget,
    Above,
}

/// What is left to eat today; negative where a target is exceeded
pub fn remaining(targets: &Targets, totals: &Nutrients) -> Nutrients {
    targets.as_nutrients() - *totals
}

pub fn recommend(targets: &Targets, totals: &Nutrients) -> Recommendation {
    let left = remaining(targets, totals);
    if left.calories <= 0.0 {
        return Recommendation::TargetMet;
    }

    let mut tips = Vec::new();
    if left.protein > PROTEIN_TIP_THRESHOLD_G {
        tips.push(Tip::Protein {
            shortfall_g: left.protein,
            chicken_breast_g: left.protein * CHICKEN_BREAST_G_PER_PROTEIN_G,
        });
    }
    if left.carbs > CARB_TIP_THRESHOLD_G {
        tips.push(Tip::Carbs {
            shortfall_g: left.carbs,
            rice_g: left.carbs * RICE_G_PER_CARB_G,
        });
    }
    if left.fat > FAT_TIP_THRESHOLD_G {
        tips.push(Tip::Fat {
            shortfall_g: left.fat,
        });
    }

    if tips.is_empty() {
        Recommendation::OnTrack
    } else {
        Recommendation::Tips(tips)
    }
}

pub fn assess_day(target_calories: f64, total_calories: f64) -> DayVerdict {
    if total_calories < target_calories * BELOW_TARGET_RATIO {
        DayVerdict::Below
    } else if total_calories > target_calories * ABOVE_TARGET_RATIO {
        DayVerdict::Above
    } else {
        DayVerdict::OnTarget
    }
}
