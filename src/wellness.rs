//! Health derivations: BMI, BMI category with advice, daily calorie
//! need, and exercise calorie burn. All pure functions over the profile;
//! nothing here touches the database.

use crate::models::tracker::Intensity;
use crate::models::user::Gender;

/// Body Mass Index from metric units: weight / (height in meters)^2.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Healthy => "Healthy Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Fixed, ordered advice list shown on the BMI page.
    pub fn advice(&self) -> &'static [&'static str] {
        match self {
            BmiCategory::Underweight => &[
                "Consult a healthcare professional",
                "Increase caloric intake",
                "Eat frequently",
                "Focus on nutrient-rich foods",
                "Strength training",
                "Stay hydrated",
                "Avoid excessive junk food",
            ],
            BmiCategory::Healthy => &[
                "Maintain your current healthy lifestyle",
                "Regular exercise",
                "Balanced diet",
                "Regular health checkups",
            ],
            BmiCategory::Overweight => &[
                "Set realistic goals",
                "Focus on nutrition",
                "Control portion sizes",
                "Eat mindfully",
                "Stay hydrated",
                "Incorporate physical activity",
                "Get enough sleep",
            ],
            BmiCategory::Obese => &[
                "Consult a healthcare professional",
                "Create a structured weight loss plan",
                "Regular exercise",
                "Balanced diet",
                "Regular health checkups",
            ],
        }
    }
}

/// Category thresholds are gender-asymmetric: the non-male upper bounds
/// for Healthy and Overweight sit one point lower (24/29 vs 25/30).
pub fn bmi_category(bmi: f64, gender: Gender) -> BmiCategory {
    let (healthy_max, overweight_max) = match gender {
        Gender::Male => (25.0, 30.0),
        _ => (24.0, 29.0),
    };

    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < healthy_max {
        BmiCategory::Healthy
    } else if bmi < overweight_max {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Harris-Benedict-style basal metabolic rate, in kcal/day. No activity
/// multiplier is applied.
pub fn daily_calorie_need(gender: Gender, weight_kg: f64, height_cm: f64, age: i32) -> f64 {
    match gender {
        Gender::Male => 13.75 * weight_kg + 5.0 * height_cm - 6.76 * age as f64 + 66.0,
        _ => 9.56 * weight_kg + 1.85 * height_cm - 4.68 * age as f64 + 655.0,
    }
}

/// Rough calorie-burn estimate: a per-minute rate stepped by intensity.
/// Computed once at log creation and stored on the row.
pub fn exercise_calories(intensity: Intensity, duration_min: i32) -> f64 {
    let per_minute = match intensity {
        Intensity::Low => 5.0,
        Intensity::Medium => 8.0,
        Intensity::High => 12.0,
    };
    duration_min as f64 * per_minute
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_formula() {
        let b = bmi(70.0, 175.0);
        assert!((b - 22.857142857142858).abs() < 1e-9);
    }

    #[test]
    fn bmi_is_gender_independent() {
        // The index itself only depends on weight and height.
        assert_eq!(bmi(80.0, 180.0), 80.0 / (1.8 * 1.8));
    }

    #[test]
    fn category_thresholds_male() {
        assert_eq!(bmi_category(18.4, Gender::Male), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5, Gender::Male), BmiCategory::Healthy);
        assert_eq!(bmi_category(24.9, Gender::Male), BmiCategory::Healthy);
        assert_eq!(bmi_category(25.0, Gender::Male), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.9, Gender::Male), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0, Gender::Male), BmiCategory::Obese);
    }

    #[test]
    fn category_thresholds_non_male() {
        assert_eq!(bmi_category(18.4, Gender::Female), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5, Gender::Female), BmiCategory::Healthy);
        assert_eq!(bmi_category(23.9, Gender::Female), BmiCategory::Healthy);
        assert_eq!(bmi_category(24.0, Gender::Female), BmiCategory::Overweight);
        assert_eq!(bmi_category(28.9, Gender::Female), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.0, Gender::Female), BmiCategory::Obese);
        assert_eq!(bmi_category(24.0, Gender::Other), BmiCategory::Overweight);
    }

    #[test]
    fn category_asymmetry_at_24_5() {
        // Same BMI, different category depending on gender.
        assert_eq!(bmi_category(24.5, Gender::Male), BmiCategory::Healthy);
        assert_eq!(bmi_category(24.5, Gender::Female), BmiCategory::Overweight);
    }

    #[test]
    fn calorie_need_male_reference_value() {
        // 13.75*70 + 5*175 - 6.76*30 + 66
        let need = daily_calorie_need(Gender::Male, 70.0, 175.0, 30);
        assert!((need - 1700.7).abs() < 1e-9);
    }

    #[test]
    fn calorie_need_non_male_formula() {
        let need = daily_calorie_need(Gender::Female, 60.0, 165.0, 25);
        let expected = 9.56 * 60.0 + 1.85 * 165.0 - 4.68 * 25.0 + 655.0;
        assert!((need - expected).abs() < 1e-9);
    }

    #[test]
    fn exercise_burn_step_function() {
        assert_eq!(exercise_calories(Intensity::Low, 30), 150.0);
        assert_eq!(exercise_calories(Intensity::Medium, 30), 240.0);
        assert_eq!(exercise_calories(Intensity::High, 30), 360.0);
    }

    #[test]
    fn category_labels() {
        assert_eq!(BmiCategory::Underweight.label(), "Underweight");
        assert_eq!(BmiCategory::Healthy.label(), "Healthy Weight");
        assert_eq!(BmiCategory::Overweight.label(), "Overweight");
        assert_eq!(BmiCategory::Obese.label(), "Obese");
    }

    #[test]
    fn advice_lists_are_fixed_and_ordered() {
        assert_eq!(BmiCategory::Healthy.advice().len(), 4);
        assert_eq!(BmiCategory::Underweight.advice().len(), 7);
        assert_eq!(BmiCategory::Overweight.advice().len(), 7);
        assert_eq!(BmiCategory::Obese.advice().len(), 5);
        assert_eq!(
            BmiCategory::Obese.advice()[0],
            "Consult a healthcare professional"
        );
        assert_eq!(
            BmiCategory::Healthy.advice()[0],
            "Maintain your current healthy lifestyle"
        );
    }
}
