/// Starter shared catalog: `name|calories|protein|carbs|fat|serving`, values per serving
pub const FOODS_TEMPLATE: &str = "\
Apple|52|0.3|14|0.2|100g
Banana|89|1.1|23|0.3|100g
Orange|47|0.9|12|0.1|100g
Apple Juice|46|0.1|11.3|0.1|100g
White Rice (cooked)|130|2.7|28|0.3|100g
Brown Rice (cooked)|112|2.3|24|0.8|100g
Oats|389|16.9|66.3|6.9|100g
Whole Wheat Bread|247|13|41|3.4|100g
Pasta (cooked)|131|5|25|1.1|100g
Potato (boiled)|87|1.9|20|0.1|100g
Chicken Breast|165|31|0|3.6|100g
Salmon|208|20|0|13|100g
Egg|155|13|1.1|11|100g
Beef Steak|271|25|0|19|100g
Lentils (cooked)|116|9|20|0.4|100g
Tofu|76|8|1.9|4.8|100g
Greek Yogurt|59|10|3.6|0.4|100g
Milk (whole)|61|3.2|4.8|3.3|100g
Cheddar Cheese|403|25|1.3|33|100g
Almonds|579|21|22|50|100g
Peanut Butter|588|25|20|50|100g
Olive Oil|884|0|0|100|100g
Broccoli|34|2.8|7|0.4|100g
Spinach|23|2.9|3.6|0.4|100g
Avocado|160|2|8.5|14.7|100g
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::food::FoodItem;

    #[test]
    fn test_every_template_record_parses() {
        for line in FOODS_TEMPLATE.lines() {
            assert!(
                FoodItem::parse_catalog_line(line).is_ok(),
                "bad template line: {}",
                line
            );
        }
        assert_eq!(FOODS_TEMPLATE.lines().count(), 25);
    }
}
