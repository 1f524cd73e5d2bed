use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Vegetables,
    Fruits,
    Meat,
    Fish,
    Dairy,
    Grains,
    Seasonings,
    Beverages,
    Snacks,
    Frozen,
    #[default]
    Others,
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemCategory::Vegetables => write!(f, "vegetables"),
            ItemCategory::Fruits => write!(f, "fruits"),
            ItemCategory::Meat => write!(f, "meat"),
            ItemCategory::Fish => write!(f, "fish"),
            ItemCategory::Dairy => write!(f, "dairy"),
            ItemCategory::Grains => write!(f, "grains"),
            ItemCategory::Seasonings => write!(f, "seasonings"),
            ItemCategory::Beverages => write!(f, "beverages"),
            ItemCategory::Snacks => write!(f, "snacks"),
            ItemCategory::Frozen => write!(f, "frozen"),
            ItemCategory::Others => write!(f, "others"),
        }
    }
}

impl std::str::FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vegetables" => Ok(ItemCategory::Vegetables),
            "fruits" => Ok(ItemCategory::Fruits),
            "meat" => Ok(ItemCategory::Meat),
            "fish" => Ok(ItemCategory::Fish),
            "dairy" => Ok(ItemCategory::Dairy),
            "grains" => Ok(ItemCategory::Grains),
            "seasonings" => Ok(ItemCategory::Seasonings),
            "beverages" => Ok(ItemCategory::Beverages),
            "snacks" => Ok(ItemCategory::Snacks),
            "frozen" => Ok(ItemCategory::Frozen),
            "others" => Ok(ItemCategory::Others),
            _ => Err(format!("Invalid item category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl std::fmt::Display for ItemPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemPriority::High => write!(f, "high"),
            ItemPriority::Medium => write!(f, "medium"),
            ItemPriority::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for ItemPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(ItemPriority::High),
            "medium" => Ok(ItemPriority::Medium),
            "low" => Ok(ItemPriority::Low),
            _ => Err(format!("Invalid item priority: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_category_from_storage_value() {
        assert_eq!("seasonings".parse::<ItemCategory>(), Ok(ItemCategory::Seasonings));
        assert_eq!(ItemCategory::Frozen.to_string(), "frozen");
    }

    #[test]
    fn should_reject_unknown_category() {
        assert!("spices".parse::<ItemCategory>().is_err());
    }

    #[test]
    fn should_default_to_others_and_medium() {
        assert_eq!(ItemCategory::default(), ItemCategory::Others);
        assert_eq!(ItemPriority::default(), ItemPriority::Medium);
    }

    #[test]
    fn should_parse_priority_from_storage_value() {
        assert_eq!("high".parse::<ItemPriority>(), Ok(ItemPriority::High));
        assert!("urgent".parse::<ItemPriority>().is_err());
    }
}
