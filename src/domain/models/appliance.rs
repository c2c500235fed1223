#[cfg(test)]
#[path = "appliance_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::create_id;

/// A catalog entry for a known appliance model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplianceModel {
    pub id: String,
    pub brand: String,
    pub model_number: String,
    pub product_name: String,
    pub category: String,
}

/// Structured appliance details attached to a message when the job covers a
/// home appliance. Carries everything the assistant interpolates into its
/// reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplianceContext {
    pub brand: String,
    pub model_number: String,
    pub product_name: String,
    pub serial_number: String,
    pub category: String,
}

impl ApplianceContext {
    pub fn from_model(model: &ApplianceModel, serial_number: &str) -> ApplianceContext {
        return ApplianceContext {
            brand: model.brand.to_string(),
            model_number: model.model_number.to_string(),
            product_name: model.product_name.to_string(),
            serial_number: serial_number.to_string(),
            category: model.category.to_string(),
        };
    }

    /// Whether two profiles describe the same physical appliance. With model
    /// numbers on both sides, (model, serial) decides. With model numbers on
    /// neither side, (brand, product, serial) decides. A mix is never a
    /// match.
    pub fn matches(&self, other: &ApplianceContext) -> bool {
        if !self.model_number.is_empty() && !other.model_number.is_empty() {
            return self.model_number == other.model_number
                && self.serial_number == other.serial_number;
        }

        if self.model_number.is_empty() && other.model_number.is_empty() {
            return self.brand == other.brand
                && self.product_name == other.product_name
                && self.serial_number == other.serial_number;
        }

        return false;
    }
}

/// An appliance profile kept for the session and listed in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedAppliance {
    pub id: String,
    pub context: ApplianceContext,
}

impl SavedAppliance {
    pub fn new(context: ApplianceContext) -> SavedAppliance {
        return SavedAppliance {
            id: create_id(),
            context,
        };
    }
}
