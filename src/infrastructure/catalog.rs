#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

use once_cell::sync::Lazy;

use crate::domain::models::ApplianceModel;

fn model(id: &str, brand: &str, model_number: &str, product_name: &str, category: &str) -> ApplianceModel {
    return ApplianceModel {
        id: id.to_string(),
        brand: brand.to_string(),
        model_number: model_number.to_string(),
        product_name: product_name.to_string(),
        category: category.to_string(),
    };
}

static MODELS: Lazy<Vec<ApplianceModel>> = Lazy::new(|| {
    return vec![
        model("1", "Whirlpool", "WFE550S0LZ", "30-inch Electric Range", "Range/Oven"),
        model("2", "Whirlpool", "WRS325SDHZ", "Side-by-Side Refrigerator", "Refrigerator"),
        model("3", "GE", "GDF630PSMSS", "Dishwasher with Hidden Controls", "Dishwasher"),
        model("4", "GE", "GTW465ASNWW", "Top Load Washer", "Washer"),
        model("5", "Samsung", "DVE45R6100C", "Electric Dryer", "Dryer"),
        model("6", "LG", "LMHM2237ST", "Over-the-Range Microwave", "Microwave"),
        model("7", "Frigidaire", "FFRA051WAE", "Window Air Conditioner", "Air Conditioner"),
        model("8", "Maytag", "MVWC465HW", "Top Load Washer", "Washer"),
    ];
});

pub struct ApplianceCatalog {}

impl ApplianceCatalog {
    /// Case-insensitive substring lookup against model number, brand, and
    /// product name, in catalog order.
    pub fn search(query: &str) -> Vec<&'static ApplianceModel> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return vec![];
        }

        return MODELS
            .iter()
            .filter(|model| {
                return model.model_number.to_lowercase().contains(&query)
                    || model.brand.to_lowercase().contains(&query)
                    || model.product_name.to_lowercase().contains(&query);
            })
            .collect();
    }
}
