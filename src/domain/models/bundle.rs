use serde_derive::Deserialize;
use serde_derive::Serialize;

/// One instruction in a repair walkthrough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl Step {
    pub fn new(title: &str, description: &str) -> Step {
        return Step {
            title: title.to_string(),
            description: description.to_string(),
            image_url: None,
        };
    }

    pub fn with_image(title: &str, description: &str, image_url: &str) -> Step {
        return Step {
            title: title.to_string(),
            description: description.to_string(),
            image_url: Some(image_url.to_string()),
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub quantity: Option<String>,
    pub link: Option<String>,
}

impl Material {
    pub fn new(name: &str, quantity: Option<&str>, link: Option<&str>) -> Material {
        return Material {
            name: name.to_string(),
            quantity: quantity.map(|e| return e.to_string()),
            link: link.map(|e| return e.to_string()),
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub link: Option<String>,
}

impl Tool {
    pub fn new(name: &str, link: Option<&str>) -> Tool {
        return Tool {
            name: name.to_string(),
            link: link.map(|e| return e.to_string()),
        };
    }
}

/// A canned assistant reply: the chat text plus the structured walkthrough
/// panels rendered under it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBundle {
    pub content: String,
    pub steps: Vec<Step>,
    pub materials: Vec<Material>,
    pub tools: Vec<Tool>,
}
