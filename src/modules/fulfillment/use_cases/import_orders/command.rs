use serde::Deserialize;

/// An order as it arrives from an import file or request, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOrder {
    pub id: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub line_items: Vec<ImportLineItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportLineItem {
    pub sku: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub color: String,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
}
