use mongodb::bson::oid::{self, ObjectId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{validate_category, validate_description, validate_name, validate_price};

/// Store-assigned product identifier.
///
/// Wraps a MongoDB [`ObjectId`] and travels as its 24-digit hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(ObjectId);

impl ProductId {
    /// Generate a fresh id, as the store would.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for ProductId {
    fn from(id: ObjectId) -> Self {
        Self(id)
    }
}

impl From<ProductId> for ObjectId {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl FromStr for ProductId {
    type Err = oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self)
    }
}

impl Serialize for ProductId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Classification embedded in every product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Category {
    /// 2-20 characters of letters, digits, `_` or `-`
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Phones")]
    pub name: String,

    /// At most 100 characters
    #[validate(custom(function = "validate_description"))]
    #[schema(example = "Mobile phones")]
    pub description: String,
}

/// The validated fields of a product, without identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductData {
    #[schema(example = "iPhone-12")]
    pub name: String,
    #[schema(example = "phone")]
    pub description: String,
    #[schema(example = 799.99)]
    pub price: f64,
    pub category: Category,
}

/// A persisted product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(value_type = String, example = "65f1c0ffee0000000000beef")]
    pub id: ProductId,

    #[serde(flatten)]
    pub data: ProductData,
}

impl Product {
    pub fn new(id: ProductId, data: ProductData) -> Self {
        Self { id, data }
    }
}

/// Body of `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductList {
    pub products: Vec<Product>,
}

/// Payload for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "iPhone-12")]
    pub name: String,

    /// Defaults to an empty string
    #[serde(default)]
    #[validate(custom(function = "validate_description"))]
    #[schema(example = "phone")]
    pub description: String,

    /// Must be between 0 and 100000 and end in `.99`
    #[validate(custom(function = "validate_price"))]
    #[schema(example = 799.99)]
    pub price: f64,

    #[validate(custom(function = "validate_category"))]
    pub category: Category,
}

impl From<CreateProduct> for ProductData {
    fn from(input: CreateProduct) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
        }
    }
}

/// Partial update; only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_description"))]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_price"))]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_category"))]
    pub category: Option<Category>,
}

impl UpdateProduct {
    /// Overwrite the fields of `data` that this update supplies.
    pub fn apply_to(self, data: &mut ProductData) {
        if let Some(name) = self.name {
            data.name = name;
        }
        if let Some(description) = self.description {
            data.description = description;
        }
        if let Some(price) = self.price {
            data.price = price;
        }
        if let Some(category) = self.category {
            data.category = category;
        }
    }
}
