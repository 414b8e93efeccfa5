use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown nutrient field: {0}")]
    UnknownNutrientField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
