//! Marketplace enumerations
//!
//! Wire values are SCREAMING_SNAKE_CASE. Labels are the Portuguese strings
//! shown in the storefront.

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum;

/// Unit a product is traded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitType {
    Piece,
    Gram,
    Kilogram,
    MetricTon,
}

impl_wire_enum!(UnitType {
    Piece => "PIECE", "Peça",
    Gram => "GRAM", "Grama",
    Kilogram => "KILOGRAM", "Quilograma",
    MetricTon => "METRIC_TON", "Tonelada Métrica",
});

/// Lifecycle of a demand. `Any` is only meaningful as a listing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DemandStatus {
    Opened,
    Closed,
    Canceled,
    #[default]
    Any,
}

impl_wire_enum!(DemandStatus {
    Opened => "OPENED", "Aberto",
    Closed => "CLOSED", "Fechado",
    Canceled => "CANCELED", "Cancelado",
    Any => "ANY", "Não informado",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenderType {
    Male,
    Female,
    NotApplicable,
    NotKnown,
}

impl_wire_enum!(GenderType {
    Male => "MALE", "Masculino",
    Female => "FEMALE", "Feminino",
    NotApplicable => "NOT_APPLICABLE", "Não se aplica",
    NotKnown => "NOT_KNOWN", "Não informado",
});

/// Which side of the marketplace a store trades on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreType {
    #[default]
    Supplier,
    Retailer,
}

impl_wire_enum!(StoreType {
    Supplier => "SUPPLIER", "Produtor",
    Retailer => "RETAILER", "Comprador",
});

/// Product category. `Any` is only meaningful as a listing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Beef,
    WhiteMeat,
    Seaweed,
    Spice,
    Seafood,
    ProcessedMeat,
    PreservedMeat,
    PreservedProduct,
    Pork,
    RootVegetable,
    Nut,
    Mushroom,
    Vegetable,
    Herb,
    Grain,
    Fruit,
    Egg,
    Dairy,
    #[default]
    Any,
}

impl_wire_enum!(ProductType {
    Beef => "BEEF", "Carne Bovina",
    WhiteMeat => "WHITE_MEAT", "Carne Branca",
    Seaweed => "SEAWEED", "Alga",
    Spice => "SPICE", "Especiaria",
    Seafood => "SEAFOOD", "Frutos do Mar",
    ProcessedMeat => "PROCESSED_MEAT", "Carne Processada",
    PreservedMeat => "PRESERVED_MEAT", "Carne Conservada",
    PreservedProduct => "PRESERVED_PRODUCT", "Produto Conservado",
    Pork => "PORK", "Carne Suína",
    RootVegetable => "ROOT_VEGETABLE", "Legume Raiz",
    Nut => "NUT", "Noz",
    Mushroom => "MUSHROOM", "Cogumelo",
    Vegetable => "VEGETABLE", "Vegetal",
    Herb => "HERB", "Erva",
    Grain => "GRAIN", "Grão",
    Fruit => "FRUIT", "Fruta",
    Egg => "EGG", "Ovo",
    Dairy => "DAIRY", "Laticínio",
    Any => "ANY", "Qualquer",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserVerificationStatus {
    #[default]
    Pending,
    Email,
    Phone,
    EmailAndPhone,
}

impl_wire_enum!(UserVerificationStatus {
    Pending => "PENDING", "Pendente",
    Email => "EMAIL", "E-mail Verificado",
    Phone => "PHONE", "Telefone Verificado",
    EmailAndPhone => "EMAIL_AND_PHONE", "E-mail e Telefone Verificados",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_and_display_agree() {
        for unit in UnitType::ALL {
            let json = serde_json::to_string(unit).unwrap();
            assert_eq!(json, format!("\"{unit}\""));
        }
        for kind in ProductType::ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn filters_default_to_any() {
        assert_eq!(DemandStatus::default(), DemandStatus::Any);
        assert_eq!(ProductType::default(), ProductType::Any);
    }

    #[test]
    fn multi_word_values() {
        assert_eq!(ProductType::RootVegetable.as_str(), "ROOT_VEGETABLE");
        assert_eq!(
            "email_and_phone".parse::<UserVerificationStatus>().unwrap(),
            UserVerificationStatus::EmailAndPhone
        );
        assert_eq!(StoreType::Retailer.label(), "Comprador");
    }
}
