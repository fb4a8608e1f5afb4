//! Tag filter for the products section.

use super::Product;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProductFilter {
    #[default]
    All,
    Crm,
    Operations,
    Marketing,
}

impl ProductFilter {
    /// Filter choices in display order.
    pub const ALL: [ProductFilter; 4] = [
        ProductFilter::All,
        ProductFilter::Crm,
        ProductFilter::Operations,
        ProductFilter::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductFilter::All => "All",
            ProductFilter::Crm => "CRM",
            ProductFilter::Operations => "Operations",
            ProductFilter::Marketing => "Marketing",
        }
    }

    /// `All` matches everything; other filters compare the tag exactly.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::All => true,
            other => product.tag == other.as_str(),
        }
    }

    /// Products passing this filter, in their original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

impl fmt::Display for ProductFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductFilter::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("Unknown product filter: {}", s))
    }
}
