use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stocktally_core::{DomainError, ValueObject};

/// A single product record.
///
/// Products carry no identity: two records with identical fields are equal
/// as values, and the store treats every added record as its own entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    category: String,
    stock: u32,
    price: u64,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        stock: u32,
        price: u64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            stock,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Units on hand.
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Unit price in smallest currency unit (e.g. cents).
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Line value: price × stock, widened so the product cannot wrap.
    pub fn value(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.stock))
    }
}

impl ValueObject for Product {}

impl FromStr for Product {
    type Err = DomainError;

    /// Parses a `"name category stock price"` record, whitespace separated.
    /// Tokens past the fourth are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let name = fields
            .next()
            .ok_or_else(|| DomainError::malformed("missing name"))?;
        let category = fields
            .next()
            .ok_or_else(|| DomainError::malformed("missing category"))?;
        let stock = fields
            .next()
            .ok_or_else(|| DomainError::malformed("missing stock"))?;
        let price = fields
            .next()
            .ok_or_else(|| DomainError::malformed("missing price"))?;

        let stock: u32 = stock
            .parse()
            .map_err(|e| DomainError::validation(format!("stock: {e}")))?;
        let price: u64 = price
            .parse()
            .map_err(|e| DomainError::validation(format!("price: {e}")))?;

        Ok(Self::new(name, category, stock, price))
    }
}
