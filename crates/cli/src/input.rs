//! Scenario parsing: a count line, that many product records, then the
//! query line.

use std::io::BufRead;

use thiserror::Error;

use stocktally_core::DomainError;
use stocktally_inventory::Product;

/// One full driver scenario: the records to load and the query line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub products: Vec<Product>,
    pub category_query: String,
    pub name_query: String,
    pub remove_name: String,
}

/// Failures while reading a scenario from the input stream.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),

    #[error("input ended early: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid product count {0:?}")]
    InvalidCount(String),

    #[error("product record {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: DomainError,
    },

    #[error("query line must be \"category name nameToDelete\", got {0:?}")]
    MalformedQuery(String),
}

/// Reads one scenario. Trailing content after the query line is ignored.
pub fn read_scenario(reader: impl BufRead) -> Result<Scenario, InputError> {
    let mut lines = reader.lines();

    let count_line = next_line(&mut lines, "product count")?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidCount(count_line.trim().to_owned()))?;

    let mut products = Vec::with_capacity(count);
    for line in 1..=count {
        let record = next_line(&mut lines, "product record")?;
        let product = record
            .parse::<Product>()
            .map_err(|source| InputError::Record { line, source })?;
        products.push(product);
    }

    let query_line = next_line(&mut lines, "query line")?;
    let mut fields = query_line.split_whitespace();
    let (Some(category_query), Some(name_query), Some(remove_name)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err(InputError::MalformedQuery(query_line.trim().to_owned()));
    };

    Ok(Scenario {
        products,
        category_query: category_query.to_owned(),
        name_query: name_query.to_owned(),
        remove_name: remove_name.to_owned(),
    })
}

fn next_line(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    expected: &'static str,
) -> Result<String, InputError> {
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(InputError::UnexpectedEof { expected }),
    }
}
