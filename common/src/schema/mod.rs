//! Expected CSV schemas for the three dataset components and the header
//! checks performed before anything is sent to the backend.
//!
//! A dataset submission consists of three CSV files: orders, order_products
//! and products. Each one must carry a fixed set of columns in its header
//! row. Only header names are checked here; column order and extra columns
//! are irrelevant, and no data rows are ever inspected on the client.

use serde::{Deserialize, Serialize};

/// The logical component of a dataset a CSV file belongs to.
///
/// The variant order is meaningful: it is the fixed order used both for
/// filename classification tie-breaks and for the "first open slot"
/// fallback when a filename gives no hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetKind {
    Orders,
    OrderProducts,
    Products,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Orders,
        DatasetKind::OrderProducts,
        DatasetKind::Products,
    ];

    /// Canonical lowercase name, matching the filenames users are asked to
    /// provide and the table names used by the backend.
    pub fn name(&self) -> &'static str {
        match self {
            DatasetKind::Orders => "orders",
            DatasetKind::OrderProducts => "order_products",
            DatasetKind::Products => "products",
        }
    }

    /// Column names that must be present in the header row of a file of
    /// this kind. `Total cost` really is spelled with a space and a capital
    /// T; the backend queries it verbatim.
    pub fn expected_columns(&self) -> &'static [&'static str] {
        match self {
            DatasetKind::Orders => &["order_id", "user_id", "order_date", "Total cost"],
            DatasetKind::OrderProducts => &["order_id", "product_id"],
            DatasetKind::Products => &["product_id", "product_name"],
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            DatasetKind::Orders => 0,
            DatasetKind::OrderProducts => 1,
            DatasetKind::Products => 2,
        }
    }
}

/// Guesses the dataset kind from a filename.
///
/// The first kind (in `DatasetKind::ALL` order) whose name occurs as a
/// substring of the lowercased filename wins. `order_products` is checked
/// before `products`, so `order_products.csv` is not mis-bucketed even
/// though it contains "products". This is a hint, not a guarantee; the
/// header check below is the actual gate.
pub fn classify_filename(file_name: &str) -> Option<DatasetKind> {
    let lower = file_name.to_lowercase();
    DatasetKind::ALL
        .into_iter()
        .find(|kind| lower.contains(kind.name()))
}

/// Splits a raw header line into trimmed column names.
///
/// A leading UTF-8 BOM is dropped (spreadsheet exports love to add one);
/// beyond that the tokens are taken as-is, comma-separated and trimmed.
pub fn parse_header_line(line: &str) -> Vec<String> {
    let line = line.strip_prefix('\u{feff}').unwrap_or(line);
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}

/// Outcome of checking one header row against one expected column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCheck {
    /// Expected columns that did not appear in the header, in the order the
    /// schema lists them. Empty means the file passed.
    pub missing: Vec<String>,
}

impl HeaderCheck {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    /// Human-readable failure text, or `None` when the header passed.
    pub fn error_message(&self) -> Option<String> {
        if self.missing.is_empty() {
            None
        } else {
            Some(format!("Missing columns: {}", self.missing.join(", ")))
        }
    }
}

/// Checks observed header columns against the expected list for `kind`.
///
/// Purely a membership test: order does not matter and extra columns are
/// accepted. The returned `missing` list is exactly expected minus observed.
pub fn check_header(kind: DatasetKind, observed: &[String]) -> HeaderCheck {
    let missing = kind
        .expected_columns()
        .iter()
        .filter(|expected| !observed.iter().any(|col| col == *expected))
        .map(|expected| expected.to_string())
        .collect();
    HeaderCheck { missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed(line: &str) -> Vec<String> {
        parse_header_line(line)
    }

    #[test]
    fn orders_header_with_all_columns_passes() {
        let check = check_header(
            DatasetKind::Orders,
            &observed("order_id,user_id,order_date,Total cost"),
        );
        assert!(check.is_valid());
        assert_eq!(check.error_message(), None);
    }

    #[test]
    fn column_order_and_extras_do_not_matter() {
        let check = check_header(
            DatasetKind::Orders,
            &observed("Total cost,order_date,store,user_id,order_id,channel"),
        );
        assert!(check.is_valid());
    }

    #[test]
    fn whitespace_around_column_names_is_trimmed() {
        let check = check_header(
            DatasetKind::Products,
            &observed(" product_id , product_name \r"),
        );
        assert!(check.is_valid());
    }

    #[test]
    fn leading_bom_is_stripped() {
        let check = check_header(
            DatasetKind::OrderProducts,
            &observed("\u{feff}order_id,product_id"),
        );
        assert!(check.is_valid());
    }

    #[test]
    fn missing_columns_are_reported_in_schema_order() {
        let check = check_header(DatasetKind::Orders, &observed("order_id,user_id"));
        assert!(!check.is_valid());
        assert_eq!(check.missing, vec!["order_date", "Total cost"]);
        assert_eq!(
            check.error_message().as_deref(),
            Some("Missing columns: order_date, Total cost")
        );
    }

    #[test]
    fn column_names_are_case_sensitive() {
        // "total cost" is not "Total cost"; the backend queries the exact name.
        let check = check_header(
            DatasetKind::Orders,
            &observed("order_id,user_id,order_date,total cost"),
        );
        assert_eq!(check.missing, vec!["Total cost"]);
    }

    #[test]
    fn filenames_classify_by_substring_ignoring_case() {
        assert_eq!(classify_filename("Orders.csv"), Some(DatasetKind::Orders));
        assert_eq!(
            classify_filename("ORDER_PRODUCTS_2024.CSV"),
            Some(DatasetKind::OrderProducts)
        );
        assert_eq!(
            classify_filename("shop products export.csv"),
            Some(DatasetKind::Products)
        );
        assert_eq!(classify_filename("basket.csv"), None);
    }

    #[test]
    fn order_products_filename_is_not_taken_for_products() {
        assert_eq!(
            classify_filename("order_products.csv"),
            Some(DatasetKind::OrderProducts)
        );
    }

    #[test]
    fn ambiguous_filenames_take_the_first_kind_in_fixed_order() {
        // Contains both "orders" and "products"; orders comes first.
        assert_eq!(
            classify_filename("orders_products_dump.csv"),
            Some(DatasetKind::Orders)
        );
    }
}
