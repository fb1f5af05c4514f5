use serde::Deserialize;

/// One statement line as delivered by `/issues`. Never mutated client-side.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transaction {
    pub timestamp: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: i64,
    pub status: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Balance {
    pub balance: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ListingPage {
    pub items: Vec<Transaction>,
    pub total: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Timestamp,
    Amount,
}

impl SortColumn {
    pub fn as_str(self) -> &'static str {
        match self {
            SortColumn::Timestamp => "timestamp",
            SortColumn::Amount => "amount",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// Parameters of one `/issues` request. `page` is 1-based and may briefly
/// exceed the page count after the total shrinks; the table clamps it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingQuery {
    pub page: u32,
    pub per_page: u32,
    pub sort_by: SortColumn,
    pub order: SortOrder,
}

impl ListingQuery {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page,
            sort_by: SortColumn::Timestamp,
            order: SortOrder::Desc,
        }
    }

    pub fn to_query_string(&self) -> String {
        format!(
            "page={}&per_page={}&sort_by={}&order={}",
            self.page,
            self.per_page,
            self.sort_by.as_str(),
            self.order.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_newest_first_on_page_one() {
        let query = ListingQuery::new(10);
        assert_eq!(
            query.to_query_string(),
            "page=1&per_page=10&sort_by=timestamp&order=desc"
        );
    }

    #[test]
    fn transaction_reads_type_field_and_ignores_extras() {
        let raw = r#"{
            "timestamp": 1624507883,
            "time": "2021-06-24T04:11:23Z",
            "name": "JOHN DOE",
            "type": "DEBIT",
            "amount": 250000,
            "status": "FAILED",
            "description": "restaurant"
        }"#;
        let tx: Transaction = serde_json::from_str(raw).expect("decode");
        assert_eq!(tx.kind, "DEBIT");
        assert_eq!(tx.amount, 250000);
        assert_eq!(tx.description, "restaurant");
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let raw = r#"{"timestamp":1,"name":"A","type":"CREDIT","amount":5,"status":"PENDING"}"#;
        let tx: Transaction = serde_json::from_str(raw).expect("decode");
        assert!(tx.description.is_empty());
    }

    #[test]
    fn missing_amount_is_rejected() {
        let raw = r#"{"timestamp":1,"name":"A","type":"CREDIT","status":"PENDING"}"#;
        assert!(serde_json::from_str::<Transaction>(raw).is_err());
    }

    #[test]
    fn toggling_order_flips_direction() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }
}
