use super::order_kind::OrderKind;
use crate::utils::formatting::{parse_or_zero, title_case};
use chrono::NaiveDate;

/// In-memory draft of one order, exactly as the user typed it.
///
/// Nothing is normalized here: title-casing, upper-casing and numeric
/// coercion happen in [`OrderDraft::normalize`], right before the insert.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    pub date: NaiveDate,
    pub customer: String,
    pub kind: OrderKind,
    pub customer_order: String,
    pub customer_amount: String,
    pub spirit_order: String,
    pub description: String,
    pub hours_booked: String,
}

/// A normalized order, ready to be written to `orders`.
/// The id is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkOrder {
    pub date: NaiveDate,        // ⇔ orders.date (TEXT "YYYY-MM-DD")
    pub customer: String,       // ⇔ orders.customer (title case)
    pub kind: OrderKind,        // ⇔ orders.isExternal (0 | 1)
    pub customer_order: String, // ⇔ orders.customerOrder (upper case, '' if internal)
    pub customer_amount: f64,   // ⇔ orders.customerAmount (REAL)
    pub spirit_order: String,   // ⇔ orders.spiritOrder (upper case)
    pub description: String,    // ⇔ orders.description
    pub hours_booked: f64,      // ⇔ orders.hoursBooked (REAL)
}

impl OrderDraft {
    pub fn new(date: NaiveDate, kind: OrderKind) -> Self {
        Self {
            date,
            kind,
            ..Default::default()
        }
    }

    pub fn normalize(&self) -> WorkOrder {
        let customer_order = if self.kind.is_external() {
            self.customer_order.to_uppercase()
        } else {
            String::new()
        };

        WorkOrder {
            date: self.date,
            customer: title_case(&self.customer),
            kind: self.kind,
            customer_order,
            customer_amount: parse_or_zero(&self.customer_amount),
            spirit_order: self.spirit_order.to_uppercase(),
            description: self.description.clone(),
            hours_booked: parse_or_zero(&self.hours_booked),
        }
    }
}

impl WorkOrder {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
