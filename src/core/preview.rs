use crate::config::Config;
use crate::core::calculator::{derived_hours_preview, internal_cost_preview};
use crate::models::order::OrderDraft;
use crate::models::order_kind::OrderKind;
use crate::ui::messages::preview;
use crate::utils::colors::RED;
use crate::utils::formatting::{format_hours_to_book, format_money};

/// What the form shows under the fields of a draft.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Preview {
    /// External orders: hours derived from the amount
    pub hours_to_book: Option<i64>,
    /// Internal orders: hours * hour rate
    pub internal_total: Option<f64>,
}

impl Preview {
    pub fn for_draft(draft: &OrderDraft, cfg: &Config) -> Self {
        match draft.kind {
            OrderKind::External => Preview {
                hours_to_book: derived_hours_preview(&draft.customer_amount, cfg),
                internal_total: None,
            },
            OrderKind::Internal => Preview {
                hours_to_book: None,
                internal_total: internal_cost_preview(&draft.hours_booked, &cfg.hour_rate),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hours_to_book.is_none() && self.internal_total.is_none()
    }

    pub fn print(&self, cfg: &Config) {
        if let Some(hours) = self.hours_to_book {
            preview(cfg.color_scheme.accent(), format_hours_to_book(hours));
        }
        if let Some(total) = self.internal_total {
            preview(RED, format_money(total));
        }
    }
}
