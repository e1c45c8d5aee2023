use crate::config::Config;
use crate::core::preview::Preview;
use crate::db::log::ttlog_at;
use crate::db::store::OrderStore;
use crate::errors::AppResult;
use crate::models::order::OrderDraft;
use crate::ui::messages::{error, success, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::bold;

pub struct AddLogic;

impl AddLogic {
    /// Show the draft with its preview, then store it.
    /// Returns the id of the new order.
    pub fn apply(store: &OrderStore, draft: &OrderDraft, cfg: &Config) -> AppResult<i64> {
        //
        // 1. Echo the draft as entered
        //
        println!("{}", bold(draft.kind.label()));
        println!("  Date        : {}", draft.date.format("%Y-%m-%d"));
        println!("  Customer    : {}", colorize_optional(&draft.customer));
        if draft.kind.is_external() {
            println!("  Cust. order : {}", colorize_optional(&draft.customer_order));
            println!("  Amount      : {}", colorize_optional(&draft.customer_amount));
        } else {
            println!("  Hours       : {}", colorize_optional(&draft.hours_booked));
        }
        println!("  Spirit order: {}", colorize_optional(&draft.spirit_order));
        println!("  Description : {}", colorize_optional(&draft.description));

        //
        // 2. Preview (derived hours or internal cost)
        //
        let preview = Preview::for_draft(draft, cfg);
        if !preview.is_empty() {
            println!();
            preview.print(cfg);
        }
        println!();

        //
        // 3. Schema (lazy) + insert
        //
        let saved = store.ensure_schema().and_then(|_| store.save(draft));
        let id = match saved {
            Ok(id) => id,
            Err(e) => {
                error("Failed to save order");
                return Err(e);
            }
        };

        success(format!("Order #{} saved", id));

        //
        // 4. Audit line (non blocking)
        //
        let order = draft.normalize();
        let message = format!(
            "{} {} for '{}' ({})",
            draft.kind.label(),
            order.date_str(),
            order.customer,
            match preview.hours_to_book {
                Some(h) => format!("{} h derived", h),
                None => format!("{} h booked", order.hours_booked),
            }
        );
        if let Err(e) = ttlog_at(store.path(), "add", &format!("order #{}", id), &message) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(id)
    }
}
