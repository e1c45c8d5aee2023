use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::preview::Preview;
use crate::errors::AppResult;
use crate::models::order::OrderDraft;
use crate::models::order_kind::OrderKind;
use crate::ui::messages::info;
use crate::utils::date;

/// Print the preview for an amount (external) or hours (internal).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        amount,
        hours,
        net_percentage,
        hour_rate,
    } = cmd
    {
        // one-off overrides, never persisted
        let mut effective = cfg.clone();
        if let Some(p) = net_percentage {
            effective.net_percentage = p.clone();
        }
        if let Some(r) = hour_rate {
            effective.hour_rate = r.clone();
        }

        let draft = match (amount, hours) {
            (Some(a), _) => {
                let mut d = OrderDraft::new(date::today(), OrderKind::External);
                d.customer_amount = a.clone();
                d
            }
            (None, h) => {
                let mut d = OrderDraft::new(date::today(), OrderKind::Internal);
                d.hours_booked = h.clone().unwrap_or_default();
                d
            }
        };

        let preview = Preview::for_draft(&draft, &effective);
        if preview.is_empty() {
            match draft.kind {
                OrderKind::External => info("Nothing to compute: the amount is empty."),
                OrderKind::Internal => info(
                    "No total: hours and hour rate must both be numbers greater than 0.",
                ),
            }
        } else {
            preview.print(&effective);
        }
    }

    Ok(())
}
