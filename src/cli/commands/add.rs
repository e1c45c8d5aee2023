use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::store::OrderStore;
use crate::errors::{AppError, AppResult};
use crate::models::order::OrderDraft;
use crate::models::order_kind::OrderKind;
use crate::utils::date;

/// Fill a draft from the command line and save it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        customer,
        internal,
        customer_order,
        amount,
        spirit_order,
        description,
        hours,
    } = cmd
    {
        //
        // 1. Parse date (default = today)
        //
        let d = date::parse_optional_date(date.as_ref())
            .ok_or_else(|| AppError::InvalidDate(date.clone().unwrap_or_default()))?;

        //
        // 2. Build the raw draft; normalization happens in the store
        //
        let mut draft = OrderDraft::new(d, OrderKind::from_flag(!*internal));
        draft.customer = customer.clone();
        draft.customer_order = customer_order.clone().unwrap_or_default();
        draft.customer_amount = amount.clone().unwrap_or_default();
        draft.spirit_order = spirit_order.clone();
        draft.description = description.clone();
        draft.hours_booked = hours.clone().unwrap_or_default();

        //
        // 3. Save
        //
        let store = OrderStore::new(cfg.database_path());
        AddLogic::apply(&store, &draft, cfg)?;
    }

    Ok(())
}
