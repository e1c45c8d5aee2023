#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderKind {
    /// Billed directly to a customer (amount → derived hours)
    #[default]
    External,
    /// Hours entered directly, no customer billing references
    Internal,
}

impl OrderKind {
    pub fn from_flag(is_external: bool) -> Self {
        if is_external {
            OrderKind::External
        } else {
            OrderKind::Internal
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, OrderKind::External)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderKind::External => "External Order",
            OrderKind::Internal => "Internal Order",
        }
    }

    /// Convert enum → DB integer (orders.isExternal)
    pub fn to_db_int(&self) -> i64 {
        match self {
            OrderKind::External => 1,
            OrderKind::Internal => 0,
        }
    }
}
