/// Demonstration row written to the `product` table once at startup; the
/// service never reads it back.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    /// Price stored as integer cents (e.g. 999 = $9.99)
    pub price_cents: i64,
    pub available: bool,
}
