use crate::errors::Result;
use crate::holdings::Holding;
use crate::sleeves::Sleeve;

/// Persistence contract for a sleeve's current holdings.
pub trait HoldingsRepositoryTrait: Send + Sync {
    /// Holdings of a sleeve in stored order.
    fn get_holdings(&self, sleeve: Sleeve) -> Result<Vec<Holding>>;

    /// Whether the sleeve has ever been written, even if it is empty now.
    fn is_initialized(&self, sleeve: Sleeve) -> Result<bool>;

    /// Inserts or overwrites each holding keyed by `(sleeve, code)` and marks
    /// the sleeve initialized, also when `holdings` is empty.
    /// Stored order follows the order of `holdings`.
    fn upsert_holdings(&self, sleeve: Sleeve, holdings: &[Holding]) -> Result<usize>;

    fn delete_holding(&self, sleeve: Sleeve, code: &str) -> Result<usize>;
}

pub trait HoldingsServiceTrait: Send + Sync {
    fn get_holdings(&self, sleeve: Sleeve) -> Result<Vec<Holding>>;
    fn replace_holdings(&self, sleeve: Sleeve, holdings: &[Holding]) -> Result<Vec<Holding>>;
    fn delete_holding(&self, sleeve: Sleeve, code: &str) -> Result<()>;
}
