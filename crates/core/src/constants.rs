use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Day of month from which valuations are filed under the next month's bucket.
pub const DEFAULT_ROLLOVER_DAY: u32 = 25;

/// Period key format for monthly buckets.
pub const MONTH_PERIOD_FORMAT: &str = "%Y-%m";

/// Period key format for daily buckets.
pub const DAY_PERIOD_FORMAT: &str = "%Y-%m-%d";

/// Currency glyphs stripped by the money parser.
pub const CURRENCY_GLYPHS: &[char] = &['₩', '￦', '원', '$', '€', '£', '¥'];

/// Tolerance used when checking that target weights add up to one.
pub const WEIGHT_SUM_TOLERANCE: Decimal = dec!(0.0001);

/// Cash preset offered to the user before a run.
pub const DEFAULT_NEW_CASH: Decimal = dec!(1000000);
