#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result, ValidationError};
    use crate::holdings::{
        Holding, HoldingsRepositoryTrait, HoldingsService, HoldingsServiceTrait,
    };
    use crate::sleeves::Sleeve;
    use rust_decimal_macros::dec;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};

    // --- Mock HoldingsRepository ---
    #[derive(Clone, Default)]
    struct MockHoldingsRepository {
        rows: Arc<Mutex<HashMap<Sleeve, Vec<Holding>>>>,
        initialized: Arc<Mutex<HashSet<Sleeve>>>,
        upsert_calls: Arc<Mutex<usize>>,
    }

    impl HoldingsRepositoryTrait for MockHoldingsRepository {
        fn get_holdings(&self, sleeve: Sleeve) -> Result<Vec<Holding>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .get(&sleeve)
                .cloned()
                .unwrap_or_default())
        }

        fn is_initialized(&self, sleeve: Sleeve) -> Result<bool> {
            Ok(self.initialized.lock().unwrap().contains(&sleeve))
        }

        fn upsert_holdings(&self, sleeve: Sleeve, holdings: &[Holding]) -> Result<usize> {
            self.initialized.lock().unwrap().insert(sleeve);
            *self.upsert_calls.lock().unwrap() += 1;
            let mut rows = self.rows.lock().unwrap();
            let stored = rows.entry(sleeve).or_default();
            for holding in holdings {
                match stored.iter_mut().find(|h| h.code == holding.code) {
                    Some(existing) => *existing = holding.clone(),
                    None => stored.push(holding.clone()),
                }
            }
            Ok(holdings.len())
        }

        fn delete_holding(&self, sleeve: Sleeve, code: &str) -> Result<usize> {
            let mut rows = self.rows.lock().unwrap();
            let stored = rows.entry(sleeve).or_default();
            let before = stored.len();
            stored.retain(|h| h.code != code);
            Ok(before - stored.len())
        }
    }

    fn etf(code: &str, qty: rust_decimal::Decimal, weight: rust_decimal::Decimal) -> Holding {
        Holding::new(code, format!("{} ETF", code), dec!(50000), qty, weight).unwrap()
    }

    fn service_with_seed(repo: &MockHoldingsRepository) -> HoldingsService {
        let mut seeds = HashMap::new();
        seeds.insert(
            Sleeve::PersonalPension,
            vec![etf("K200", dec!(10), dec!(0.6)), etf("BOND", dec!(8), dec!(0.4))],
        );
        HoldingsService::new(Arc::new(repo.clone()), seeds)
    }

    #[test]
    fn test_empty_sleeve_is_seeded_on_first_read() {
        let repo = MockHoldingsRepository::default();
        let service = service_with_seed(&repo);

        let holdings = service.get_holdings(Sleeve::PersonalPension).unwrap();
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0].code, "K200");

        // Second read comes from the store, not the seed.
        service.get_holdings(Sleeve::PersonalPension).unwrap();
        assert_eq!(*repo.upsert_calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_sleeve_without_seed_stays_empty() {
        let repo = MockHoldingsRepository::default();
        let service = service_with_seed(&repo);

        assert!(service.get_holdings(Sleeve::Crypto).unwrap().is_empty());
        assert_eq!(*repo.upsert_calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_replace_overwrites_by_code() {
        let repo = MockHoldingsRepository::default();
        let service = service_with_seed(&repo);
        service.get_holdings(Sleeve::PersonalPension).unwrap();

        let updated = service
            .replace_holdings(
                Sleeve::PersonalPension,
                &[etf("K200", dec!(14), dec!(0.6)), etf("BOND", dec!(8), dec!(0.4))],
            )
            .unwrap();

        assert_eq!(updated.len(), 2);
        let k200 = updated.iter().find(|h| h.code == "K200").unwrap();
        assert_eq!(k200.quantity, dec!(14));
    }

    #[test]
    fn test_replace_rejects_duplicate_codes_before_writing() {
        let repo = MockHoldingsRepository::default();
        let service = service_with_seed(&repo);

        let err = service
            .replace_holdings(
                Sleeve::RetirementPension,
                &[etf("A", dec!(1), dec!(0.5)), etf("A", dec!(2), dec!(0.5))],
            )
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::DuplicateHoldingCode(_))
        ));
        assert_eq!(*repo.upsert_calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_delete_missing_holding_is_not_found() {
        let repo = MockHoldingsRepository::default();
        let service = service_with_seed(&repo);
        service.get_holdings(Sleeve::PersonalPension).unwrap();

        service.delete_holding(Sleeve::PersonalPension, "BOND").unwrap();
        let err = service
            .delete_holding(Sleeve::PersonalPension, "BOND")
            .unwrap_err();
        assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
    }

    #[test]
    fn test_emptied_sleeve_is_not_reseeded() {
        let repo = MockHoldingsRepository::default();
        let service = service_with_seed(&repo);
        service.get_holdings(Sleeve::PersonalPension).unwrap();

        service.delete_holding(Sleeve::PersonalPension, "K200").unwrap();
        service.delete_holding(Sleeve::PersonalPension, "BOND").unwrap();

        assert!(service.get_holdings(Sleeve::PersonalPension).unwrap().is_empty());
        assert_eq!(*repo.upsert_calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_sleeve_saved_empty_is_not_seeded() {
        let repo = MockHoldingsRepository::default();
        let service = service_with_seed(&repo);

        service.replace_holdings(Sleeve::PersonalPension, &[]).unwrap();

        assert!(service.get_holdings(Sleeve::PersonalPension).unwrap().is_empty());
    }
}
