use walletledger_ledger::{EntryType, ErrorKind, Ledger};

fn init_logging() {
    walletledger_observability::init();
}

#[test]
fn deposits_withdrawals_and_totals_across_currencies() {
    init_logging();
    let ledger = Ledger::new();
    assert_eq!(ledger.entry_count(), 0);

    ledger.deposit(50_000, "USD").unwrap();
    ledger.deposit(20_000, "USD").unwrap();
    ledger.deposit(10_000, "EUR").unwrap();
    assert_eq!(ledger.entry_count(), 3);
    assert_eq!(ledger.balance("USD").unwrap(), 70_000);
    assert_eq!(ledger.balance("EUR").unwrap(), 10_000);

    assert!(ledger.has_sufficient_funds(40_000, "USD").unwrap());
    assert!(!ledger.has_sufficient_funds(80_000, "USD").unwrap());

    ledger.withdraw(15_000, "USD").unwrap();
    ledger.withdraw(5_000, "USD").unwrap();
    assert_eq!(ledger.balance("USD").unwrap(), 50_000);
    assert_eq!(ledger.total_credits("USD").unwrap(), 70_000);
    assert_eq!(ledger.total_debits("USD").unwrap(), 20_000);
    assert_eq!(ledger.balance("EUR").unwrap(), 10_000);

    let history: Vec<String> = ledger.history_lines().iter().collect();
    assert_eq!(history.len(), 5);
    assert!(history[0].starts_with("Entry{id='dep-1', CREDIT 50000 USD, createdAt="));
    assert!(history[3].starts_with("Entry{id='wd-4', DEBIT 15000 USD"));
    assert!(history[4].starts_with("Entry{id='wd-5', DEBIT 5000 USD"));
}

#[test]
fn malformed_deposits_are_invalid_arguments() {
    let ledger = Ledger::new();
    assert_eq!(
        ledger.deposit(-100, "USD").unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        ledger.deposit(100, "us").unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(ledger.entry_count(), 0);
}

#[test]
fn add_then_remove_restores_count_and_history() {
    let ledger = Ledger::new();
    ledger.deposit(1_000, "USD").unwrap();
    let count = ledger.entry_count();
    let lines_before: Vec<String> = ledger.history_lines().iter().collect();

    ledger
        .add_entry("adj-1", 250, "USD", EntryType::Debit)
        .unwrap();
    assert_eq!(ledger.entry_count(), count + 1);

    let removed = ledger.remove_entry("adj-1").unwrap();
    assert_eq!(removed.id().as_str(), "adj-1");
    assert_eq!(ledger.entry_count(), count);
    let lines_after: Vec<String> = ledger.history_lines().iter().collect();
    assert_eq!(lines_after, lines_before);
    assert!(ledger.find_by_id("adj-1").unwrap().is_none());

    assert_eq!(
        ledger.remove_entry("adj-1").unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn evicted_entry_can_be_restored_with_identical_fields() {
    let ledger = Ledger::new();
    ledger.deposit(50_000, "USD").unwrap();
    ledger.deposit(10_000, "EUR").unwrap();

    let evicted = ledger.remove_first().unwrap();
    assert_eq!(evicted.id().as_str(), "dep-1");
    assert_eq!(ledger.entry_count(), 1);
    assert_eq!(ledger.balance("USD").unwrap(), 0);

    ledger
        .add_entry(
            evicted.id().as_str(),
            evicted.amount_cents(),
            evicted.currency().as_str(),
            evicted.entry_type(),
        )
        .unwrap();

    let restored = ledger.find_by_id("dep-1").unwrap().unwrap();
    assert!(restored.same_movement(&evicted));
    assert!(restored.created_at() >= evicted.created_at());
    assert_eq!(ledger.balance("USD").unwrap(), 50_000);

    // Restored entries go to the back of the eviction order.
    assert_eq!(ledger.remove_first().unwrap().id().as_str(), "dep-2");
}

#[test]
fn aggregation_is_read_only_and_repeatable() {
    let ledger = Ledger::new();
    ledger.deposit(300, "USD").unwrap();
    ledger.withdraw(120, "USD").unwrap();

    let count = ledger.entry_count();
    let first = ledger.balance("USD").unwrap();
    let second = ledger.balance("USD").unwrap();
    assert_eq!(first, second);
    assert_eq!(first, 180);
    assert_eq!(ledger.entry_count(), count);

    let totals = ledger.totals("USD").unwrap();
    assert_eq!((totals.credits, totals.debits, totals.balance()), (300, 120, 180));
}

#[test]
fn history_is_restartable_and_detached() {
    let ledger = Ledger::new();
    ledger.deposit(1, "USD").unwrap();
    ledger.deposit(2, "USD").unwrap();

    let history = ledger.history_lines();
    ledger.clear();

    let first: Vec<String> = history.iter().collect();
    let second: Vec<String> = (&history).into_iter().collect();
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    assert!(ledger.history_lines().is_empty());
}

#[test]
fn snapshot_serializes_for_a_host_persistence_layer() {
    let ledger = Ledger::new();
    ledger.deposit(700, "JPY").unwrap();

    let snapshot = ledger.snapshot();
    let json = serde_json::to_value(snapshot.as_slice()).unwrap();
    assert_eq!(json[0]["id"], "dep-1");
    assert_eq!(json[0]["entry_type"], "CREDIT");
    assert_eq!(json[0]["currency"], "JPY");
    assert_eq!(json[0]["amount_cents"], 700);
}

#[test]
fn sufficient_funds_holds_at_exactly_the_balance() {
    let ledger = Ledger::new();
    ledger.deposit(500, "USD").unwrap();

    assert!(ledger.has_sufficient_funds(500, "USD").unwrap());
    assert!(!ledger.has_sufficient_funds(501, "USD").unwrap());
    assert_eq!(ledger.entry_count(), 1);
}

#[test]
fn removed_entry_can_be_re_added_with_identical_fields() {
    let ledger = Ledger::new();
    ledger.deposit(50_000, "USD").unwrap();
    ledger.add_entry("fee-1", 300, "USD", EntryType::Debit).unwrap();

    let removed = ledger.remove_entry("fee-1").unwrap();
    assert!(ledger.find_by_id("fee-1").unwrap().is_none());
    assert_eq!(ledger.balance("USD").unwrap(), 50_000);

    ledger
        .add_entry(
            removed.id().as_str(),
            removed.amount_cents(),
            removed.currency().as_str(),
            removed.entry_type(),
        )
        .unwrap();

    let restored = ledger.find_by_id("fee-1").unwrap().unwrap();
    assert!(restored.same_movement(&removed));
    assert_eq!(ledger.balance("USD").unwrap(), 49_700);
    assert_eq!(ledger.entry_count(), 2);
}
