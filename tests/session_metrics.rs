use fleetboard::application::export::write_csv;
use fleetboard::application::session::DeliverySession;
use fleetboard::domain::dispatch::{Location, Partner};
use fleetboard::domain::metrics::RateCard;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn append_then_snapshot_matches_worked_example() {
    let mut session = DeliverySession::new(RateCard::default());
    session
        .append(Partner::Delhivery, 3, Location::Koramangala)
        .unwrap();
    session
        .append(Partner::Delhivery, 2, Location::Whitefield)
        .unwrap();
    session
        .append(Partner::Ekart, 5, Location::ElectronicCity)
        .unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.totals_by_partner[&Partner::Delhivery], 5);
    assert_eq!(snapshot.totals_by_partner[&Partner::Ekart], 5);
    assert_eq!(snapshot.grand_total, 10);
    assert_eq!(snapshot.earnings.today, dec!(30));
    assert_eq!(snapshot.earnings.week, dec!(210));
    assert_eq!(snapshot.earnings.month, dec!(900));
    assert_eq!(snapshot.fuel_saved_litres, dec!(1.5));
    assert_eq!(snapshot.manpower_saved, 1);
    assert_eq!(snapshot.cost_saved, dec!(25.0));

    // Appending 7 more Ekart orders moves exactly the Ekart total and the
    // grand total
    session
        .append(Partner::Ekart, 7, Location::HsrLayout)
        .unwrap();
    let after = session.snapshot();
    assert_eq!(after.totals_by_partner[&Partner::Ekart], 12);
    assert_eq!(after.totals_by_partner[&Partner::Delhivery], 5);
    assert_eq!(after.grand_total, 17);
}

#[test]
fn derived_identities_hold_over_seeded_data() {
    let mut session = DeliverySession::new(RateCard::default());
    session.seed_demo(100, Some(2024));

    let snapshot = session.snapshot();
    let summed: u64 = snapshot.totals_by_partner.values().sum();
    assert_eq!(snapshot.grand_total, summed);

    for (partner, &total) in &snapshot.totals_by_partner {
        assert_eq!(
            snapshot.optimized_by_partner[partner],
            Decimal::from(total) * dec!(0.85)
        );
        let savings = &snapshot.savings_by_partner[partner];
        assert_eq!(savings.day, Decimal::from(total) * dec!(5));
        assert_eq!(savings.week, savings.day * dec!(7));
        assert_eq!(savings.month, savings.day * dec!(30));
    }
    assert_eq!(snapshot.earnings.week, snapshot.earnings.today * dec!(7));
    assert_eq!(snapshot.earnings.month, snapshot.earnings.today * dec!(30));
}

#[test]
fn csv_export_mirrors_the_table() {
    let mut session = DeliverySession::new(RateCard::default());
    session.seed_demo(25, Some(7));
    session
        .append(Partner::Aramex, 9, Location::Whitefield)
        .unwrap();

    let mut buf = Vec::new();
    write_csv(session.records(), &mut buf).unwrap();
    let out = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 1 + 26);
    assert_eq!(lines[0], "partner,orders,location,timestamp");
    assert!(lines.last().unwrap().starts_with("Aramex,9,Whitefield,"));
}

#[test]
fn custom_rate_card_drives_the_snapshot() {
    let rates = RateCard {
        optimization_factor: dec!(0.75),
        earning_per_order: dec!(4),
        ..RateCard::default()
    };
    let mut session = DeliverySession::new(rates);
    session
        .append(Partner::Indiapost, 10, Location::Koramangala)
        .unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.optimized_by_partner[&Partner::Indiapost], dec!(7.5));
    assert_eq!(snapshot.earnings.today, dec!(40));
}
