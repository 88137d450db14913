use crate::domain::dispatch::DeliveryRecord;
use anyhow::Result;
use std::io::Write;

/// Streams the delivery table as CSV: display names, RFC3339 timestamps.
pub fn write_csv<W: Write>(records: &[DeliveryRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["partner", "orders", "location", "timestamp"])?;
    for record in records {
        let orders = record.orders.to_string();
        let timestamp = record.timestamp.to_rfc3339();
        wtr.write_record([
            record.partner.as_str(),
            orders.as_str(),
            record.location.as_str(),
            timestamp.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dispatch::{Location, Partner};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_csv_shape_and_display_names() {
        let timestamp = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let records = vec![
            DeliveryRecord::new(Partner::Ekart, 5, Location::ElectronicCity, timestamp).unwrap(),
            DeliveryRecord::new(Partner::Delhivery, 3, Location::HsrLayout, timestamp).unwrap(),
        ];

        let mut buf = Vec::new();
        write_csv(&records, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "partner,orders,location,timestamp");
        assert!(lines[1].starts_with("Ekart,5,Electronic City,2025-01-01T09:00:00"));
        assert!(lines[2].starts_with("Delhivery,3,HSR Layout,"));
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let mut buf = Vec::new();
        write_csv(&[], &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.trim_end(), "partner,orders,location,timestamp");
    }
}
