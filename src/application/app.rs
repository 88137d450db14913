use crate::application::session::DeliverySession;
use crate::domain::dispatch::{Location, Partner};
use crossbeam_channel::Receiver;
use std::collections::VecDeque;
use tracing::warn;

const MAX_LOG_LINES: usize = 500;

/// Outcome banner shown under the input form after an append attempt
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

/// State backing the dashboard window.
///
/// Owns the delivery session plus the transient widget state (current input
/// selection, status banner, log ring buffer). Rendering lives in
/// `interfaces::ui`.
pub struct DashboardApp {
    pub session: DeliverySession,
    pub log_rx: Receiver<String>,

    // UI state
    pub input_partner: Partner,
    pub input_orders: u32,
    pub input_location: Location,
    pub last_status: Option<StatusLine>,
    pub log_lines: VecDeque<String>,
    pub logs_collapsed: bool,
}

impl DashboardApp {
    pub fn new(session: DeliverySession, log_rx: Receiver<String>) -> Self {
        Self {
            session,
            log_rx,
            input_partner: Partner::Delhivery,
            input_orders: 1,
            input_location: Location::Koramangala,
            last_status: None,
            log_lines: VecDeque::new(),
            logs_collapsed: true,
        }
    }

    /// Appends the currently selected (partner, orders, location) to the
    /// session table and records the outcome for the status banner.
    pub fn submit_delivery(&mut self) {
        match self
            .session
            .append(self.input_partner, self.input_orders, self.input_location)
        {
            Ok(record) => {
                self.last_status = Some(StatusLine {
                    message: format!(
                        "Added {} orders for {} in {}",
                        record.orders, record.partner, record.location
                    ),
                    is_error: false,
                });
            }
            Err(e) => {
                warn!("Rejected delivery input: {}", e);
                self.last_status = Some(StatusLine {
                    message: e.to_string(),
                    is_error: true,
                });
            }
        }
    }

    /// Pulls pending log lines from the tracing channel into the ring buffer.
    pub fn drain_logs(&mut self) {
        while let Ok(line) = self.log_rx.try_recv() {
            for piece in line.lines() {
                if piece.trim().is_empty() {
                    continue;
                }
                self.log_lines.push_back(piece.to_string());
            }
        }
        while self.log_lines.len() > MAX_LOG_LINES {
            self.log_lines.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::RateCard;

    fn app() -> DashboardApp {
        let (_tx, rx) = crossbeam_channel::unbounded();
        DashboardApp::new(DeliverySession::new(RateCard::default()), rx)
    }

    #[test]
    fn test_submit_appends_and_reports_success() {
        let mut app = app();
        app.input_partner = Partner::Ekart;
        app.input_orders = 7;
        app.input_location = Location::HsrLayout;

        app.submit_delivery();

        let status = app.last_status.expect("status set");
        assert!(!status.is_error);
        assert!(status.message.contains("7 orders for Ekart in HSR Layout"));
        assert_eq!(app.session.snapshot().totals_by_partner[&Partner::Ekart], 7);
    }

    #[test]
    fn test_submit_surfaces_domain_rejection() {
        let mut app = app();
        app.input_orders = 0;

        app.submit_delivery();

        let status = app.last_status.expect("status set");
        assert!(status.is_error);
        assert!(app.session.log().is_empty());
    }

    #[test]
    fn test_drain_logs_caps_buffer() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut app = DashboardApp::new(DeliverySession::new(RateCard::default()), rx);
        for i in 0..(MAX_LOG_LINES + 50) {
            tx.send(format!("line {i}")).unwrap();
        }

        app.drain_logs();

        assert_eq!(app.log_lines.len(), MAX_LOG_LINES);
        assert_eq!(
            app.log_lines.back().unwrap(),
            &format!("line {}", MAX_LOG_LINES + 49)
        );
    }
}
