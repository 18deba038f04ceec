use std::cell::RefCell;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use grblpanel_core::{AppEvent, EventBus, EventBusConfig, NetworkTestError, SettingsEvent};
use grblpanel_dialog::{NetworkTestOutcome, Notifier, Pinger, SettingsDialog};
use grblpanel_settings::DialogSettings;

/// Records every probe and answers with a fixed reply
struct FakePinger {
    reply: Option<bool>,
    probes: RefCell<Vec<(Ipv4Addr, Duration)>>,
}

impl FakePinger {
    fn answering(reachable: bool) -> Self {
        Self {
            reply: Some(reachable),
            probes: RefCell::new(Vec::new()),
        }
    }

    fn broken() -> Self {
        Self {
            reply: None,
            probes: RefCell::new(Vec::new()),
        }
    }
}

impl Pinger for FakePinger {
    fn ping(&self, address: Ipv4Addr, timeout: Duration) -> grblpanel_core::Result<bool> {
        self.probes.borrow_mut().push((address, timeout));
        match self.reply {
            Some(reachable) => Ok(reachable),
            None => Err(NetworkTestError::ProbeFailed {
                program: "ping".to_string(),
                reason: "not found".to_string(),
            }
            .into()),
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn inform(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, _question: &str) -> bool {
        false
    }
}

fn dialog_with_address(address: &str) -> SettingsDialog {
    let bus = Arc::new(EventBus::with_config(EventBusConfig::recording(64)));
    let mut dialog = SettingsDialog::with_event_bus(&DialogSettings::default(), bus);
    dialog.set_ip_address(address);
    dialog
}

#[test]
fn test_invalid_address_skips_probe() {
    let dialog = dialog_with_address("999.999.999.999");
    let pinger = FakePinger::answering(true);
    let notifier = RecordingNotifier::default();

    let outcome = dialog.test_network(&pinger, &notifier);

    assert_eq!(outcome, NetworkTestOutcome::InvalidAddress);
    assert!(pinger.probes.borrow().is_empty());
    assert_eq!(*notifier.messages.borrow(), vec!["IP invalid!".to_string()]);
    assert!(dialog.event_bus().history().is_empty());
}

#[test]
fn test_reachable_address() {
    let dialog = dialog_with_address("192.168.1.20");
    let pinger = FakePinger::answering(true);
    let notifier = RecordingNotifier::default();

    let outcome = dialog.test_network(&pinger, &notifier);

    assert_eq!(outcome, NetworkTestOutcome::Reachable);
    assert_eq!(
        *pinger.probes.borrow(),
        vec![(Ipv4Addr::new(192, 168, 1, 20), Duration::from_millis(1500))]
    );
    assert_eq!(*notifier.messages.borrow(), vec!["Connection OK!".to_string()]);
    assert_eq!(
        dialog.event_bus().history(),
        vec![AppEvent::Settings(SettingsEvent::NetworkTested {
            address: "192.168.1.20".to_string(),
            reachable: true,
        })]
    );
}

#[test]
fn test_unreachable_address() {
    let dialog = dialog_with_address("10.255.255.1");
    let pinger = FakePinger::answering(false);
    let notifier = RecordingNotifier::default();

    assert_eq!(
        dialog.test_network(&pinger, &notifier),
        NetworkTestOutcome::Unreachable
    );
    assert_eq!(pinger.probes.borrow().len(), 1);
    assert_eq!(*notifier.messages.borrow(), vec!["Target not found!".to_string()]);
}

#[test]
fn test_probe_failure_reads_as_unreachable() {
    let dialog = dialog_with_address("10.0.0.1");
    let pinger = FakePinger::broken();
    let notifier = RecordingNotifier::default();

    assert_eq!(
        dialog.test_network(&pinger, &notifier),
        NetworkTestOutcome::Unreachable
    );
    assert_eq!(*notifier.messages.borrow(), vec!["Target not found!".to_string()]);
}
