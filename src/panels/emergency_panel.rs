// Emergency panel: type catalog, contact directory, and the report form.
// Submission is simulated end to end; accepted reports land in a CSV log.

use crate::global_variables::{CONFIRMATION_RESET_MS, EMERGENCY_LOG_PATH, SUBMIT_DELAY_MS};
use crate::shared_data::current_timestamp;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{stdin, stdout, Write};
use std::path::{Path, PathBuf};
use tokio::time::{sleep, Duration};

#[derive(Debug, Clone)]
pub struct EmergencyContact {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub phone: &'static str,
    pub available: bool,
    pub avg_response_time: u32,
}

pub fn emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact {
            id: "police",
            name: "Police Emergency",
            role: "Law Enforcement",
            phone: "911",
            available: true,
            avg_response_time: 3,
        },
        EmergencyContact {
            id: "medical",
            name: "Medical Emergency",
            role: "Emergency Medical",
            phone: "911",
            available: true,
            avg_response_time: 4,
        },
        EmergencyContact {
            id: "transit-control",
            name: "Transit Control Center",
            role: "Transit Operations",
            phone: "+1-555-TRANSIT",
            available: true,
            avg_response_time: 2,
        },
        EmergencyContact {
            id: "security",
            name: "Transit Security",
            role: "Transport Security",
            phone: "+1-555-SECURITY",
            available: true,
            avg_response_time: 5,
        },
    ]
}

pub const EMERGENCY_TYPES: [(&str, &str); 6] = [
    ("medical", "Medical Emergency"),
    ("security", "Security Threat"),
    ("accident", "Accident"),
    ("breakdown", "Vehicle Breakdown"),
    ("harassment", "Harassment"),
    ("other", "Other Emergency"),
];

/// In-progress report. Owned by the panel, so switching tabs discards it.
#[derive(Debug, Clone, Default)]
pub struct ReportForm {
    pub kind: Option<String>,
    pub description: String,
}

impl ReportForm {
    /// The submit affordance is enabled only with a type and a non-blank
    /// description; invalid input is prevented rather than raised.
    pub fn can_submit(&self) -> bool {
        self.kind.is_some() && !self.description.trim().is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmergencyReportRecord {
    pub timestamp: u64,
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub timestamp: u64,
    pub response_eta_minutes: u32,
}

/// Appends a record to the CSV log, writing headers on first use.
fn log_report(path: &Path, record: &EmergencyReportRecord) -> Result<(), Box<dyn Error>> {
    let file_exists = path.exists();
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);
    wtr.serialize(record)?;
    wtr.flush()?;
    Ok(())
}

/// Simulated dispatch: a fixed delay standing in for the network call, then a
/// receipt. Always succeeds. Delays are injectable so tests run instantly.
#[derive(Debug, Clone)]
pub struct EmergencyDispatcher {
    submit_delay: Duration,
    reset_after: Duration,
    log_path: PathBuf,
}

impl EmergencyDispatcher {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            submit_delay: Duration::from_millis(SUBMIT_DELAY_MS),
            reset_after: Duration::from_millis(CONFIRMATION_RESET_MS),
            log_path: log_path.into(),
        }
    }

    pub fn open_default() -> Self {
        Self::new(EMERGENCY_LOG_PATH)
    }

    pub fn with_delays(mut self, submit_delay: Duration, reset_after: Duration) -> Self {
        self.submit_delay = submit_delay;
        self.reset_after = reset_after;
        self
    }

    /// How long the confirmation stays on screen before the form resets.
    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    pub async fn submit(&self, form: &ReportForm) -> Result<SubmissionReceipt, Box<dyn Error>> {
        sleep(self.submit_delay).await;
        let record = EmergencyReportRecord {
            timestamp: current_timestamp(),
            kind: form.kind.clone().unwrap_or_default(),
            description: form.description.trim().to_string(),
        };
        log_report(&self.log_path, &record)?;
        Ok(SubmissionReceipt {
            timestamp: record.timestamp,
            response_eta_minutes: 3,
        })
    }
}

pub async fn run() {
    let dispatcher = EmergencyDispatcher::open_default();
    let mut form = ReportForm::default();

    loop {
        println!("\nEmergency Response Center");
        println!("1. Choose Emergency Type");
        println!("2. Describe the Emergency");
        println!("3. Emergency Contacts");
        println!("4. Send Emergency Report");
        println!("5. Back");
        print!("Enter your choice: ");
        stdout().flush().unwrap();
        let mut input = String::new();
        stdin().read_line(&mut input).unwrap();
        let choice = input.trim().parse::<u32>().unwrap_or(0);
        match choice {
            1 => {
                for (i, (_, label)) in EMERGENCY_TYPES.iter().enumerate() {
                    println!("{}. {}", i + 1, label);
                }
                print!("Emergency type: ");
                stdout().flush().unwrap();
                let mut type_input = String::new();
                stdin().read_line(&mut type_input).unwrap();
                let idx = type_input.trim().parse::<usize>().unwrap_or(0);
                match EMERGENCY_TYPES.get(idx.wrapping_sub(1)) {
                    Some((id, label)) => {
                        form.kind = Some(id.to_string());
                        println!("Selected: {}", label);
                    }
                    None => println!("Invalid choice. Try again."),
                }
            }
            2 => {
                print!("Describe the emergency situation: ");
                stdout().flush().unwrap();
                let mut description = String::new();
                stdin().read_line(&mut description).unwrap();
                form.description = description.trim().to_string();
            }
            3 => {
                println!("\nEmergency Contacts");
                for contact in emergency_contacts() {
                    println!(
                        "  {} ({}) {} | {} | ~{}m response",
                        contact.name,
                        contact.role,
                        contact.phone,
                        if contact.available { "Available" } else { "Busy" },
                        contact.avg_response_time
                    );
                }
            }
            4 => {
                if !form.can_submit() {
                    println!("Select an emergency type and add a description first.");
                    continue;
                }
                println!("Sending Emergency Report...");
                match dispatcher.submit(&form).await {
                    Ok(receipt) => {
                        println!("Emergency Report Submitted");
                        println!(
                            "Your report has been received and forwarded to the appropriate authorities."
                        );
                        println!("Response Time: ~{} minutes", receipt.response_eta_minutes);
                        sleep(dispatcher.reset_after()).await;
                        form = ReportForm::default();
                    }
                    Err(e) => eprintln!("Error submitting report: {}", e),
                }
            }
            5 => break,
            _ => println!("Invalid choice. Try again."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn scratch_log() -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "privacy_transit_reports_{}_{}.csv",
            std::process::id(),
            n
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn submit_is_gated_on_type_and_description() {
        let mut form = ReportForm::default();
        assert!(!form.can_submit());

        form.kind = Some("medical".to_string());
        assert!(!form.can_submit());

        form.description = "   ".to_string();
        assert!(!form.can_submit());

        form.description = "Passenger collapsed near the rear doors".to_string();
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn submission_always_succeeds_and_is_logged() {
        let log = scratch_log();
        let dispatcher = EmergencyDispatcher::new(&log)
            .with_delays(Duration::from_millis(0), Duration::from_millis(0));
        let form = ReportForm {
            kind: Some("breakdown".to_string()),
            description: "Bus stopped between stations".to_string(),
        };

        let receipt = dispatcher.submit(&form).await.expect("submit");
        assert_eq!(receipt.response_eta_minutes, 3);

        let mut rdr = csv::Reader::from_path(&log).expect("open log");
        let records: Vec<EmergencyReportRecord> =
            rdr.deserialize().collect::<Result<_, _>>().expect("parse log");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, "breakdown");
        assert_eq!(records[0].description, "Bus stopped between stations");
        let _ = fs::remove_file(&log);
    }

    #[tokio::test]
    async fn repeated_submissions_append() {
        let log = scratch_log();
        let dispatcher = EmergencyDispatcher::new(&log)
            .with_delays(Duration::from_millis(0), Duration::from_millis(0));
        let form = ReportForm {
            kind: Some("other".to_string()),
            description: "Door sensor fault".to_string(),
        };
        dispatcher.submit(&form).await.expect("first submit");
        dispatcher.submit(&form).await.expect("second submit");

        let mut rdr = csv::Reader::from_path(&log).expect("open log");
        assert_eq!(rdr.deserialize::<EmergencyReportRecord>().count(), 2);
        let _ = fs::remove_file(&log);
    }

    #[test]
    fn form_state_dies_with_the_panel() {
        // Tab switch drops the panel and its form; remounting starts blank.
        {
            let mut form = ReportForm::default();
            form.kind = Some("security".to_string());
            form.description = "Unattended bag".to_string();
            assert!(form.can_submit());
        }
        let remounted = ReportForm::default();
        assert_eq!(remounted.kind, None);
        assert!(remounted.description.is_empty());
    }
}
