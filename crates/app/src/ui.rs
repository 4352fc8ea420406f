//! Interactive terminal form.
//!
//! Drives one [`ReportWorkflow`] session over stdin/stdout: prompt for the
//! operator name and equipment id, run the lookup, show the equipment
//! panel, prompt for the issue description, submit, show the outcome
//! banner. EOF or a blank name ends the session.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use equipreport_core::EquipmentRecord;
use equipreport_store::RecordStore;
use equipreport_workflow::{NoticeKind, ReportWorkflow};

/// Print the store connectivity indicator.
pub fn print_connectivity(configured: bool) {
    if configured {
        println!("[store] connected to record store");
    } else {
        println!("[store] record store not configured");
    }
}

/// Run the form loop until EOF or a blank name.
pub async fn run<S: RecordStore>(workflow: &ReportWorkflow<S>) {
    println!();
    println!("Upper West Regional Hospital");
    println!("Clinical Engineering - Equipment Issue Reporting");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some(name) = prompt(&mut lines, "Your name (blank to quit): ").await else {
            break;
        };
        if name.trim().is_empty() {
            break;
        }
        workflow.set_user_name(&name);

        let Some(id) = prompt(&mut lines, "Equipment ID: ").await else {
            break;
        };
        workflow.set_equipment_id(&id);

        match workflow.lookup_equipment().await {
            Ok(record) => print_equipment(&record),
            Err(_) => {
                print_notice(workflow);
                continue;
            }
        }

        let Some(description) = prompt(&mut lines, "Describe the issue: ").await else {
            break;
        };
        workflow.set_issue_description(&description);

        let _ = workflow.submit_report().await;
        print_notice(workflow);
        println!();
    }

    println!("Goodbye.");
}

/// Show a prompt and read one line. `None` on EOF or a read failure.
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Option<String> {
    print!("{label}");
    let _ = std::io::stdout().flush();

    match lines.next_line().await {
        Ok(line) => line,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read from stdin");
            None
        }
    }
}

/// Render the fetched equipment panel.
fn print_equipment(record: &EquipmentRecord) {
    println!();
    println!("Equipment details:");
    println!("  Name:          {}", record.equipment_name);
    println!("  Location:      {}", record.location);
    println!("  Model:         {}", record.model_name);
    println!("  Serial number: {}", record.serial_number);
    println!("  Manufacturer:  {}", record.manufacturer);
    println!("  Condition:     {}", record.condition);
    println!();
}

/// Render the active notice banner, if any.
fn print_notice<S: RecordStore>(workflow: &ReportWorkflow<S>) {
    if let Some(notice) = workflow.snapshot().notice {
        match notice.kind {
            NoticeKind::Error => println!("[error] {}", notice.text),
            NoticeKind::Success => println!("[ok] {}", notice.text),
        }
    }
}
