//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `trainbase_core` wiring against
//!   a real temporary directory.

use trainbase_core::{TrainingStorageService, TrainingSubject};
use uuid::Uuid;

fn main() {
    println!("trainbase_core version={}", trainbase_core::core_version());

    let base_dir = std::env::temp_dir().join("trainbase-smoke");
    let service = match TrainingStorageService::local(&base_dir) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("storage init failed: {err}");
            std::process::exit(1);
        }
    };

    let subject = TrainingSubject::general(Uuid::new_v4());
    let result = service
        .set_content(&subject, "smoke training content")
        .and_then(|descriptor| {
            println!("descriptor={descriptor}");
            let content = service.get_content(&descriptor)?;
            println!("content={content}");
            service.set_content(&subject, "")?;
            Ok(())
        });

    match result {
        Ok(()) => println!("smoke=ok"),
        Err(err) => {
            eprintln!("smoke failed: {err}");
            std::process::exit(1);
        }
    }
}
