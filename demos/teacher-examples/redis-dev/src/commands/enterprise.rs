//! Redis Enterprise instance management

use anyhow::Result;
use colored::*;

use crate::cli::EnterpriseAction;

pub async fn handle_action(action: EnterpriseAction, _verbose: bool) -> Result<()> {
    match action {
        EnterpriseAction::Start(_args) => {
            println!(
                "{} Redis Enterprise support is not yet implemented",
                "Warning:".yellow()
            );
            println!("This command will bootstrap Redis Enterprise clusters with HTTP API calls");
            println!("Including automatic cluster setup, database creation, and configuration");
            Ok(())
        }
        EnterpriseAction::Stop(_args) => {
            println!(
                "{} Redis Enterprise support is not yet implemented",
                "Warning:".yellow()
            );
            Ok(())
        }
        EnterpriseAction::Info(_args) => {
            println!(
                "{} Redis Enterprise support is not yet implemented",
                "Warning:".yellow()
            );
            Ok(())
        }
    }
}
