use anyhow::Result;
use colored::Colorize;
use mockpanel_core::role::default_roles;

use super::translator;

pub fn run() -> Result<()> {
    let t = translator(None);
    println!("{}", t.t("roles.heading", &[]).bright_magenta().bold());

    for role in default_roles() {
        println!("  {} {}", format!("{:<20}", role.id).bright_cyan(), role.title.bold());
        println!("  {:<20} {}", "", role.description.bright_black());
        if !role.focus_areas.is_empty() {
            println!("  {:<20} {}", "", role.focus_areas.join(", ").bright_black());
        }
    }
    Ok(())
}
