use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use super::{load_config, translator};

pub async fn run(config: Option<PathBuf>) -> Result<()> {
    let config = load_config(config).await?;
    let t = translator(None);

    println!("{}", t.t("personas.heading", &[]).bright_magenta().bold());
    for persona in &config.personas {
        println!(
            "  {} {}",
            persona.display_label().bright_magenta(),
            format!("- {}", persona.style).bright_black()
        );
        println!("    {}", persona.introduction);
    }
    Ok(())
}
