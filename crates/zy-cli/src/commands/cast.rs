use colored::Colorize;

use zy_divination::{Reading, SeededSource};

pub fn run(method: &str, seed: Option<u64>, question: Option<&str>, json: bool) -> Result<(), String> {
    let method = super::parse_method(method)?;
    let mut source = match seed {
        Some(seed) => SeededSource::from_seed(seed),
        None => SeededSource::from_entropy(),
    };

    let reading = Reading::perform(method, &mut source);

    if json {
        let out = serde_json::to_string_pretty(&reading.cast).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if let Some(question) = question {
        println!("  {} {question}", "Question:".bold());
        println!();
    }
    println!("{reading}");

    Ok(())
}
