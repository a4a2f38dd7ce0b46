use colored::Colorize;

use zy_core::Hexagram;

pub fn run(number: u8, json: bool) -> Result<(), String> {
    let hexagram = Hexagram::from_number(number).map_err(|e| e.to_string())?;
    let info = hexagram.info();

    if json {
        let out = serde_json::json!({
            "number": info.number,
            "name": info.name,
            "chinese": info.chinese,
            "pinyin": info.pinyin,
            "upper_trigram": hexagram.upper().name(),
            "lower_trigram": hexagram.lower().name(),
            "lines": hexagram.lines(),
        });
        println!("{}", serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?);
        return Ok(());
    }

    println!(
        "  {} {} ({}, {})",
        format!("Hexagram {}", info.number).bold(),
        info.name,
        info.chinese,
        info.pinyin
    );
    println!();
    for (i, line) in hexagram.lines().iter().enumerate().rev() {
        println!("  Line {}: {}", i + 1, line.glyph());
    }
    println!();

    let upper = hexagram.upper();
    let lower = hexagram.lower();
    println!("  Upper trigram: {} — {}", upper, upper.attribute());
    println!("  Lower trigram: {} — {}", lower, lower.attribute());

    Ok(())
}
