use comfy_table::{ContentArrangement, Table};

use zy_core::{Hexagram, HexagramInfo};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["No.", "Name", "Chinese", "Pinyin", "Trigrams"]);

    for info in HexagramInfo::all() {
        let hexagram = Hexagram::from_number(info.number).map_err(|e| e.to_string())?;
        let trigrams = format!("{} over {}", hexagram.upper().name(), hexagram.lower().name());
        table.add_row(vec![
            info.number.to_string(),
            info.name.to_string(),
            info.chinese.to_string(),
            info.pinyin.to_string(),
            trigrams,
        ]);
    }

    println!("{table}");
    println!();
    println!("  64 hexagrams");

    Ok(())
}
